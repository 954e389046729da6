//! Gallery grid thumbnail

use crate::components::icons::PlayIcon;
use dioxus::prelude::*;
use keepsake_common::{MediaItem, MediaKind};

/// One clickable tile in the gallery grid
///
/// Images load lazily. Videos only fetch metadata and show their poster
/// frame with a play badge on top.
#[component]
pub fn GalleryThumbnail(
    item: MediaItem,
    index: usize,
    /// Keep the tile invisible until the reveal animation takes over
    hidden: bool,
    on_open: EventHandler<usize>,
    /// Receives the tile's DOM element once mounted (reveal animation target)
    on_mounted: EventHandler<web_sys_x::Element>,
) -> Element {
    let class = if hidden {
        "gallery-item is-hidden"
    } else {
        "gallery-item"
    };

    rsx! {
        div {
            class,
            onclick: move |_| on_open.call(index),
            onmounted: move |evt: MountedEvent| {
                if let Some(element) = evt.data().downcast::<web_sys_x::Element>().cloned() {
                    on_mounted.call(element);
                }
            },
            match item.kind {
                MediaKind::Video => rsx! {
                    video {
                        class: "gallery-video",
                        src: "{item.src}",
                        poster: item.poster.clone(),
                        preload: "metadata",
                        muted: true,
                        aria_label: "{item.alt}",
                    }
                    div { class: "play-icon",
                        PlayIcon { class: "play-icon-glyph" }
                    }
                },
                MediaKind::Image => rsx! {
                    img {
                        class: "gallery-image",
                        src: "{item.src}",
                        alt: "{item.alt}",
                        loading: "lazy",
                    }
                },
            }
        }
    }
}
