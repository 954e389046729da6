//! Lightbox overlay view

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use dioxus::prelude::*;
use keepsake_common::{MediaItem, MediaKind};

/// Full-screen viewer for one gallery item
///
/// Clicking the backdrop closes it; clicks on the media or the controls do
/// not reach the backdrop. The media element is keyed by `presentation`, so
/// every index swap mounts a fresh element that reports itself through
/// `on_media_mounted`.
#[component]
pub fn LightboxView(
    item: MediaItem,
    index: usize,
    total: usize,
    presentation: u64,
    /// Media is waiting for its entrance tween; keep it invisible until then
    entering: bool,
    on_close: EventHandler<()>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_media_mounted: EventHandler<web_sys_x::Element>,
) -> Element {
    let media_style = if entering { "opacity: 0;" } else { "" };
    let report_mounted = move |evt: MountedEvent| {
        if let Some(element) = evt.data().downcast::<web_sys_x::Element>().cloned() {
            on_media_mounted.call(element);
        }
    };

    rsx! {
        div {
            class: "lightbox",
            role: "dialog",
            aria_modal: "true",
            onclick: move |_| on_close.call(()),

            // Counter
            if total > 1 {
                div { class: "lightbox-counter", {format!("{} / {}", index + 1, total)} }
            }

            match item.kind {
                MediaKind::Video => rsx! {
                    video {
                        key: "{presentation}",
                        class: "lightbox-media",
                        style: media_style,
                        src: "{item.src}",
                        poster: item.poster.clone(),
                        controls: true,
                        autoplay: true,
                        aria_label: "{item.alt}",
                        onclick: move |e| e.stop_propagation(),
                        onmounted: report_mounted,
                    }
                },
                MediaKind::Image => rsx! {
                    img {
                        key: "{presentation}",
                        class: "lightbox-media",
                        style: media_style,
                        src: "{item.src}",
                        alt: "{item.alt}",
                        onclick: move |e| e.stop_propagation(),
                        onmounted: report_mounted,
                    }
                },
            }

            button {
                class: "lightbox-close",
                aria_label: "Close lightbox",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(());
                },
                XIcon { class: "icon-lg" }
            }

            button {
                class: "nav-btn nav-prev",
                aria_label: "Previous photo",
                onclick: move |e| {
                    e.stop_propagation();
                    on_prev.call(());
                },
                ChevronLeftIcon { class: "icon-xl" }
            }

            button {
                class: "nav-btn nav-next",
                aria_label: "Next photo",
                onclick: move |e| {
                    e.stop_propagation();
                    on_next.call(());
                },
                ChevronRightIcon { class: "icon-xl" }
            }
        }
    }
}
