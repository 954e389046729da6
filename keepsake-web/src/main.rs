//! keepsake - Photo and video memories page
//!
//! A two-section web page. The gallery section reveals itself the first time
//! it is shown and opens items in a lightbox.

mod pages;

use dioxus::prelude::*;
use keepsake_common::MotionConfig;
use keepsake_ui::AnimatorHandle;
use pages::PageLayout;
use tracing::{info, Level};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

#[component]
fn App() -> Element {
    use_context_provider(AnimatorHandle::default);
    use_context_provider(|| {
        if prefers_reduced_motion() {
            info!("Reduced motion requested, gallery animations are instant");
            MotionConfig::reduced()
        } else {
            MotionConfig::default()
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Our Memories" }
        PageLayout {}
    }
}

fn prefers_reduced_motion() -> bool {
    web_sys_x::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches())
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    info!("Starting keepsake");
    dioxus::launch(App);
}
