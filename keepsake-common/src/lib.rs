//! keepsake-common - Pure gallery logic shared by the UI and web crates
//!
//! Nothing in here touches the DOM. The view layer feeds events in and
//! executes whatever tweens or media calls the state machine asks for.

pub mod gallery_state;
pub mod media;
pub mod motion;
pub mod scroll_lock;
pub mod tween;

pub use gallery_state::{
    Entrance, GalleryState, LightboxCommand, NavDirection, NavPhase, NavStep, Transition,
    TransitionToken,
};
pub use media::{default_media, MediaItem, MediaKind};
pub use motion::MotionConfig;
pub use scroll_lock::ScrollLockCounter;
pub use tween::{Easing, Tween, Visual};
