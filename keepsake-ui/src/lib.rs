//! keepsake-ui - Gallery widget and browser adapters
//!
//! Components render from `keepsake_common::GalleryState`. DOM side effects
//! (tweens, media playback, scroll lock, key listeners) go through the thin
//! adapters in this crate.

pub mod animator;
pub mod components;
pub mod error;
pub mod media_handle;
pub mod page_chrome;
pub mod wasm_utils;

pub use animator::{Animator, AnimatorHandle, TweenHandle, WebAnimator};
pub use components::*;
pub use error::{AnimationError, MediaError};
pub use media_handle::MediaHandle;
pub use page_chrome::{PageChrome, ScrollLockGuard};
