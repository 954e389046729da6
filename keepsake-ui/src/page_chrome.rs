//! Page-level chrome shared by every widget on the page
//!
//! Page scrolling is locked by setting `overflow: hidden` on `<body>`. Locks
//! are reference counted, so one widget closing its overlay does not unlock
//! the page while another still holds it.

use std::cell::RefCell;

use keepsake_common::ScrollLockCounter;
use tracing::{debug, warn};

thread_local! {
    static SCROLL_LOCK: RefCell<ScrollLockCounter> = RefCell::new(ScrollLockCounter::new());
}

/// Access point for page-level side effects.
pub struct PageChrome;

impl PageChrome {
    /// Lock page scrolling until the returned guard is dropped.
    pub fn lock_scroll() -> ScrollLockGuard {
        let became_locked = SCROLL_LOCK.with(|lock| lock.borrow_mut().acquire());
        if became_locked {
            apply_body_overflow(true);
        }
        ScrollLockGuard { _private: () }
    }

    pub fn is_scroll_locked() -> bool {
        SCROLL_LOCK.with(|lock| lock.borrow().is_locked())
    }

    fn unlock_scroll() {
        let became_unlocked = SCROLL_LOCK.with(|lock| lock.borrow_mut().release());
        if became_unlocked {
            apply_body_overflow(false);
        }
    }
}

/// Holds one scroll lock. Dropping it releases the lock.
pub struct ScrollLockGuard {
    _private: (),
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        PageChrome::unlock_scroll();
    }
}

fn apply_body_overflow(locked: bool) {
    let Some(body) = web_sys_x::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };

    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };

    match result {
        Ok(()) => debug!("Page scroll {}", if locked { "locked" } else { "unlocked" }),
        Err(e) => warn!("Failed to update body overflow: {:?}", e),
    }
}
