/// Reference count behind the page-level scroll lock.
///
/// Several widgets may lock page scrolling at once. The page only becomes
/// scrollable again once every holder has released.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLockCounter {
    holders: u32,
}

impl ScrollLockCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a holder. Returns true when the page transitions to locked.
    pub fn acquire(&mut self) -> bool {
        self.holders = self.holders.saturating_add(1);
        self.holders == 1
    }

    /// Drop a holder. Returns true when the page transitions to unlocked.
    /// Releasing with no holders is a no-op.
    pub fn release(&mut self) -> bool {
        if self.holders == 0 {
            return false;
        }
        self.holders -= 1;
        self.holders == 0
    }

    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    pub fn holders(&self) -> u32 {
        self.holders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_holder_edges() {
        let mut lock = ScrollLockCounter::new();
        assert!(!lock.is_locked());
        assert!(lock.acquire());
        assert!(lock.is_locked());
        assert!(lock.release());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_nested_holders_unlock_on_last_release() {
        let mut lock = ScrollLockCounter::new();
        assert!(lock.acquire());
        assert!(!lock.acquire());
        assert_eq!(lock.holders(), 2);

        assert!(!lock.release());
        assert!(lock.is_locked());
        assert!(lock.release());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_release_when_unlocked_is_noop() {
        let mut lock = ScrollLockCounter::new();
        assert!(!lock.release());
        assert_eq!(lock.holders(), 0);
        assert!(lock.acquire());
    }
}
