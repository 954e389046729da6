//! Lightbox behavior driven the way the view layer drives it: key presses in,
//! tween completions reported back in whatever order the animator delivers them.

mod support;

use keepsake_common::{
    default_media, Entrance, GalleryState, LightboxCommand, MediaKind, NavDirection, NavStep,
    ScrollLockCounter, Transition,
};
use support::tracing_init;

/// Minimal stand-in for the Gallery component: owns the state, the scroll
/// lock and a queue of tween completions the "animator" has yet to deliver.
struct Harness {
    state: GalleryState,
    kinds: Vec<MediaKind>,
    scroll: ScrollLockCounter,
    holds_scroll: bool,
    media_mounted: bool,
    pending_exits: Vec<Transition>,
    pending_entrances: Vec<Transition>,
    autoplay_attempts: Vec<usize>,
}

impl Harness {
    fn new() -> Self {
        tracing_init();
        let kinds: Vec<MediaKind> = default_media().iter().map(|item| item.kind).collect();
        Self {
            state: GalleryState::new(kinds.len()),
            kinds,
            scroll: ScrollLockCounter::new(),
            holds_scroll: false,
            media_mounted: false,
            pending_exits: Vec::new(),
            pending_entrances: Vec::new(),
            autoplay_attempts: Vec::new(),
        }
    }

    /// Mirror of the scroll-lock effect: hold the lock exactly while open.
    fn sync_scroll(&mut self) {
        let open = self.state.is_lightbox_open();
        if open && !self.holds_scroll {
            self.scroll.acquire();
            self.holds_scroll = true;
        } else if !open && self.holds_scroll {
            self.scroll.release();
            self.holds_scroll = false;
        }
        self.media_mounted = open;
    }

    /// The media element remounts after a render; claim its entrance.
    fn mount_media(&mut self) {
        if !self.state.is_lightbox_open() {
            return;
        }
        if let Some(Entrance::Navigate(transition)) = self.state.take_pending_entrance() {
            self.pending_entrances.push(transition);
        }
    }

    fn open(&mut self, index: usize) {
        self.state.open(index);
        self.sync_scroll();
        self.mount_media();
    }

    fn key(&mut self, key: &str) {
        match self.state.command_for_key(key) {
            Some(LightboxCommand::Close) => {
                self.state.close();
                self.sync_scroll();
            }
            Some(LightboxCommand::Prev) => self.navigate(NavDirection::Prev),
            Some(LightboxCommand::Next) => self.navigate(NavDirection::Next),
            None => {}
        }
    }

    fn navigate(&mut self, direction: NavDirection) {
        if let NavStep::Exit(transition) = self.state.navigate(direction, self.media_mounted) {
            self.pending_exits.push(transition);
        }
    }

    /// Deliver every queued tween completion, exits before entrances.
    fn run_animations(&mut self) {
        while !self.pending_exits.is_empty() || !self.pending_entrances.is_empty() {
            for transition in std::mem::take(&mut self.pending_exits) {
                if self.state.exit_complete(transition.token) {
                    self.mount_media();
                }
            }
            for transition in std::mem::take(&mut self.pending_entrances) {
                if let Some(index) = self.state.entrance_complete(transition.token) {
                    if self.kinds[index] == MediaKind::Video {
                        self.autoplay_attempts.push(index);
                    }
                }
            }
        }
    }

    fn unmount(&mut self) {
        self.state.close();
        self.sync_scroll();
    }
}

#[test]
fn test_five_settled_steps_from_first_image() {
    let mut h = Harness::new();
    h.open(0);
    assert_eq!(h.kinds[0], MediaKind::Image);

    for _ in 0..5 {
        h.key("ArrowRight");
        h.run_animations();
    }

    assert_eq!(h.state.current_index(), 5);
    assert!(h.autoplay_attempts.is_empty());
    assert!(!h.state.is_transitioning());
}

#[test]
fn test_five_rapid_steps_land_on_same_index() {
    let mut h = Harness::new();
    h.open(0);

    for _ in 0..5 {
        h.key("ArrowRight");
    }
    h.run_animations();

    assert_eq!(h.state.current_index(), 5);
    assert!(!h.state.is_transitioning());
}

#[test]
fn test_autoplay_attempted_when_landing_on_video() {
    let mut h = Harness::new();
    h.open(0);

    h.key("ArrowLeft");
    h.run_animations();

    assert_eq!(h.state.current_index(), 8);
    assert_eq!(h.autoplay_attempts, vec![8]);

    h.key("ArrowRight");
    h.run_animations();
    assert_eq!(h.state.current_index(), 0);
    assert_eq!(h.autoplay_attempts, vec![8]);
}

#[test]
fn test_wraparound_in_both_directions() {
    let mut h = Harness::new();
    h.open(8);
    h.key("ArrowRight");
    h.run_animations();
    assert_eq!(h.state.current_index(), 0);

    h.key("ArrowLeft");
    h.run_animations();
    assert_eq!(h.state.current_index(), 8);
}

#[test]
fn test_scroll_lock_tracks_lightbox() {
    let mut h = Harness::new();
    assert!(!h.scroll.is_locked());

    h.open(2);
    assert!(h.scroll.is_locked());

    h.key("ArrowRight");
    h.run_animations();
    assert!(h.scroll.is_locked());

    h.key("Escape");
    assert!(!h.state.is_lightbox_open());
    assert!(!h.scroll.is_locked());
    assert_eq!(h.state.current_index(), 3);
}

#[test]
fn test_unmount_while_open_unlocks_scroll() {
    let mut h = Harness::new();
    h.open(1);
    assert!(h.scroll.is_locked());

    h.unmount();
    assert!(!h.scroll.is_locked());
}

#[test]
fn test_arrow_keys_do_nothing_while_closed() {
    let mut h = Harness::new();
    h.key("ArrowRight");
    h.key("ArrowLeft");
    h.run_animations();
    assert_eq!(h.state.current_index(), 0);
    assert!(!h.state.is_lightbox_open());
}

#[test]
fn test_reveal_not_repeated_across_activation_toggles() {
    let mut h = Harness::new();
    let mut reveals = 0;
    for active in [true, false, true, false, true] {
        if h.state.begin_reveal(active) {
            reveals += 1;
            h.state.finish_reveal();
        }
    }
    assert_eq!(reveals, 1);
    assert!(h.state.is_revealed());
}
