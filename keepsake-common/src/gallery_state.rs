//! Gallery view state and lightbox navigation state machine
//!
//! Navigation runs in two animated phases. The view layer reports tween
//! completions back with the `TransitionToken` it was given, and completions
//! carrying an outdated token are ignored:
//!
//! ```text
//! Idle -> ExitAnimating -> IndexSwapped -> EntranceAnimating -> Idle
//! ```
//!
//! A navigation issued mid-transition restarts from the exit phase and targets
//! one step beyond the previous target, so rapid key presses are never lost.

use tracing::debug;

/// Direction of a lightbox navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDirection {
    Next,
    Prev,
}

impl NavDirection {
    /// Neighbouring index with wraparound. `len` must be non-zero.
    pub fn step(self, index: usize, len: usize) -> usize {
        match self {
            Self::Next => (index + 1) % len,
            Self::Prev => (index % len + len - 1) % len,
        }
    }

    /// Horizontal offset the outgoing media slides to.
    pub fn exit_offset(self, distance: f64) -> f64 {
        match self {
            Self::Next => -distance,
            Self::Prev => distance,
        }
    }

    /// Horizontal offset the incoming media slides in from.
    pub fn entrance_offset(self, distance: f64) -> f64 {
        -self.exit_offset(distance)
    }
}

/// Identifies one navigation transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub token: TransitionToken,
    pub direction: NavDirection,
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavPhase {
    #[default]
    Idle,
    ExitAnimating(Transition),
    /// Index swapped, waiting for the new media element to mount
    IndexSwapped(Transition),
    EntranceAnimating(Transition),
}

/// What the view layer has to do after a navigation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavStep {
    /// Nothing to navigate
    Ignored,
    /// No media element was mounted; the index changed without animation
    Swapped(usize),
    /// Run the exit tween, then report `exit_complete`
    Exit(Transition),
}

/// Entrance tween owed to the next mounted lightbox media element
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entrance {
    /// Lightbox was just opened
    Open,
    /// Second half of a navigation; report `entrance_complete` when done
    Navigate(Transition),
}

/// Keyboard commands understood while the lightbox is open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Prev,
    Next,
}

impl LightboxCommand {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Prev),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum RevealState {
    #[default]
    Hidden,
    Revealing,
    Revealed,
}

/// State owned by one gallery widget
#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    item_count: usize,
    lightbox_open: bool,
    current_index: usize,
    reveal: RevealState,
    phase: NavPhase,
    open_entrance_pending: bool,
    /// Bumped whenever a different media presentation should be mounted
    presentation: u64,
    next_token: u64,
}

impl GalleryState {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            lightbox_open: false,
            current_index: 0,
            reveal: RevealState::Hidden,
            phase: NavPhase::Idle,
            open_entrance_pending: false,
            presentation: 0,
            next_token: 0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox_open
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        self.phase != NavPhase::Idle
    }

    /// Render key for the lightbox media element. Changes on every swap so the
    /// element remounts and receives its entrance tween.
    pub fn presentation(&self) -> u64 {
        self.presentation
    }

    /// True while the mounted media is still waiting for its entrance tween.
    pub fn has_pending_entrance(&self) -> bool {
        self.open_entrance_pending || matches!(self.phase, NavPhase::IndexSwapped(_))
    }

    // Reveal

    /// Whether the reveal animation has run far enough to flip the `revealed` flag.
    pub fn is_revealed(&self) -> bool {
        self.reveal == RevealState::Revealed
    }

    /// Whether the reveal has started (or finished).
    pub fn reveal_started(&self) -> bool {
        self.reveal != RevealState::Hidden
    }

    /// Start the reveal when the widget becomes active. Returns true exactly
    /// once per widget lifetime; the caller runs the staggered reveal tween.
    pub fn begin_reveal(&mut self, is_active: bool) -> bool {
        if !is_active || self.reveal != RevealState::Hidden {
            return false;
        }
        debug!("Gallery reveal started");
        self.reveal = RevealState::Revealing;
        true
    }

    /// Deferred half of the reveal: set the `revealed` flag.
    pub fn finish_reveal(&mut self) {
        if self.reveal == RevealState::Revealing {
            self.reveal = RevealState::Revealed;
        }
    }

    // Lightbox

    pub fn open(&mut self, index: usize) {
        if self.item_count == 0 {
            return;
        }
        self.current_index = index % self.item_count;
        self.lightbox_open = true;
        self.phase = NavPhase::Idle;
        self.open_entrance_pending = true;
        self.presentation += 1;
        debug!("Lightbox opened at index {}", self.current_index);
    }

    /// Close the lightbox. Idempotent.
    ///
    /// A navigation still in its exit phase is committed so the index matches
    /// what the user asked for; its completions become stale.
    pub fn close(&mut self) {
        if let NavPhase::ExitAnimating(transition) = self.phase {
            self.current_index = transition.to;
        }
        self.phase = NavPhase::Idle;
        self.open_entrance_pending = false;
        if self.lightbox_open {
            debug!("Lightbox closed at index {}", self.current_index);
        }
        self.lightbox_open = false;
    }

    /// Start navigating one item forward or back.
    ///
    /// `media_mounted` tells whether a lightbox media element exists to animate.
    pub fn navigate(&mut self, direction: NavDirection, media_mounted: bool) -> NavStep {
        if self.item_count == 0 {
            return NavStep::Ignored;
        }

        let base = match self.phase {
            NavPhase::ExitAnimating(transition) => transition.to,
            _ => self.current_index,
        };
        let to = direction.step(base, self.item_count);

        if !media_mounted {
            self.phase = NavPhase::Idle;
            self.current_index = to;
            self.presentation += 1;
            return NavStep::Swapped(to);
        }

        let transition = Transition {
            token: self.issue_token(),
            direction,
            from: self.current_index,
            to,
        };
        if self.is_transitioning() {
            debug!("Restarting navigation towards index {}", to);
        }
        self.phase = NavPhase::ExitAnimating(transition);
        self.open_entrance_pending = false;
        NavStep::Exit(transition)
    }

    /// Exit tween finished. Swaps the index unless the token is stale.
    pub fn exit_complete(&mut self, token: TransitionToken) -> bool {
        match self.phase {
            NavPhase::ExitAnimating(transition) if transition.token == token => {
                self.current_index = transition.to;
                self.presentation += 1;
                self.phase = NavPhase::IndexSwapped(transition);
                true
            }
            _ => {
                debug!("Ignoring stale exit completion {:?}", token);
                false
            }
        }
    }

    /// Claim the entrance tween owed to a freshly mounted media element.
    pub fn take_pending_entrance(&mut self) -> Option<Entrance> {
        if self.open_entrance_pending {
            self.open_entrance_pending = false;
            return Some(Entrance::Open);
        }
        match self.phase {
            NavPhase::IndexSwapped(transition) => {
                self.phase = NavPhase::EntranceAnimating(transition);
                Some(Entrance::Navigate(transition))
            }
            _ => None,
        }
    }

    /// Entrance tween finished. Returns the settled index unless the token is stale.
    pub fn entrance_complete(&mut self, token: TransitionToken) -> Option<usize> {
        match self.phase {
            NavPhase::EntranceAnimating(transition) if transition.token == token => {
                self.phase = NavPhase::Idle;
                Some(self.current_index)
            }
            _ => {
                debug!("Ignoring stale entrance completion {:?}", token);
                None
            }
        }
    }

    /// Keyboard command for `key`, or `None` while the lightbox is closed.
    pub fn command_for_key(&self, key: &str) -> Option<LightboxCommand> {
        if !self.lightbox_open {
            return None;
        }
        LightboxCommand::from_key(key)
    }

    fn issue_token(&mut self) -> TransitionToken {
        self.next_token += 1;
        TransitionToken(self.next_token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drive a mounted navigation through both tween phases.
    fn settle(state: &mut GalleryState, direction: NavDirection) -> usize {
        let NavStep::Exit(transition) = state.navigate(direction, true) else {
            panic!("Expected exit tween");
        };
        assert!(state.exit_complete(transition.token));
        assert_eq!(
            state.take_pending_entrance(),
            Some(Entrance::Navigate(transition))
        );
        state.entrance_complete(transition.token).unwrap()
    }

    #[test]
    fn test_step_wraps_both_ways() {
        for i in 0..9 {
            assert_eq!(NavDirection::Next.step(i, 9), (i + 1) % 9);
            assert_eq!(NavDirection::Prev.step(i, 9), (i + 9 - 1) % 9);
        }
        assert_eq!(NavDirection::Next.step(8, 9), 0);
        assert_eq!(NavDirection::Prev.step(0, 9), 8);
        assert_eq!(NavDirection::Prev.step(0, 1), 0);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(NavDirection::Next.exit_offset(100.0), -100.0);
        assert_eq!(NavDirection::Next.entrance_offset(100.0), 100.0);
        assert_eq!(NavDirection::Prev.exit_offset(100.0), 100.0);
        assert_eq!(NavDirection::Prev.entrance_offset(100.0), -100.0);
    }

    #[test]
    fn test_open_and_close() {
        let mut state = GalleryState::new(9);
        state.open(4);
        assert!(state.is_lightbox_open());
        assert_eq!(state.current_index(), 4);

        state.close();
        assert!(!state.is_lightbox_open());
        assert_eq!(state.current_index(), 4);

        state.close();
        assert!(!state.is_lightbox_open());
        assert_eq!(state.current_index(), 4);
    }

    #[test]
    fn test_open_wraps_index() {
        let mut state = GalleryState::new(9);
        state.open(11);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_empty_gallery_ignores_everything() {
        let mut state = GalleryState::new(0);
        state.open(0);
        assert!(!state.is_lightbox_open());
        assert_eq!(state.navigate(NavDirection::Next, true), NavStep::Ignored);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_open_entrance_claimed_once() {
        let mut state = GalleryState::new(3);
        state.open(1);
        assert!(state.has_pending_entrance());
        assert_eq!(state.take_pending_entrance(), Some(Entrance::Open));
        assert_eq!(state.take_pending_entrance(), None);
        assert!(!state.has_pending_entrance());
    }

    #[test]
    fn test_close_clears_pending_entrance() {
        let mut state = GalleryState::new(3);
        state.open(1);
        state.close();
        assert_eq!(state.take_pending_entrance(), None);
    }

    #[test]
    fn test_unmounted_navigation_swaps_immediately() {
        let mut state = GalleryState::new(9);
        let before = state.presentation();
        assert_eq!(state.navigate(NavDirection::Prev, false), NavStep::Swapped(8));
        assert_eq!(state.current_index(), 8);
        assert_eq!(state.phase(), NavPhase::Idle);
        assert!(state.presentation() > before);
    }

    #[test]
    fn test_index_swaps_only_after_exit_completes() {
        let mut state = GalleryState::new(9);
        state.open(0);
        state.take_pending_entrance();

        let NavStep::Exit(transition) = state.navigate(NavDirection::Next, true) else {
            panic!("Expected exit tween");
        };
        assert_eq!(transition.from, 0);
        assert_eq!(transition.to, 1);
        assert_eq!(state.current_index(), 0);
        assert!(!state.has_pending_entrance());

        let presentation = state.presentation();
        assert!(state.exit_complete(transition.token));
        assert_eq!(state.current_index(), 1);
        assert_eq!(state.phase(), NavPhase::IndexSwapped(transition));
        assert!(state.has_pending_entrance());
        assert_ne!(state.presentation(), presentation);
    }

    #[test]
    fn test_full_navigation_returns_to_idle() {
        let mut state = GalleryState::new(9);
        state.open(8);
        state.take_pending_entrance();
        assert_eq!(settle(&mut state, NavDirection::Next), 0);
        assert_eq!(state.phase(), NavPhase::Idle);
        assert_eq!(settle(&mut state, NavDirection::Prev), 8);
    }

    #[test]
    fn test_restart_targets_beyond_previous_target() {
        let mut state = GalleryState::new(9);
        state.open(0);
        state.take_pending_entrance();

        let NavStep::Exit(first) = state.navigate(NavDirection::Next, true) else {
            panic!("Expected exit tween");
        };
        let NavStep::Exit(second) = state.navigate(NavDirection::Next, true) else {
            panic!("Expected exit tween");
        };
        assert_eq!(second.to, 2);
        assert_ne!(first.token, second.token);

        assert!(!state.exit_complete(first.token));
        assert_eq!(state.current_index(), 0);
        assert!(state.exit_complete(second.token));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn test_navigation_during_entrance_starts_from_current() {
        let mut state = GalleryState::new(9);
        state.open(3);
        state.take_pending_entrance();

        let NavStep::Exit(first) = state.navigate(NavDirection::Prev, true) else {
            panic!("Expected exit tween");
        };
        state.exit_complete(first.token);
        state.take_pending_entrance();

        let NavStep::Exit(second) = state.navigate(NavDirection::Prev, true) else {
            panic!("Expected exit tween");
        };
        assert_eq!(second.from, 2);
        assert_eq!(second.to, 1);
        assert_eq!(state.entrance_complete(first.token), None);
    }

    #[test]
    fn test_close_commits_inflight_target() {
        let mut state = GalleryState::new(9);
        state.open(5);
        state.take_pending_entrance();
        let NavStep::Exit(transition) = state.navigate(NavDirection::Next, true) else {
            panic!("Expected exit tween");
        };

        state.close();
        assert_eq!(state.current_index(), 6);
        assert_eq!(state.phase(), NavPhase::Idle);
        assert!(!state.exit_complete(transition.token));
        assert_eq!(state.current_index(), 6);
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let mut state = GalleryState::new(9);
        assert_eq!(state.command_for_key("ArrowRight"), None);
        assert_eq!(state.command_for_key("Escape"), None);

        state.open(0);
        assert_eq!(state.command_for_key("Escape"), Some(LightboxCommand::Close));
        assert_eq!(state.command_for_key("ArrowLeft"), Some(LightboxCommand::Prev));
        assert_eq!(state.command_for_key("ArrowRight"), Some(LightboxCommand::Next));
        assert_eq!(state.command_for_key("Enter"), None);
    }

    #[test]
    fn test_reveal_runs_once() {
        let mut state = GalleryState::new(9);
        assert!(!state.begin_reveal(false));
        assert!(!state.reveal_started());

        assert!(state.begin_reveal(true));
        assert!(state.reveal_started());
        assert!(!state.is_revealed());
        // Effect re-running before the deferred flip must not restart it
        assert!(!state.begin_reveal(true));

        state.finish_reveal();
        assert!(state.is_revealed());
        assert!(!state.begin_reveal(false));
        assert!(!state.begin_reveal(true));
    }

    #[test]
    fn test_finish_reveal_requires_start() {
        let mut state = GalleryState::new(9);
        state.finish_reveal();
        assert!(!state.is_revealed());
    }
}
