//! Animation parameters for the gallery
//!
//! `MotionConfig::default()` is the full choreography. `MotionConfig::reduced()`
//! keeps every step (so completion callbacks still fire in order) but makes
//! them instantaneous.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::gallery_state::NavDirection;
use crate::tween::{Easing, Tween, Visual};

/// Overshoot used by the reveal and lightbox entrance ("back.out(1.4)").
const OVERSHOOT: f64 = 1.4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Thumbnail state before the reveal
    pub reveal_from: Visual,
    pub reveal_to: Visual,
    pub reveal: Tween,
    /// How long the `revealed` flag flip is deferred after the reveal starts
    pub reveal_flag_delay: Duration,
    pub lightbox_from: Visual,
    pub lightbox_to: Visual,
    pub lightbox: Tween,
    /// Horizontal slide distance in pixels for navigation transitions
    pub nav_offset: f64,
    pub nav_exit: Tween,
    pub nav_entrance: Tween,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reveal_from: Visual::new().opacity(0.0).y(50.0).scale(0.8),
            reveal_to: Visual::new().opacity(1.0).y(0.0).scale(1.0),
            reveal: Tween::new(Duration::from_millis(600))
                .delay(Duration::from_millis(200))
                .stagger(Duration::from_millis(120))
                .easing(Easing::BackOut(OVERSHOOT)),
            reveal_flag_delay: Duration::from_millis(10),
            lightbox_from: Visual::new().scale(0.8).opacity(0.0),
            lightbox_to: Visual::new().scale(1.0).opacity(1.0),
            lightbox: Tween::new(Duration::from_millis(400)).easing(Easing::BackOut(OVERSHOOT)),
            nav_offset: 100.0,
            nav_exit: Tween::new(Duration::from_millis(200)).easing(Easing::PowerIn(2)),
            nav_entrance: Tween::new(Duration::from_millis(300)).easing(Easing::PowerOut(2)),
        }
    }
}

impl MotionConfig {
    /// Variant for users who asked the platform for reduced motion.
    pub fn reduced() -> Self {
        let full = Self::default();
        Self {
            reveal: full.reveal.instant(),
            lightbox: full.lightbox.instant(),
            nav_exit: full.nav_exit.instant(),
            nav_entrance: full.nav_entrance.instant(),
            nav_offset: 0.0,
            ..full
        }
    }

    /// Where the outgoing media slides to.
    pub fn nav_exit_target(&self, direction: NavDirection) -> Visual {
        Visual::new()
            .x(direction.exit_offset(self.nav_offset))
            .opacity(0.0)
    }

    /// Where the incoming media slides in from.
    pub fn nav_entrance_from(&self, direction: NavDirection) -> Visual {
        Visual::new()
            .x(direction.entrance_offset(self.nav_offset))
            .opacity(0.0)
    }

    pub fn nav_entrance_to(&self) -> Visual {
        Visual::new().x(0.0).opacity(1.0)
    }
}
