//! Tween descriptions handed to the animator
//!
//! These types only describe an animation: start and end values, timing and
//! easing. Interpolating them over time is the animator's job.

use std::fmt::Write;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Number of points used when an easing curve is exported as CSS `linear()`.
const CSS_EASING_SAMPLES: usize = 32;

/// Easing curve shaping a tween's progress
///
/// Power curves follow the usual animation-library naming: `PowerIn(2)` is
/// "power2.in", a polynomial of degree 3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    /// Accelerating
    PowerIn(u8),
    /// Decelerating
    PowerOut(u8),
    /// Overshoots the target by an amount controlled by the parameter, then settles
    BackOut(f64),
}

impl Easing {
    /// Map linear progress in [0, 1] to eased progress.
    ///
    /// `BackOut` may return values slightly above 1.0 mid-curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::PowerIn(power) => t.powi(i32::from(power) + 1),
            Self::PowerOut(power) => 1.0 - (1.0 - t).powi(i32::from(power) + 1),
            Self::BackOut(overshoot) => {
                let u = t - 1.0;
                1.0 + (overshoot + 1.0) * u * u * u + overshoot * u * u
            }
        }
    }

    /// CSS timing function equivalent, usable as a Web Animations `easing`.
    pub fn to_css(self) -> String {
        if self == Self::Linear {
            return "linear".to_string();
        }
        let mut css = String::from("linear(");
        for i in 0..=CSS_EASING_SAMPLES {
            if i > 0 {
                css.push_str(", ");
            }
            let t = i as f64 / CSS_EASING_SAMPLES as f64;
            let _ = write!(css, "{}", round4(self.apply(t)));
        }
        css.push(')');
        css
    }

    /// Nearest classic CSS curve, for browsers without `linear()` support.
    pub fn fallback_css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::PowerIn(2) => "cubic-bezier(0.55, 0.055, 0.675, 0.19)",
            Self::PowerIn(_) => "ease-in",
            Self::PowerOut(2) => "cubic-bezier(0.215, 0.61, 0.355, 1)",
            Self::PowerOut(_) => "ease-out",
            Self::BackOut(_) => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

fn round4(value: f64) -> f64 {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    // Avoid "-0" in generated CSS
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Visual properties a tween can drive. Unset fields are left alone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visual {
    pub opacity: Option<f64>,
    /// Horizontal offset in pixels
    pub x: Option<f64>,
    /// Vertical offset in pixels
    pub y: Option<f64>,
    pub scale: Option<f64>,
}

impl Visual {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// CSS `transform` value, or `None` when no positional property is set.
    pub fn transform_css(&self) -> Option<String> {
        if self.x.is_none() && self.y.is_none() && self.scale.is_none() {
            return None;
        }
        let x = self.x.unwrap_or(0.0);
        let y = self.y.unwrap_or(0.0);
        let scale = self.scale.unwrap_or(1.0);
        Some(format!("translate({x}px, {y}px) scale({scale})"))
    }
}

/// Timing of a tween
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tween {
    pub duration: Duration,
    #[serde(default)]
    pub delay: Duration,
    /// Extra delay added per target when animating a batch
    #[serde(default)]
    pub stagger: Duration,
    #[serde(default)]
    pub easing: Easing,
}

impl Tween {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            stagger: Duration::ZERO,
            easing: Easing::Linear,
        }
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Start delay for the target at `index` within a batch.
    pub fn delay_for(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay.saturating_add(self.stagger.saturating_mul(index))
    }

    /// Time from the batch start until the last of `count` targets finishes.
    pub fn total_for(&self, count: usize) -> Duration {
        if count == 0 {
            return Duration::ZERO;
        }
        self.delay_for(count - 1) + self.duration
    }

    /// Copy with every duration and delay zeroed, keeping the easing.
    pub fn instant(self) -> Self {
        Self {
            duration: Duration::ZERO,
            delay: Duration::ZERO,
            stagger: Duration::ZERO,
            ..self
        }
    }
}
