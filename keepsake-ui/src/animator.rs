//! Animator capability and its Web Animations API implementation
//!
//! Components never talk to `Element.animate` directly. They ask an
//! `Animator` from context, which keeps the tween engine swappable.

use std::ops::Deref;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::spawn;
use keepsake_common::{Tween, Visual};
use tracing::{debug, warn};
use wasm_bindgen_x::{JsCast, JsValue};

use crate::error::AnimationError;

/// Callback fired once when a tween (or the last tween of a batch) finishes
pub type OnComplete = Box<dyn FnOnce()>;

/// Numeric tweening of opacity, position and scale
pub trait Animator {
    /// Animate each target from `from` to `to`. Target `i` starts after
    /// `tween.delay_for(i)`; `on_complete` runs after the last one finishes.
    fn animate_from_to(
        &self,
        targets: &[web_sys_x::Element],
        from: &Visual,
        to: &Visual,
        tween: &Tween,
        on_complete: Option<OnComplete>,
    ) -> Result<TweenHandle, AnimationError>;

    /// Animate one target from its current state to `to`.
    fn animate_to(
        &self,
        target: &web_sys_x::Element,
        to: &Visual,
        tween: &Tween,
        on_complete: Option<OnComplete>,
    ) -> Result<TweenHandle, AnimationError>;
}

/// Shared animator handed out through Dioxus context
#[derive(Clone)]
pub struct AnimatorHandle(Rc<dyn Animator>);

impl AnimatorHandle {
    pub fn new(animator: impl Animator + 'static) -> Self {
        Self(Rc::new(animator))
    }
}

impl Default for AnimatorHandle {
    fn default() -> Self {
        Self::new(WebAnimator)
    }
}

impl Deref for AnimatorHandle {
    type Target = dyn Animator;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Running tweens started by one animator call
#[derive(Default)]
pub struct TweenHandle {
    animations: Vec<JsValue>,
}

impl TweenHandle {
    /// Stop the tweens, keeping whatever values they reached. Completion
    /// callbacks of cancelled tweens never run.
    pub fn cancel(self) {
        for animation in &self.animations {
            // commitStyles throws for detached elements; the cancel still matters
            let _ = call_method(animation, "commitStyles");
            let _ = call_method(animation, "cancel");
        }
    }
}

/// `Animator` backed by `Element.animate`
pub struct WebAnimator;

impl Animator for WebAnimator {
    fn animate_from_to(
        &self,
        targets: &[web_sys_x::Element],
        from: &Visual,
        to: &Visual,
        tween: &Tween,
        on_complete: Option<OnComplete>,
    ) -> Result<TweenHandle, AnimationError> {
        if targets.is_empty() {
            if let Some(on_complete) = on_complete {
                on_complete();
            }
            return Ok(TweenHandle::default());
        }

        let keyframes = js_sys_x::Array::new();
        keyframes.push(&keyframe(from)?.into());
        keyframes.push(&keyframe(to)?.into());

        let mut animations = Vec::with_capacity(targets.len());
        for (i, target) in targets.iter().enumerate() {
            animations.push(start(target, &keyframes, tween, tween.delay_for(i))?);
        }

        // Equal durations, increasing delays: the last target finishes last
        if let (Some(on_complete), Some(last)) = (on_complete, animations.last()) {
            when_finished(last, on_complete)?;
        }

        debug!(
            "Started {} tweens over {:?}",
            animations.len(),
            tween.total_for(targets.len())
        );
        Ok(TweenHandle { animations })
    }

    fn animate_to(
        &self,
        target: &web_sys_x::Element,
        to: &Visual,
        tween: &Tween,
        on_complete: Option<OnComplete>,
    ) -> Result<TweenHandle, AnimationError> {
        // A single keyframe animates from the element's current values
        let keyframes = js_sys_x::Array::new();
        keyframes.push(&keyframe(to)?.into());

        let animation = start(target, &keyframes, tween, tween.delay)?;
        if let Some(on_complete) = on_complete {
            when_finished(&animation, on_complete)?;
        }
        Ok(TweenHandle {
            animations: vec![animation],
        })
    }
}

fn keyframe(visual: &Visual) -> Result<js_sys_x::Object, AnimationError> {
    let frame = js_sys_x::Object::new();
    if let Some(opacity) = visual.opacity {
        js_sys_x::Reflect::set(&frame, &"opacity".into(), &JsValue::from_f64(opacity))?;
    }
    if let Some(transform) = visual.transform_css() {
        js_sys_x::Reflect::set(&frame, &"transform".into(), &transform.into())?;
    }
    Ok(frame)
}

fn start(
    target: &web_sys_x::Element,
    keyframes: &js_sys_x::Array,
    tween: &Tween,
    delay: Duration,
) -> Result<JsValue, AnimationError> {
    let animate = js_sys_x::Reflect::get(target, &"animate".into())?;
    let func = animate
        .dyn_ref::<js_sys_x::Function>()
        .ok_or(AnimationError::Unsupported)?;

    let options = timing_options(tween, delay, &tween.easing.to_css())?;
    match func.call2(target, keyframes, &options) {
        Ok(animation) => Ok(animation),
        Err(e) => {
            // Older engines reject `linear()` easings with a TypeError
            warn!(
                "Retrying tween with fallback easing: {}",
                crate::error::describe_js(&e)
            );
            let options = timing_options(tween, delay, tween.easing.fallback_css())?;
            Ok(func.call2(target, keyframes, &options)?)
        }
    }
}

fn timing_options(
    tween: &Tween,
    delay: Duration,
    easing: &str,
) -> Result<js_sys_x::Object, AnimationError> {
    let options = js_sys_x::Object::new();
    js_sys_x::Reflect::set(
        &options,
        &"duration".into(),
        &JsValue::from_f64(tween.duration.as_secs_f64() * 1000.0),
    )?;
    js_sys_x::Reflect::set(
        &options,
        &"delay".into(),
        &JsValue::from_f64(delay.as_secs_f64() * 1000.0),
    )?;
    js_sys_x::Reflect::set(&options, &"easing".into(), &easing.into())?;
    // Hold the start values during the delay and the end values afterwards
    js_sys_x::Reflect::set(&options, &"fill".into(), &"both".into())?;
    Ok(options)
}

/// Run `on_complete` when the animation's `finished` promise resolves.
/// The promise rejects on cancel, which drops the callback.
fn when_finished(animation: &JsValue, on_complete: OnComplete) -> Result<(), AnimationError> {
    let finished = js_sys_x::Reflect::get(animation, &"finished".into())?
        .dyn_into::<js_sys_x::Promise>()?;
    spawn(async move {
        if wasm_bindgen_futures_x::JsFuture::from(finished).await.is_ok() {
            on_complete();
        }
    });
    Ok(())
}

fn call_method(target: &JsValue, name: &str) -> Result<JsValue, JsValue> {
    let method = js_sys_x::Reflect::get(target, &name.into())?;
    let func = method
        .dyn_ref::<js_sys_x::Function>()
        .ok_or_else(|| JsValue::from_str("not a function"))?;
    func.call0(target)
}
