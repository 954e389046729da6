use thiserror::Error;

use wasm_bindgen_x::JsValue;

/// Failures talking to a media element
#[derive(Debug, Error)]
pub enum MediaError {
    /// The browser refused to start playback, usually autoplay policy
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
    #[error("media element call failed: {0}")]
    Js(String),
}

/// Failures starting a tween through the Web Animations API
#[derive(Debug, Error)]
pub enum AnimationError {
    #[error("element.animate is not available")]
    Unsupported,
    #[error("animation call failed: {0}")]
    Js(String),
}

/// Readable text for a thrown JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys_x::Reflect::get(value, &"message".into())
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}

impl From<JsValue> for AnimationError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

impl From<JsValue> for MediaError {
    fn from(value: JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}
