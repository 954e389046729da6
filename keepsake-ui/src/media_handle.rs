//! Handle to the media element mounted inside the lightbox
//!
//! Only the calls the gallery needs are exposed. Images have no playback
//! state, so `pause_if_playing` and `play` do nothing for them.

use wasm_bindgen_x::JsCast;

use crate::error::{describe_js, MediaError};

#[derive(Clone, PartialEq)]
pub struct MediaHandle {
    element: web_sys_x::Element,
}

impl MediaHandle {
    pub fn new(element: web_sys_x::Element) -> Self {
        Self { element }
    }

    /// Element to hand to the animator
    pub fn element(&self) -> &web_sys_x::Element {
        &self.element
    }

    fn media(&self) -> Option<&web_sys_x::HtmlMediaElement> {
        self.element.dyn_ref::<web_sys_x::HtmlMediaElement>()
    }

    pub fn pause_if_playing(&self) -> Result<(), MediaError> {
        match self.media() {
            Some(media) if !media.paused() => Ok(media.pause()?),
            _ => Ok(()),
        }
    }

    /// Start playback. Rejections from the browser (autoplay policy) come back
    /// as `MediaError::PlaybackRejected`.
    pub async fn play(&self) -> Result<(), MediaError> {
        let Some(media) = self.media() else {
            return Ok(());
        };
        let promise = media.play()?;
        wasm_bindgen_futures_x::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| MediaError::PlaybackRejected(describe_js(&e)))
    }
}
