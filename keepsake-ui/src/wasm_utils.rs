//! WASM utilities for browser interop
//!
//! Listeners attached through a wasm-bindgen `Closure` must keep the closure
//! alive for as long as they stay attached. `EventListener` owns both and
//! detaches in `Drop`, so the listener lives exactly as long as the value:
//!
//! ```ignore
//! let listener = EventListener::on_window("keydown", callback)?;
//! // Removed again here
//! drop(listener);
//! ```
//!
//! With Dioxus, keep it in a `Signal<Option<EventListener>>` and set `None`
//! (or let the component unmount) to detach.

use wasm_bindgen_x::prelude::*;

/// An event listener that removes itself when dropped.
pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl EventListener {
    /// Attach `callback` to `target` for `event_name`.
    pub fn new(
        target: web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .ok();

        Self {
            target,
            event_name,
            callback,
        }
    }

    /// Attach to the global window. `None` outside a browser context.
    pub fn on_window(
        event_name: &'static str,
        callback: impl FnMut(JsValue) + 'static,
    ) -> Option<Self> {
        let window = web_sys_x::window()?;
        Some(Self::new(window.into(), event_name, callback))
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// `KeyboardEvent.key` of a raw event value.
pub fn event_key(event: &JsValue) -> Option<String> {
    js_sys_x::Reflect::get(event, &"key".into())
        .ok()
        .and_then(|key| key.as_string())
}

/// Sleep without blocking the UI thread.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    gloo_timers::future::TimeoutFuture::new(ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}
