//! Browser glue: URL fragment, scroll, hashchange subscription.
//!
//! The route state machine is pure; this module is the only place that
//! touches `window`. Native builds get no-op stubs so the component tree
//! still compiles for unit tests.

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::JsCast;

    /// Current URL fragment, including the leading `#` when present.
    pub fn read_hash() -> String {
        web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default()
    }

    /// Write a navigation token into the URL fragment.
    pub fn write_hash(token: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(token);
        }
    }

    /// Reset the scroll position to the top of the page.
    pub fn scroll_to_top() {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    /// Invoke `handler` on every external fragment change.
    ///
    /// The listener lives for the page's lifetime; the closure is leaked on
    /// purpose.
    pub fn subscribe_hash_change(handler: impl Fn() + 'static) {
        let closure = Closure::<dyn Fn()>::new(handler);
        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub fn read_hash() -> String {
        String::new()
    }

    pub fn write_hash(_token: &str) {}

    pub fn scroll_to_top() {}

    pub fn subscribe_hash_change(handler: impl Fn() + 'static) {
        let _ = handler;
    }
}

pub use imp::{read_hash, scroll_to_top, subscribe_hash_change, write_hash};
