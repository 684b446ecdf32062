//! PrepSeries storefront.
//!
//! A client-side rendered single-page application. The view/session/cart
//! state machine lives in the `prep-*` crates; this crate is the composition
//! root plus the presentational sections and pages that consume its
//! navigation and cart contracts.

pub mod app;
mod browser;
mod format;
mod pages;
mod sections;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
