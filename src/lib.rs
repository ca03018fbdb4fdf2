//! # chat-widget
//!
//! Leptos + WASM embeddable chat widget for the MIDC land bank assistant.
//!
//! The crate is the client half only: it toggles the widget, posts user
//! questions to the chat endpoint, renders bilingual replies with light
//! formatting, shows supporting source documents in a modal, and probes
//! backend health once at startup.
//!
//! Everything outside `components` and `app` is plain Rust and is tested
//! natively; build with `--features csr` for the browser.

pub mod app;
pub mod bindings;
pub mod components;
pub mod config;
pub mod net;
pub mod services;
pub mod state;
pub mod util;

/// WASM entry point: mount into `#chat-widget` if the host page has one,
/// otherwise append to `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let config = config::read_host_config();
    let mount_point = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(config::MOUNT_ELEMENT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match mount_point {
        Some(el) => leptos::mount::mount_to(el, move || view! { <App config=config/> }).forget(),
        None => leptos::mount::mount_to_body(move || view! { <App config=config/> }),
    }
    leptos::logging::log!("chat widget initialized");
}
