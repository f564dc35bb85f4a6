//! **lifeview-web** — WASM browser client for a Game of Life server.
//!
//! This crate paints server-computed generations into an HTML table: it
//! polls an endpoint for a [`lifeview_core::GameState`], classifies every
//! cell against the previous generation, and rebuilds the table with
//! `cell` / `cell alive` / `cell dead` CSS classes plus a generation
//! counter.
//!
//! # Quick start
//!
//! ```html
//! <table id="game-table"></table>
//! <div id="counter"></div>
//! <script type="module">
//!   import init, { start } from './pkg/lifeview_web.js';
//!   await init();
//!   start();
//! </script>
//! ```
//!
//! Use `start_at` to point the client at a non-default endpoint, or drive
//! `poll::run` directly with a custom [`ViewConfig`].
//!
//! # Limitations
//!
//! * One request in flight at a time: a new poll aborts the previous
//!   request (cancel-and-replace) rather than letting two responses race
//!   for the table.
//! * No retry and no timeout; a failed poll is logged to the console and
//!   the view keeps its previous frame.

pub mod config;
pub mod error;
pub mod render;

#[cfg(target_arch = "wasm32")]
pub mod client;
#[cfg(target_arch = "wasm32")]
pub mod poll;

pub use config::ViewConfig;
pub use error::ViewError;
pub use render::cell_classes;

#[cfg(target_arch = "wasm32")]
pub use client::StateClient;
#[cfg(target_arch = "wasm32")]
pub use render::TableView;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Start the client with [`ViewConfig::default`].
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    launch(ViewConfig::default())
}

/// Start the client against a non-default endpoint.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn start_at(api_url: String) -> Result<(), JsValue> {
    launch(ViewConfig {
        api_url,
        ..ViewConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn launch(config: ViewConfig) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = if config.debug {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    // Ignore the error when a host page calls start() twice.
    let _ = console_log::init_with_level(level);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no `document` to attach to"))?;
    poll::run(&document, config).map_err(|err| JsValue::from_str(&err.to_string()))
}
