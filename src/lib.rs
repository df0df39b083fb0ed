//! Jellyfin Recently-Added Widget
//!
//! Injects a poster grid of recently added Jellyfin items into a dashboard
//! card. Loaded as a wasm module by the dashboard's custom script; the card
//! may be re-rendered by the dashboard at any time, so the widget re-checks it
//! on every page mutation.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod grid;
pub mod injector;
pub mod models;

use wasm_bindgen::prelude::*;

pub use config::WidgetConfig;
pub use error::{WidgetError, WidgetResult};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = app::boot() {
        log::error!("{}", e);
    }
}

/// Recent widget log lines, for `jellyfinWidgetLog()` in the devtools console
#[wasm_bindgen(js_name = jellyfinWidgetLog)]
pub fn widget_log() -> Vec<String> {
    app::recent_log()
}
