//! Widget Configuration
//!
//! Defaults baked in at build time, optionally overridden by a
//! `window.jellyfinWidgetConfig` object defined by the host page.

use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{WidgetError, WidgetResult};

/// Page global the host may define before loading the widget
pub const CONFIG_GLOBAL: &str = "jellyfinWidgetConfig";

/// Proxy endpoint, overridable with `JELLYFIN_PROXY_URL` at build time
pub const DEFAULT_PROXY_URL: &str = match option_env!("JELLYFIN_PROXY_URL") {
    Some(url) => url,
    None => "http://localhost:5000/recent",
};

pub const DEFAULT_CARD_ID: &str = "jellyfin-recently-added";
pub const DEFAULT_INNER_SELECTOR: &str = ".flex.flex-col";
pub const DEFAULT_PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/200x300?text=No+Poster";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// GET endpoint returning the recently added items
    pub proxy_url: String,
    /// Id of the dashboard card that hosts the grid
    pub card_id: String,
    /// Inner layout container inside the card; falls back to the card itself
    pub inner_selector: String,
    /// Image shown when a poster fails to load
    pub placeholder_poster: String,
    pub log_level: LevelFilter,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            proxy_url: DEFAULT_PROXY_URL.to_string(),
            card_id: DEFAULT_CARD_ID.to_string(),
            inner_selector: DEFAULT_INNER_SELECTOR.to_string(),
            placeholder_poster: DEFAULT_PLACEHOLDER_POSTER.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl WidgetConfig {
    /// Decode the page-provided override. `undefined`/`null` means defaults.
    ///
    /// Returns the config plus the decode error, if any, so the caller can
    /// report it once logging is up.
    pub fn from_js(value: JsValue) -> (Self, Option<WidgetError>) {
        if value.is_undefined() || value.is_null() {
            return (Self::default(), None);
        }
        match serde_wasm_bindgen::from_value::<WidgetConfig>(value) {
            Ok(config) => (config, None),
            Err(e) => (
                Self::default(),
                Some(WidgetError::Config(format!("{} could not be read: {}", CONFIG_GLOBAL, e))),
            ),
        }
    }

    /// Read `window.jellyfinWidgetConfig`
    pub fn from_page() -> (Self, Option<WidgetError>) {
        let global = match web_sys::window() {
            Some(win) => js_sys::Reflect::get(&win, &JsValue::from_str(CONFIG_GLOBAL)).unwrap_or(JsValue::UNDEFINED),
            None => JsValue::UNDEFINED,
        };
        Self::from_js(global)
    }

    pub fn validate(&self) -> WidgetResult<()> {
        let required = [
            ("proxyUrl", &self.proxy_url),
            ("cardId", &self.card_id),
            ("innerSelector", &self.inner_selector),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(WidgetError::Config(format!("{} must not be empty", key)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config: WidgetConfig = serde_json::from_value(json!({
            "proxyUrl": "https://10.0.0.5:5000/recent"
        }))
        .unwrap();

        assert_eq!(
            config,
            WidgetConfig {
                proxy_url: "https://10.0.0.5:5000/recent".to_string(),
                ..WidgetConfig::default()
            }
        );
    }

    #[test]
    fn test_log_level_key() {
        let config: WidgetConfig = serde_json::from_value(json!({ "logLevel": "debug" })).unwrap();
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(WidgetConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_card_id_rejected() {
        let config = WidgetConfig {
            card_id: "  ".to_string(),
            ..WidgetConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(WidgetError::Config("cardId must not be empty".to_string()))
        );
    }
}
