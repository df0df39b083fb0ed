//! Recently-Added Proxy Client
//!
//! Fetches the item list from the proxy and classifies the payload.

use async_trait::async_trait;
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::{WidgetError, WidgetResult};
use crate::models::MediaItem;

/// Source of recently added items
#[async_trait(?Send)]
pub trait RecentSource {
    async fn fetch_recent(&self) -> WidgetResult<Vec<MediaItem>>;
}

/// Classify a proxy response body.
///
/// - not JSON → `Transport`
/// - object with `error`, or anything that isn't an array → `Api`
/// - array → items in received order
pub fn parse_recent(body: &str) -> WidgetResult<Vec<MediaItem>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| WidgetError::Transport(format!("invalid JSON: {}", e)))?;

    match value {
        Value::Array(entries) => entries
            .into_iter()
            .map(|entry| {
                serde_json::from_value::<MediaItem>(entry)
                    .map_err(|e| WidgetError::Api(Some(format!("malformed item: {}", e))))
            })
            .collect(),
        Value::Object(map) => Err(WidgetError::Api(map.get("error").map(error_text))),
        _ => Err(WidgetError::Api(None)),
    }
}

fn error_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ========================
// Browser fetch
// ========================

/// `window.fetch` against the proxy endpoint
#[derive(Debug, Clone)]
pub struct HttpRecentSource {
    url: String,
}

impl HttpRecentSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl RecentSource for HttpRecentSource {
    async fn fetch_recent(&self) -> WidgetResult<Vec<MediaItem>> {
        let window = web_sys::window().ok_or_else(|| WidgetError::Dom("no window".to_string()))?;

        let response: web_sys::Response = JsFuture::from(window.fetch_with_str(&self.url))
            .await
            .map_err(WidgetError::transport_from_js)?
            .dyn_into()
            .map_err(WidgetError::transport_from_js)?;
        // The proxy reports its own failures as `{"error": ...}` with a 500,
        // so the body is classified regardless of status
        log::debug!("GET {} -> {}", self.url, response.status());

        let text = JsFuture::from(response.text().map_err(WidgetError::transport_from_js)?)
            .await
            .map_err(WidgetError::transport_from_js)?;
        let body = text
            .as_string()
            .ok_or_else(|| WidgetError::Transport("response body is not text".to_string()))?;

        parse_recent(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let items = parse_recent(
            r#"[
                {"id": "1", "title": "Severance", "type": "TV", "year": 2022, "poster": "p1", "link": "l1"},
                {"id": "2", "title": "Dune", "type": "Movie", "year": 2021, "poster": "p2", "link": "l2"}
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Severance");
        assert_eq!(items[1].link, "l2");
    }

    #[test]
    fn test_parse_empty_array() {
        assert_eq!(parse_recent("[]").unwrap(), Vec::new());
    }

    #[test]
    fn test_error_object() {
        assert_eq!(
            parse_recent(r#"{"error": "x"}"#),
            Err(WidgetError::Api(Some("x".to_string())))
        );
    }

    #[test]
    fn test_object_without_error_is_api_error() {
        assert_eq!(parse_recent(r#"{"items": []}"#), Err(WidgetError::Api(None)));
        assert_eq!(parse_recent("42"), Err(WidgetError::Api(None)));
    }

    #[test]
    fn test_non_object_entry_is_api_error() {
        assert!(matches!(parse_recent(r#"[1, 2]"#), Err(WidgetError::Api(Some(_)))));
    }

    #[test]
    fn test_invalid_json_is_transport_error() {
        assert!(matches!(parse_recent("<html>502</html>"), Err(WidgetError::Transport(_))));
    }
}
