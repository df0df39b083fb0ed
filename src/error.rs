//! Widget Errors
//!
//! Every failure ends the current render attempt. None of them are fatal to
//! the page.

use wasm_bindgen::{JsCast, JsValue};

/// Common result type for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetError {
    /// The proxy answered, but with an error object or a non-array payload
    Api(Option<String>),
    /// Fetch rejected, body unreadable, or body not JSON
    Transport(String),
    /// Configuration rejected by `WidgetConfig::validate`
    Config(String),
    /// Window/document missing or the grid could not be mounted
    Dom(String),
}

impl WidgetError {
    pub fn transport_from_js(err: JsValue) -> Self {
        WidgetError::Transport(describe_js(&err))
    }

    pub fn dom_from_js(err: JsValue) -> Self {
        WidgetError::Dom(describe_js(&err))
    }
}

impl std::fmt::Display for WidgetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidgetError::Api(Some(msg)) => write!(f, "API error: {}", msg),
            WidgetError::Api(None) => write!(f, "API error: response is not a list of items"),
            WidgetError::Transport(msg) => write!(f, "Fetch failed: {}", msg),
            WidgetError::Config(msg) => write!(f, "Invalid configuration: {}", msg),
            WidgetError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for WidgetError {}

/// Readable text for a thrown JS value
fn describe_js(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            WidgetError::Api(Some("JELLYFIN_API_KEY missing".into())).to_string(),
            "API error: JELLYFIN_API_KEY missing"
        );
        assert_eq!(
            WidgetError::Api(None).to_string(),
            "API error: response is not a list of items"
        );
    }

    #[test]
    fn test_transport_error_display() {
        let err = WidgetError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "Fetch failed: connection refused");
    }
}
