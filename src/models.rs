//! Media Models
//!
//! Items as served by the recently-added proxy.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One entry of the proxy's `/recent` list
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MediaItem {
    #[serde(deserialize_with = "lenient_text")]
    pub title: String,
    /// Production year; the proxy sends a number, or "" when unknown
    #[serde(deserialize_with = "lenient_text")]
    pub year: String,
    #[serde(deserialize_with = "lenient_text")]
    pub link: String,
    #[serde(deserialize_with = "lenient_text")]
    pub poster: String,
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub media_type: String,
}

/// Badge category of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Tv,
    Movie,
}

impl MediaKind {
    /// Exactly "TV" is a show; anything else, including empty, is a movie
    pub fn from_type(media_type: &str) -> Self {
        if media_type == "TV" {
            MediaKind::Tv
        } else {
            MediaKind::Movie
        }
    }

    pub fn badge(&self) -> &'static str {
        match self {
            MediaKind::Tv => "TV",
            MediaKind::Movie => "Movie",
        }
    }
}

impl MediaItem {
    pub fn kind(&self) -> MediaKind {
        MediaKind::from_type(&self.media_type)
    }

    /// Tooltip text, e.g. "Dune (2021)"
    pub fn caption(&self) -> String {
        format!("{} ({})", self.title, self.year)
    }
}

/// Accept strings, numbers, booleans and null for a text field
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    })
}
