use std::path::Path;

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use super::track::Track;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Could not read page data: {0}")]
    Io(#[from] std::io::Error),

    #[error("Page data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Page data must be an array of tracks or an object")]
    Shape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistOption {
    #[serde(deserialize_with = "crate::model::track::id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Data a page hands the player when it loads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageSeed {
    /// Search results to queue up. `None` when the page had none or the value
    /// was not a sequence of tracks.
    pub queue: Option<Vec<Track>>,
    pub favorites: Vec<Track>,
    pub playlists: Vec<PlaylistOption>,
}

impl PageSeed {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        match serde_json::from_str::<Value>(raw)? {
            value @ Value::Array(_) => Ok(Self {
                queue: lenient("queue", value),
                ..Default::default()
            }),
            Value::Object(mut fields) => Ok(Self {
                queue: fields.remove("queue").and_then(|v| lenient("queue", v)),
                favorites: fields
                    .remove("favorites")
                    .and_then(|v| lenient("favorites", v))
                    .unwrap_or_default(),
                playlists: fields
                    .remove("playlists")
                    .and_then(|v| lenient("playlists", v))
                    .unwrap_or_default(),
            }),
            _ => Err(SeedError::Shape),
        }
    }
}

fn lenient<T: DeserializeOwned>(field: &str, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring page field '{field}': {e}");
            None
        }
    }
}
