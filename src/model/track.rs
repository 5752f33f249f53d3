use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Track {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub album: String,
    #[serde(default)]
    pub lyrics: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, alias = "youtube_url")]
    pub media_url: Option<String>,
}

impl Track {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_media_url(mut self, url: impl Into<String>) -> Self {
        self.media_url = Some(url.into());
        self
    }

    pub fn source(&self) -> Option<&str> {
        self.media_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

pub(crate) fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_server_shape() {
        let track: Track = serde_json::from_str(
            r#"{
                "id": 42,
                "name": "Kesariya",
                "artist": "Arijit Singh",
                "album": null,
                "youtube_url": "https://cdn.example/42.mp3"
            }"#,
        )
        .unwrap();

        assert_eq!(track.id, "42");
        assert_eq!(track.name, "Kesariya");
        assert_eq!(track.album, "");
        assert_eq!(track.lyrics, None);
        assert_eq!(track.source(), Some("https://cdn.example/42.mp3"));
    }

    #[test]
    fn blank_media_url_is_not_a_source() {
        let track = Track::new("1", "Silence").with_media_url("  ");
        assert_eq!(track.source(), None);
    }

    #[test]
    fn missing_id_is_rejected() {
        assert!(serde_json::from_str::<Track>(r#"{"name": "no id"}"#).is_err());
    }
}
