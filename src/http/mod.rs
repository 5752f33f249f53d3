use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::model::track::Track;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server answered {0}")]
    Status(StatusCode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoriteStatus {
    Added,
    Removed,
    Other(String),
}

impl From<String> for FavoriteStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "added" => Self::Added,
            "removed" => Self::Removed,
            _ => Self::Other(status),
        }
    }
}

#[derive(Serialize)]
struct ToggleFavoriteBody<'a> {
    song_id: &'a str,
}

#[derive(Deserialize)]
struct ToggleFavoriteResponse {
    #[serde(default)]
    status: String,
}

#[derive(Serialize)]
struct PlaylistForm<'a> {
    song_id: &'a str,
    name: &'a str,
    artist: &'a str,
    album: &'a str,
    youtube_url: &'a str,
    image_url: &'a str,
}

impl<'a> From<&'a Track> for PlaylistForm<'a> {
    fn from(track: &'a Track) -> Self {
        Self {
            song_id: &track.id,
            name: &track.name,
            artist: &track.artist,
            album: &track.album,
            youtube_url: track.media_url.as_deref().unwrap_or_default(),
            image_url: track.image_url.as_deref().unwrap_or_default(),
        }
    }
}

#[async_trait]
pub trait FavoritesApi: Send + Sync {
    async fn toggle_favorite(&self, song_id: &str) -> Result<FavoriteStatus, ApiError>;
    async fn remove_favorite(&self, song_id: &str) -> Result<(), ApiError>;
    async fn submit_playlist_form(&self, action: &str, track: Option<&Track>)
    -> Result<(), ApiError>;
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl FavoritesApi for HttpBackend {
    async fn toggle_favorite(&self, song_id: &str) -> Result<FavoriteStatus, ApiError> {
        let response = self
            .client
            .post(self.url("/toggle_favorite"))
            .json(&ToggleFavoriteBody { song_id })
            .send()
            .await?;

        let body: ToggleFavoriteResponse = response.json().await?;
        debug!("Favorite toggle for {song_id}: {}", body.status);
        Ok(FavoriteStatus::from(body.status))
    }

    async fn remove_favorite(&self, song_id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.url(&format!("/remove_favorite/{song_id}")))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ApiError::Status(response.status()))
        }
    }

    async fn submit_playlist_form(
        &self,
        action: &str,
        track: Option<&Track>,
    ) -> Result<(), ApiError> {
        let fallback = Track::default();
        let form = PlaylistForm::from(track.unwrap_or(&fallback));

        let response = self.client.post(self.url(action)).form(&form).send().await?;

        if response.status().is_success() || response.status().is_redirection() {
            Ok(())
        } else {
            Err(ApiError::Status(response.status()))
        }
    }
}
