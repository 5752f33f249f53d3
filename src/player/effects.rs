use crate::{audio::commands::MediaCommand, model::track::Track};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Ui(UiUpdate),
    Media(MediaCommand),
    Request(Request),
    Alert(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    ToggleFavorite { song_id: String },
    RemoveFavorite { song_id: String },
    SubmitPlaylistForm { action: String, track: Option<Track> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum UiUpdate {
    Text(TextField, String),
    Image(ImageSlot, String),
    Range(RangeInput, f64),
    PlayIcon(PlayIcon),
    Active(ToggleButton, bool),
    FavoriteIcon(FavoriteIcon),
    FavoriteSong(String),
    RemoveCard(String),
    FormAction(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Title,
    Artist,
    Album,
    Lyrics,
    BottomTitle,
    BottomArtist,
    CurrentTime,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    Cover,
    BottomCover,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeInput {
    Progress,
    Top,
    Volume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayIcon {
    #[default]
    Play,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleButton {
    Shuffle,
    Repeat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteIcon {
    #[default]
    Outline,
    Filled,
}

impl Effect {
    pub fn text(field: TextField, value: impl Into<String>) -> Self {
        Self::Ui(UiUpdate::Text(field, value.into()))
    }

    pub fn range(input: RangeInput, value: f64) -> Self {
        Self::Ui(UiUpdate::Range(input, value))
    }
}
