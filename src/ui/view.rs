use std::collections::{HashMap, VecDeque};

use crate::{
    model::{seed::PlaylistOption, track::Track},
    player::effects::{
        FavoriteIcon, ImageSlot, PlayIcon, RangeInput, TextField, ToggleButton, UiUpdate,
    },
};

#[derive(Debug, Clone)]
pub struct PlayerView {
    texts: HashMap<TextField, String>,
    images: HashMap<ImageSlot, String>,
    ranges: HashMap<RangeInput, f64>,
    pub play_icon: PlayIcon,
    pub shuffle_active: bool,
    pub repeat_active: bool,
    pub favorite_icon: FavoriteIcon,
    pub favorite_song: Option<String>,
    pub cards: Vec<Track>,
    pub selected_card: usize,
    pub playlists: Vec<PlaylistOption>,
    pub selected_playlist: Option<usize>,
    pub form_action: Option<String>,
    pub alerts: VecDeque<String>,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            texts: HashMap::new(),
            images: HashMap::new(),
            ranges: HashMap::from([(RangeInput::Volume, 100.0)]),
            play_icon: PlayIcon::Play,
            shuffle_active: false,
            repeat_active: false,
            favorite_icon: FavoriteIcon::Outline,
            favorite_song: None,
            cards: Vec::new(),
            selected_card: 0,
            playlists: Vec::new(),
            selected_playlist: None,
            form_action: None,
            alerts: VecDeque::new(),
        }
    }
}

impl PlayerView {
    pub fn new(cards: Vec<Track>, playlists: Vec<PlaylistOption>) -> Self {
        Self {
            cards,
            playlists,
            ..Default::default()
        }
    }

    pub fn apply(&mut self, update: UiUpdate) {
        match update {
            UiUpdate::Text(field, value) => {
                self.texts.insert(field, value);
            }
            UiUpdate::Image(slot, src) => {
                self.images.insert(slot, src);
            }
            UiUpdate::Range(input, value) => {
                self.ranges.insert(input, value);
            }
            UiUpdate::PlayIcon(icon) => self.play_icon = icon,
            UiUpdate::Active(button, active) => match button {
                ToggleButton::Shuffle => self.shuffle_active = active,
                ToggleButton::Repeat => self.repeat_active = active,
            },
            UiUpdate::FavoriteIcon(icon) => self.favorite_icon = icon,
            UiUpdate::FavoriteSong(id) => self.favorite_song = Some(id),
            UiUpdate::RemoveCard(id) => {
                if let Some(position) = self.cards.iter().position(|card| card.id == id) {
                    self.cards.remove(position);
                    if self.selected_card >= self.cards.len() {
                        self.selected_card = self.cards.len().saturating_sub(1);
                    }
                }
            }
            UiUpdate::FormAction(action) => self.form_action = Some(action),
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        self.texts.get(&field).map(String::as_str).unwrap_or_default()
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&str> {
        self.images.get(&slot).map(String::as_str)
    }

    pub fn range(&self, input: RangeInput) -> f64 {
        self.ranges.get(&input).copied().unwrap_or_default()
    }

    pub fn push_alert(&mut self, message: String) {
        self.alerts.push_back(message);
    }

    pub fn current_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }

    pub fn selected_card_id(&self) -> Option<&str> {
        self.cards.get(self.selected_card).map(|card| card.id.as_str())
    }

    pub fn select_card(&mut self, forward: bool) {
        if self.cards.is_empty() {
            return;
        }
        self.selected_card = if forward {
            (self.selected_card + 1).min(self.cards.len() - 1)
        } else {
            self.selected_card.saturating_sub(1)
        };
    }

    pub fn cycle_playlist(&mut self) {
        self.selected_playlist = match self.selected_playlist {
            _ if self.playlists.is_empty() => None,
            None => Some(0),
            Some(i) if i + 1 < self.playlists.len() => Some(i + 1),
            Some(_) => None,
        };
    }

    pub fn selected_playlist_id(&self) -> Option<String> {
        self.selected_playlist
            .and_then(|i| self.playlists.get(i))
            .map(|playlist| playlist.id.clone())
    }
}
