use tracing::{debug, error, info, warn};

use crate::{
    audio::{
        commands::MediaCommand,
        state::PlaybackState,
        traits::{IndexPicker, RandomPicker},
    },
    event::{events::Event, registry::STANDARD_HANDLERS},
    http::FavoriteStatus,
    model::track::Track,
    player::{
        effects::{
            Effect, FavoriteIcon, ImageSlot, PlayIcon, RangeInput, Request, TextField,
            ToggleButton, UiUpdate,
        },
        format::format_time,
    },
};

pub const DEFAULT_ART: &str = "/static/default_album.png";
pub const NO_LYRICS: &str = "Lyrics not available";

pub const NO_CURRENT_SONG: &str = "No current song playing";
pub const REMOVE_FAILED: &str = "Error removing song!";
pub const NO_PLAYLIST_SELECTED: &str = "Select a playlist first!";
pub const PLAYLIST_ADD_FAILED: &str = "Could not add song to playlist";

pub struct PlaybackController {
    state: PlaybackState,
    picker: Box<dyn IndexPicker>,
    favorite_song_id: Option<String>,
    default_art: String,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(Box::new(RandomPicker::new()))
    }
}

impl PlaybackController {
    pub fn new(picker: Box<dyn IndexPicker>) -> Self {
        Self {
            state: PlaybackState::default(),
            picker,
            favorite_song_id: None,
            default_art: DEFAULT_ART.to_string(),
        }
    }

    pub fn with_default_art(mut self, path: impl Into<String>) -> Self {
        self.default_art = path.into();
        self
    }

    pub fn with_volume(mut self, volume: f32) -> Self {
        self.state.volume = volume.clamp(0.0, 1.0);
        self
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn favorite_song_id(&self) -> Option<&str> {
        self.favorite_song_id.as_deref()
    }

    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Dom(event) => STANDARD_HANDLERS.dispatch(self, &event),
            Event::FavoriteToggled(result) => self.favorite_toggled(result),
            Event::FavoriteRemoved { song_id, result } => self.favorite_removed(song_id, result),
            Event::PlaylistSubmitted(result) => self.playlist_submitted(result),
            Event::Quit => Vec::new(),
        }
    }

    pub fn load_track(&mut self, track: Option<Track>, index: Option<usize>) -> Vec<Effect> {
        let Some(track) = track else {
            return Vec::new();
        };

        if let Some(index) = index {
            self.state.queue.set_current_index(index);
        }

        let art = track
            .image_url
            .clone()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| self.default_art.clone());
        let lyrics = track
            .lyrics
            .clone()
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| NO_LYRICS.to_string());

        let mut effects = vec![
            Effect::text(TextField::Title, track.name.as_str()),
            Effect::text(TextField::Artist, track.artist.as_str()),
            Effect::text(TextField::Album, track.album.as_str()),
            Effect::text(TextField::Lyrics, lyrics),
            Effect::Ui(UiUpdate::Image(ImageSlot::Cover, art.clone())),
            Effect::Ui(UiUpdate::Image(ImageSlot::BottomCover, art)),
            Effect::text(TextField::BottomTitle, track.name.as_str()),
            Effect::text(TextField::BottomArtist, track.artist.as_str()),
            Effect::Ui(UiUpdate::FavoriteSong(track.id.clone())),
        ];
        self.favorite_song_id = Some(track.id.clone());

        match track.source() {
            Some(url) => {
                info!("Loading '{}' ({})", track.name, track.id);
                self.state.current_time = 0.0;
                self.state.duration = None;
                effects.push(Effect::Media(MediaCommand::Load {
                    url: url.to_string(),
                }));
            }
            None => debug!("Track {} has no media source", track.id),
        }

        effects
    }

    fn load_index(&mut self, index: usize) -> Vec<Effect> {
        let track = self.state.queue.get(index).cloned();
        self.load_track(track, Some(index))
    }

    pub fn toggle_play_pause(&self) -> Vec<Effect> {
        let command = if self.state.paused {
            MediaCommand::Play
        } else {
            MediaCommand::Pause
        };
        vec![Effect::Media(command)]
    }

    pub fn on_play(&mut self) -> Vec<Effect> {
        self.state.paused = false;
        vec![Effect::Ui(UiUpdate::PlayIcon(PlayIcon::Pause))]
    }

    pub fn on_pause(&mut self) -> Vec<Effect> {
        self.state.paused = true;
        vec![Effect::Ui(UiUpdate::PlayIcon(PlayIcon::Play))]
    }

    pub fn seek(&mut self, percent: f64) -> Vec<Effect> {
        let percent = if percent.is_finite() {
            percent.clamp(0.0, 100.0)
        } else {
            0.0
        };

        let mut effects = vec![
            Effect::range(RangeInput::Progress, percent),
            Effect::range(RangeInput::Top, percent),
        ];

        if let Some(position) = self.state.position_for_percent(percent) {
            self.state.current_time = position.as_secs_f64();
            effects.push(Effect::Media(MediaCommand::Seek(position)));
        }

        effects
    }

    pub fn time_update(&mut self, current_time: f64, duration: Option<f64>) -> Vec<Effect> {
        self.state.current_time = current_time;
        self.state.duration = duration;

        let Some(percent) = self.state.percent_complete() else {
            return Vec::new();
        };

        vec![
            Effect::range(RangeInput::Progress, percent),
            Effect::range(RangeInput::Top, percent),
            Effect::text(TextField::CurrentTime, format_time(Some(current_time))),
            Effect::text(TextField::Duration, format_time(duration)),
        ]
    }

    pub fn set_volume(&mut self, value: f64) -> Vec<Effect> {
        if !value.is_finite() {
            return Vec::new();
        }

        let volume = (value / 100.0).clamp(0.0, 1.0) as f32;
        self.state.volume = volume;
        vec![
            Effect::range(RangeInput::Volume, f64::from(volume) * 100.0),
            Effect::Media(MediaCommand::SetVolume(volume)),
        ]
    }

    pub fn next(&mut self) -> Vec<Effect> {
        match self.state.queue.next_index(self.picker.as_mut()) {
            Some(index) => self.load_index(index),
            None => Vec::new(),
        }
    }

    pub fn previous(&mut self) -> Vec<Effect> {
        match self.state.queue.previous_index() {
            Some(index) => self.load_index(index),
            None => Vec::new(),
        }
    }

    pub fn toggle_shuffle(&mut self) -> Vec<Effect> {
        let active = self.state.queue.toggle_shuffle();
        vec![Effect::Ui(UiUpdate::Active(ToggleButton::Shuffle, active))]
    }

    pub fn toggle_repeat(&mut self) -> Vec<Effect> {
        let active = self.state.queue.toggle_repeat();
        vec![Effect::Ui(UiUpdate::Active(ToggleButton::Repeat, active))]
    }

    pub fn init_queue(&mut self, tracks: Option<Vec<Track>>) -> bool {
        self.state.queue.load(tracks)
    }

    pub fn page_load(&mut self, tracks: Option<Vec<Track>>) -> Vec<Effect> {
        if !self.init_queue(tracks) {
            return Vec::new();
        }

        info!("Queued {} tracks from page", self.state.queue.len());
        self.load_index(0)
    }

    pub fn toggle_favorite(&self) -> Vec<Effect> {
        match self.favorite_song_id.as_deref().filter(|id| !id.is_empty()) {
            Some(song_id) => vec![Effect::Request(Request::ToggleFavorite {
                song_id: song_id.to_string(),
            })],
            None => vec![Effect::Alert(NO_CURRENT_SONG.to_string())],
        }
    }

    pub fn favorite_toggled(&self, result: Result<FavoriteStatus, String>) -> Vec<Effect> {
        match result {
            Ok(FavoriteStatus::Added) => {
                vec![Effect::Ui(UiUpdate::FavoriteIcon(FavoriteIcon::Filled))]
            }
            Ok(FavoriteStatus::Removed) => {
                vec![Effect::Ui(UiUpdate::FavoriteIcon(FavoriteIcon::Outline))]
            }
            Ok(FavoriteStatus::Other(status)) => {
                debug!("Favorite toggle answered with status '{status}'");
                Vec::new()
            }
            Err(e) => {
                error!("Favorite toggle failed: {e}");
                Vec::new()
            }
        }
    }

    pub fn remove_favorite(&self, song_id: &str) -> Vec<Effect> {
        vec![Effect::Request(Request::RemoveFavorite {
            song_id: song_id.to_string(),
        })]
    }

    pub fn favorite_removed(&self, song_id: String, result: Result<(), String>) -> Vec<Effect> {
        match result {
            Ok(()) => vec![Effect::Ui(UiUpdate::RemoveCard(song_id))],
            Err(e) => {
                error!("Removing favorite {song_id} failed: {e}");
                vec![Effect::Alert(REMOVE_FAILED.to_string())]
            }
        }
    }

    pub fn submit_playlist(&self, selection: Option<&str>) -> Vec<Effect> {
        let Some(playlist_id) = selection.map(str::trim).filter(|id| !id.is_empty()) else {
            return vec![Effect::Alert(NO_PLAYLIST_SELECTED.to_string())];
        };

        let action = format!("/playlists/{playlist_id}/add");
        vec![
            Effect::Ui(UiUpdate::FormAction(action.clone())),
            Effect::Request(Request::SubmitPlaylistForm {
                action,
                track: self.state.current_track().cloned(),
            }),
        ]
    }

    pub fn playlist_submitted(&self, result: Result<(), String>) -> Vec<Effect> {
        match result {
            Ok(()) => {
                info!("Song added to playlist");
                Vec::new()
            }
            Err(e) => {
                warn!("Adding to playlist failed: {e}");
                vec![Effect::Alert(PLAYLIST_ADD_FAILED.to_string())]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::VecDeque, time::Duration};

    use super::*;

    struct Scripted(VecDeque<usize>);

    impl IndexPicker for Scripted {
        fn pick(&mut self, _len: usize) -> usize {
            self.0.pop_front().expect("picker exhausted")
        }
    }

    fn track(id: &str) -> Track {
        Track::new(id, format!("Song {id}")).with_media_url(format!("https://cdn.example/{id}.mp3"))
    }

    fn controller_with(ids: &[&str], picks: &[usize]) -> PlaybackController {
        let mut controller = PlaybackController::new(Box::new(Scripted(picks.iter().copied().collect())));
        controller.init_queue(Some(ids.iter().map(|id| track(id)).collect()));
        controller
    }

    fn loaded_url(effects: &[Effect]) -> Option<&str> {
        effects.iter().find_map(|e| match e {
            Effect::Media(MediaCommand::Load { url }) => Some(url.as_str()),
            _ => None,
        })
    }

    #[test]
    fn load_track_fills_defaults_for_missing_fields() {
        let mut controller = PlaybackController::default().with_default_art("/art.png");
        let effects = controller.load_track(Some(Track::new("9", "Bare")), None);

        assert!(effects.contains(&Effect::text(TextField::Lyrics, NO_LYRICS)));
        assert!(effects.contains(&Effect::text(TextField::Album, "")));
        assert!(effects.contains(&Effect::Ui(UiUpdate::Image(
            ImageSlot::BottomCover,
            "/art.png".into()
        ))));
        assert_eq!(loaded_url(&effects), None);
        assert_eq!(controller.favorite_song_id(), Some("9"));
    }

    #[test]
    fn load_track_without_track_does_nothing() {
        let mut controller = controller_with(&["a", "b"], &[]);
        assert!(controller.load_track(None, Some(1)).is_empty());
        assert_eq!(controller.state().queue.current_index(), Some(0));
    }

    #[test]
    fn repeat_reloads_current_track() {
        let mut controller = controller_with(&["a", "b", "c"], &[]);
        controller.load_track(Some(track("b")), Some(1));
        controller.toggle_repeat();
        controller.toggle_shuffle();

        let effects = controller.next();
        assert_eq!(loaded_url(&effects), Some("https://cdn.example/b.mp3"));
        assert_eq!(controller.state().queue.current_index(), Some(1));
    }

    #[test]
    fn shuffle_loads_picked_index() {
        let mut controller = controller_with(&["a", "b", "c"], &[2]);
        controller.toggle_shuffle();

        let effects = controller.next();
        assert_eq!(loaded_url(&effects), Some("https://cdn.example/c.mp3"));
        assert_eq!(controller.state().queue.current_index(), Some(2));
    }

    #[test]
    fn sequential_end_of_queue_loads_nothing() {
        let mut controller = controller_with(&["a", "b"], &[]);
        assert_eq!(loaded_url(&controller.next()), Some("https://cdn.example/b.mp3"));
        assert!(controller.next().is_empty());
        assert_eq!(controller.state().queue.current_index(), Some(1));
    }

    #[test]
    fn previous_at_start_is_noop() {
        let mut controller = controller_with(&["a", "b"], &[]);
        assert!(controller.previous().is_empty());
        assert_eq!(controller.state().queue.current_index(), Some(0));
    }

    #[test]
    fn seek_mirrors_both_ranges() {
        let mut controller = controller_with(&["a"], &[]);
        controller.time_update(0.0, Some(200.0));

        let effects = controller.seek(50.0);
        assert_eq!(
            effects,
            vec![
                Effect::range(RangeInput::Progress, 50.0),
                Effect::range(RangeInput::Top, 50.0),
                Effect::Media(MediaCommand::Seek(Duration::from_secs(100))),
            ]
        );
        assert_eq!(controller.state().current_time, 100.0);
    }

    #[test]
    fn seek_before_duration_is_known_skips_media() {
        let mut controller = controller_with(&["a"], &[]);
        let effects = controller.seek(30.0);
        assert!(!effects.iter().any(|e| matches!(e, Effect::Media(_))));
    }

    #[test]
    fn time_update_formats_labels() {
        let mut controller = controller_with(&["a"], &[]);
        let effects = controller.time_update(65.0, Some(600.0));

        assert!(effects.contains(&Effect::text(TextField::CurrentTime, "1:05")));
        assert!(effects.contains(&Effect::text(TextField::Duration, "10:00")));
        assert!(effects.contains(&Effect::range(RangeInput::Top, 65.0 / 600.0 * 100.0)));
    }

    #[test]
    fn time_update_without_duration_only_records() {
        let mut controller = controller_with(&["a"], &[]);
        assert!(controller.time_update(3.0, Some(f64::NAN)).is_empty());
        assert_eq!(controller.state().current_time, 3.0);
    }

    #[test]
    fn play_pause_follows_media_events() {
        let mut controller = controller_with(&["a"], &[]);
        assert_eq!(controller.toggle_play_pause(), vec![Effect::Media(MediaCommand::Play)]);

        assert_eq!(
            controller.on_play(),
            vec![Effect::Ui(UiUpdate::PlayIcon(PlayIcon::Pause))]
        );
        assert_eq!(controller.toggle_play_pause(), vec![Effect::Media(MediaCommand::Pause)]);
    }

    #[test]
    fn volume_is_clamped() {
        let mut controller = PlaybackController::default();
        let effects = controller.set_volume(140.0);
        assert!(effects.contains(&Effect::Media(MediaCommand::SetVolume(1.0))));
        assert_eq!(controller.state().volume, 1.0);
    }

    #[test]
    fn init_queue_ignores_empty_and_absent() {
        let mut controller = controller_with(&["a", "b"], &[]);
        controller.next();

        assert!(!controller.init_queue(Some(vec![])));
        assert!(!controller.init_queue(None));
        assert_eq!(controller.state().queue.len(), 2);
        assert_eq!(controller.state().queue.current_index(), Some(1));
    }

    #[test]
    fn page_load_autoplays_first_track() {
        let mut controller = PlaybackController::default();
        let effects = controller.page_load(Some(vec![track("x"), track("y")]));
        assert_eq!(loaded_url(&effects), Some("https://cdn.example/x.mp3"));

        assert!(controller.page_load(Some(vec![])).is_empty());
    }

    #[test]
    fn favorite_without_current_song_alerts() {
        let controller = PlaybackController::default();
        assert_eq!(
            controller.toggle_favorite(),
            vec![Effect::Alert(NO_CURRENT_SONG.into())]
        );
    }

    #[test]
    fn favorite_requests_for_loaded_song() {
        let mut controller = controller_with(&["a"], &[]);
        controller.page_load(Some(vec![track("z")]));
        assert_eq!(
            controller.toggle_favorite(),
            vec![Effect::Request(Request::ToggleFavorite {
                song_id: "z".into()
            })]
        );
    }

    #[test]
    fn favorite_status_drives_icon() {
        let controller = PlaybackController::default();
        assert_eq!(
            controller.favorite_toggled(Ok(FavoriteStatus::Added)),
            vec![Effect::Ui(UiUpdate::FavoriteIcon(FavoriteIcon::Filled))]
        );
        assert_eq!(
            controller.favorite_toggled(Ok(FavoriteStatus::Removed)),
            vec![Effect::Ui(UiUpdate::FavoriteIcon(FavoriteIcon::Outline))]
        );
        assert!(controller
            .favorite_toggled(Ok(FavoriteStatus::Other("error".into())))
            .is_empty());
        assert!(controller.favorite_toggled(Err("timeout".into())).is_empty());
    }

    #[test]
    fn removal_outcome() {
        let controller = PlaybackController::default();
        assert_eq!(
            controller.favorite_removed("4".into(), Ok(())),
            vec![Effect::Ui(UiUpdate::RemoveCard("4".into()))]
        );
        assert_eq!(
            controller.favorite_removed("4".into(), Err("500".into())),
            vec![Effect::Alert(REMOVE_FAILED.into())]
        );
    }

    #[test]
    fn playlist_form_requires_selection() {
        let controller = controller_with(&["a"], &[]);
        assert_eq!(
            controller.submit_playlist(None),
            vec![Effect::Alert(NO_PLAYLIST_SELECTED.into())]
        );
        assert_eq!(
            controller.submit_playlist(Some("")),
            vec![Effect::Alert(NO_PLAYLIST_SELECTED.into())]
        );

        let effects = controller.submit_playlist(Some("12"));
        assert_eq!(
            effects[0],
            Effect::Ui(UiUpdate::FormAction("/playlists/12/add".into()))
        );
        assert!(matches!(
            &effects[1],
            Effect::Request(Request::SubmitPlaylistForm { action, track: Some(t) })
                if action == "/playlists/12/add" && t.id == "a"
        ));
    }
}
