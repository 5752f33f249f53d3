use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;
use tracing::{info, warn};

use super::{
    input::{Input, InputHandler},
    layout::AppLayout,
    tui::{TerminalEvent, Tui},
    view::PlayerView,
};
use crate::{
    audio::{
        engine::RodioMedia,
        traits::{MediaElement, RandomPicker},
    },
    config::Config,
    event::events::{DomEvent, ElementId, Event, EventKind, Payload},
    http::{FavoritesApi, HttpBackend},
    model::{seed::PageSeed, track::Track},
    player::{
        controller::PlaybackController,
        effects::{Effect, Request},
    },
    util::task::TaskManager,
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub controller: PlaybackController,
    pub view: PlayerView,
    media: Box<dyn MediaElement>,
    api: Arc<dyn FavoritesApi>,
    task_manager: TaskManager,
    seed: Option<Vec<Track>>,
    initial_volume: f64,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();

        let seed = match &config.page {
            Some(path) => PageSeed::from_path(path)?,
            None => PageSeed::default(),
        };

        let picker = match config.shuffle_seed {
            Some(seed) => RandomPicker::seeded(seed),
            None => RandomPicker::new(),
        };
        let controller = PlaybackController::new(Box::new(picker))
            .with_default_art(config.default_art.clone())
            .with_volume(f32::from(config.volume) / 100.0);

        let media = RodioMedia::new(event_tx.clone())?;
        let api = HttpBackend::new(config.server.clone());

        let mut app = Self::with_parts(
            controller,
            PlayerView::new(seed.favorites, seed.playlists),
            Box::new(media),
            Arc::new(api),
            (event_tx, event_rx),
        );
        app.seed = seed.queue;
        app.initial_volume = f64::from(config.volume);
        Ok(app)
    }

    pub fn with_parts(
        controller: PlaybackController,
        view: PlayerView,
        media: Box<dyn MediaElement>,
        api: Arc<dyn FavoritesApi>,
        (event_tx, event_rx): (Sender<Event>, Receiver<Event>),
    ) -> Self {
        Self {
            event_rx,
            event_tx,
            controller,
            view,
            media,
            api,
            task_manager: TaskManager::new(),
            seed: None,
            initial_volume: 100.0,
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = Tui::new()?;
        tui.enter()?;

        self.start();
        while !self.should_quit {
            tui.draw(|f| self.ui(f))?;

            tokio::select! {
                Ok(evt) = tui.event_rx.recv_async() => self.handle_terminal_event(evt),
                Ok(evt) = self.event_rx.recv_async() => self.dispatch(evt),
            }

            while let Ok(evt) = self.event_rx.try_recv() {
                self.dispatch(evt);
            }
        }

        self.task_manager.abort_all();
        tui.exit()?;
        Ok(())
    }

    pub fn start(&mut self) {
        self.dispatch(DomEvent::input(ElementId::VolumeRange, self.initial_volume).into());

        let seed = self.seed.take();
        self.dispatch(
            DomEvent::new(ElementId::Window, EventKind::Load)
                .with(Payload::Seed(seed))
                .into(),
        );
    }

    fn ui(&self, frame: &mut Frame) {
        AppLayout::new(&self.view).render(frame, frame.area());
    }

    fn handle_terminal_event(&mut self, evt: TerminalEvent) {
        let TerminalEvent::Key(key) = evt else {
            return;
        };

        match InputHandler::handle_key(key, &self.view) {
            Some(Input::Quit) => self.dispatch(Event::Quit),
            Some(Input::Dom(event)) => self.dispatch(event.into()),
            Some(Input::SelectCard { forward }) => self.view.select_card(forward),
            Some(Input::CyclePlaylist) => self.view.cycle_playlist(),
            Some(Input::DismissAlert) => self.view.dismiss_alert(),
            None => {}
        }
    }

    pub fn dispatch(&mut self, event: Event) {
        if let Event::Quit = event {
            info!("Quitting");
            self.should_quit = true;
            return;
        }

        let effects = self.controller.handle(event);
        self.apply(effects);
    }

    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Ui(update) => self.view.apply(update),
                Effect::Media(command) => self.media.execute(command),
                Effect::Request(request) => self.spawn_request(request),
                Effect::Alert(message) => {
                    warn!("{message}");
                    self.view.push_alert(message);
                }
            }
        }
    }

    fn spawn_request(&mut self, request: Request) {
        let api = self.api.clone();
        let tx = self.event_tx.clone();

        self.task_manager.spawn(async move {
            let event = match request {
                Request::ToggleFavorite { song_id } => Event::FavoriteToggled(
                    api.toggle_favorite(&song_id)
                        .await
                        .map_err(|e| e.to_string()),
                ),
                Request::RemoveFavorite { song_id } => {
                    let result = api.remove_favorite(&song_id).await.map_err(|e| e.to_string());
                    Event::FavoriteRemoved { song_id, result }
                }
                Request::SubmitPlaylistForm { action, track } => Event::PlaylistSubmitted(
                    api.submit_playlist_form(&action, track.as_ref())
                        .await
                        .map_err(|e| e.to_string()),
                ),
            };
            let _ = tx.send_async(event).await;
        });
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use reqwest::StatusCode;

    use super::*;
    use crate::{
        audio::commands::MediaCommand,
        http::{ApiError, FavoriteStatus},
        player::{
            controller::{NO_CURRENT_SONG, REMOVE_FAILED},
            effects::{FavoriteIcon, TextField},
        },
    };

    #[derive(Clone, Default)]
    struct RecordingMedia(Arc<Mutex<Vec<MediaCommand>>>);

    impl MediaElement for RecordingMedia {
        fn load(&mut self, url: &str) {
            self.0.lock().unwrap().push(MediaCommand::Load { url: url.into() });
        }
        fn play(&mut self) {
            self.0.lock().unwrap().push(MediaCommand::Play);
        }
        fn pause(&mut self) {
            self.0.lock().unwrap().push(MediaCommand::Pause);
        }
        fn seek(&mut self, position: std::time::Duration) {
            self.0.lock().unwrap().push(MediaCommand::Seek(position));
        }
        fn set_volume(&mut self, volume: f32) {
            self.0.lock().unwrap().push(MediaCommand::SetVolume(volume));
        }
    }

    struct FakeApi {
        status: &'static str,
        remove_ok: bool,
    }

    #[async_trait]
    impl FavoritesApi for FakeApi {
        async fn toggle_favorite(&self, _song_id: &str) -> Result<FavoriteStatus, ApiError> {
            Ok(FavoriteStatus::from(self.status.to_string()))
        }

        async fn remove_favorite(&self, _song_id: &str) -> Result<(), ApiError> {
            if self.remove_ok {
                Ok(())
            } else {
                Err(ApiError::Status(StatusCode::NOT_FOUND))
            }
        }

        async fn submit_playlist_form(
            &self,
            _action: &str,
            _track: Option<&Track>,
        ) -> Result<(), ApiError> {
            Ok(())
        }
    }

    fn app(api: FakeApi, cards: Vec<Track>) -> (App, RecordingMedia) {
        let media = RecordingMedia::default();
        let app = App::with_parts(
            PlaybackController::default(),
            PlayerView::new(cards, vec![]),
            Box::new(media.clone()),
            Arc::new(api),
            flume::unbounded(),
        );
        (app, media)
    }

    async fn settle(app: &mut App) {
        let evt = app.event_rx.recv_async().await.unwrap();
        app.dispatch(evt);
    }

    #[tokio::test]
    async fn start_autoplays_seeded_queue() {
        let (mut app, media) = app(
            FakeApi {
                status: "added",
                remove_ok: true,
            },
            vec![],
        );
        app.seed = Some(vec![
            Track::new("1", "First").with_media_url("https://cdn.example/1.mp3"),
        ]);

        app.start();

        assert_eq!(app.view.text(TextField::Title), "First");
        assert_eq!(
            *media.0.lock().unwrap(),
            vec![
                MediaCommand::SetVolume(1.0),
                MediaCommand::Load {
                    url: "https://cdn.example/1.mp3".into()
                },
            ]
        );
    }

    #[tokio::test]
    async fn favorite_round_trip_fills_icon() {
        let (mut app, _media) = app(
            FakeApi {
                status: "added",
                remove_ok: true,
            },
            vec![],
        );
        app.seed = Some(vec![Track::new("1", "First")]);
        app.start();

        app.dispatch(DomEvent::click(ElementId::FavoriteButton).into());
        settle(&mut app).await;

        assert_eq!(app.view.favorite_icon, FavoriteIcon::Filled);
    }

    #[tokio::test]
    async fn favorite_without_song_alerts_without_request() {
        let (mut app, _media) = app(
            FakeApi {
                status: "added",
                remove_ok: true,
            },
            vec![],
        );

        app.dispatch(DomEvent::click(ElementId::FavoriteButton).into());

        assert_eq!(app.view.current_alert(), Some(NO_CURRENT_SONG));
        assert!(app.event_rx.is_empty());
    }

    #[tokio::test]
    async fn failed_removal_keeps_card_and_alerts() {
        let (mut app, _media) = app(
            FakeApi {
                status: "added",
                remove_ok: false,
            },
            vec![Track::new("4", "Keep me")],
        );

        app.dispatch(
            DomEvent::click(ElementId::RemoveButton)
                .with(Payload::Card("4".into()))
                .into(),
        );
        settle(&mut app).await;

        assert_eq!(app.view.cards.len(), 1);
        assert_eq!(app.view.current_alert(), Some(REMOVE_FAILED));
    }

    #[tokio::test]
    async fn successful_removal_drops_only_that_card() {
        let (mut app, _media) = app(
            FakeApi {
                status: "added",
                remove_ok: true,
            },
            vec![Track::new("4", "Gone"), Track::new("5", "Stays")],
        );

        app.dispatch(
            DomEvent::click(ElementId::RemoveButton)
                .with(Payload::Card("4".into()))
                .into(),
        );
        settle(&mut app).await;

        let ids: Vec<_> = app.view.cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["5"]);
        assert_eq!(app.view.current_alert(), None);
    }

    #[tokio::test]
    async fn quit_stops_the_loop() {
        let (mut app, _media) = app(
            FakeApi {
                status: "added",
                remove_ok: true,
            },
            vec![],
        );
        app.dispatch(Event::Quit);
        assert!(app.should_quit);
    }
}
