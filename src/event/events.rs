use crate::{http::FavoriteStatus, model::track::Track};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    PlayButton,
    ProgressRange,
    TopRange,
    VolumeRange,
    ShuffleButton,
    RepeatButton,
    PrevButton,
    NextButton,
    FavoriteButton,
    RemoveButton,
    PlaylistForm,
    Audio,
    Window,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Input,
    Submit,
    Play,
    Pause,
    TimeUpdate,
    Ended,
    Load,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Payload {
    #[default]
    None,
    Value(f64),
    Time { current: f64, duration: Option<f64> },
    Selection(Option<String>),
    Card(String),
    Seed(Option<Vec<Track>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomEvent {
    pub target: ElementId,
    pub kind: EventKind,
    pub payload: Payload,
}

impl DomEvent {
    pub fn new(target: ElementId, kind: EventKind) -> Self {
        Self {
            target,
            kind,
            payload: Payload::None,
        }
    }

    pub fn click(target: ElementId) -> Self {
        Self::new(target, EventKind::Click)
    }

    pub fn input(target: ElementId, value: f64) -> Self {
        Self::new(target, EventKind::Input).with(Payload::Value(value))
    }

    pub fn media(kind: EventKind) -> Self {
        Self::new(ElementId::Audio, kind)
    }

    pub fn with(mut self, payload: Payload) -> Self {
        self.payload = payload;
        self
    }
}

#[derive(Debug, Clone)]
#[allow(clippy::large_enum_variant)]
pub enum Event {
    Dom(DomEvent),

    // Request completions
    FavoriteToggled(Result<FavoriteStatus, String>),
    FavoriteRemoved {
        song_id: String,
        result: Result<(), String>,
    },
    PlaylistSubmitted(Result<(), String>),

    Quit,
}

impl From<DomEvent> for Event {
    fn from(event: DomEvent) -> Self {
        Self::Dom(event)
    }
}
