use std::collections::HashMap;

use lazy_static::lazy_static;
use tracing::trace;

use super::events::{DomEvent, ElementId, EventKind, Payload};
use crate::player::{controller::PlaybackController, effects::Effect};

pub type Handler = fn(&mut PlaybackController, &Payload) -> Vec<Effect>;

#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<(ElementId, EventKind), Handler>,
}

lazy_static! {
    pub static ref STANDARD_HANDLERS: HandlerTable = HandlerTable::standard();
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, target: ElementId, kind: EventKind, handler: Handler) -> Self {
        self.register(target, kind, handler);
        self
    }

    pub fn register(&mut self, target: ElementId, kind: EventKind, handler: Handler) {
        self.handlers.insert((target, kind), handler);
    }

    pub fn is_bound(&self, target: ElementId, kind: EventKind) -> bool {
        self.handlers.contains_key(&(target, kind))
    }

    pub fn dispatch(&self, controller: &mut PlaybackController, event: &DomEvent) -> Vec<Effect> {
        match self.handlers.get(&(event.target, event.kind)) {
            Some(handler) => handler(controller, &event.payload),
            None => {
                trace!("No handler for {:?}/{:?}", event.target, event.kind);
                Vec::new()
            }
        }
    }

    pub fn standard() -> Self {
        use ElementId::*;
        use EventKind::*;

        Self::new()
            .on(PlayButton, Click, |c, _| c.toggle_play_pause())
            .on(Audio, EventKind::Play, |c, _| c.on_play())
            .on(Audio, EventKind::Pause, |c, _| c.on_pause())
            .on(Audio, TimeUpdate, |c, payload| match payload {
                Payload::Time { current, duration } => c.time_update(*current, *duration),
                _ => Vec::new(),
            })
            .on(Audio, Ended, |c, _| c.next())
            .on(ProgressRange, Input, seek)
            .on(TopRange, Input, seek)
            .on(VolumeRange, Input, |c, payload| match payload {
                Payload::Value(value) => c.set_volume(*value),
                _ => Vec::new(),
            })
            .on(PrevButton, Click, |c, _| c.previous())
            .on(NextButton, Click, |c, _| c.next())
            .on(ShuffleButton, Click, |c, _| c.toggle_shuffle())
            .on(RepeatButton, Click, |c, _| c.toggle_repeat())
            .on(FavoriteButton, Click, |c, _| c.toggle_favorite())
            .on(RemoveButton, Click, |c, payload| match payload {
                Payload::Card(song_id) => c.remove_favorite(song_id),
                _ => Vec::new(),
            })
            .on(PlaylistForm, Submit, |c, payload| match payload {
                Payload::Selection(selection) => c.submit_playlist(selection.as_deref()),
                _ => c.submit_playlist(None),
            })
            .on(Window, Load, |c, payload| match payload {
                Payload::Seed(tracks) => c.page_load(tracks.clone()),
                _ => Vec::new(),
            })
    }
}

fn seek(controller: &mut PlaybackController, payload: &Payload) -> Vec<Effect> {
    match payload {
        Payload::Value(percent) => controller.seek(*percent),
        _ => Vec::new(),
    }
}
