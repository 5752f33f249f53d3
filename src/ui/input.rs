use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    event::events::{DomEvent, ElementId, EventKind, Payload},
    player::effects::RangeInput,
    ui::view::PlayerView,
};

const SEEK_STEP: f64 = 5.0;
const VOLUME_STEP: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Quit,
    Dom(DomEvent),
    SelectCard { forward: bool },
    CyclePlaylist,
    DismissAlert,
}

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent, view: &PlayerView) -> Option<Input> {
        let input = match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), _) => Input::Quit,
            (KeyCode::Char(' '), _) => click(ElementId::PlayButton),
            (KeyCode::Char('n'), _) => click(ElementId::NextButton),
            (KeyCode::Char('p'), _) => click(ElementId::PrevButton),
            (KeyCode::Char('s'), _) => click(ElementId::ShuffleButton),
            (KeyCode::Char('r'), _) => click(ElementId::RepeatButton),
            (KeyCode::Char('f'), _) => click(ElementId::FavoriteButton),
            (KeyCode::Char('H'), _) | (KeyCode::Left, _) => step(
                ElementId::TopRange,
                view.range(RangeInput::Top) - SEEK_STEP,
            ),
            (KeyCode::Char('L'), _) | (KeyCode::Right, _) => step(
                ElementId::TopRange,
                view.range(RangeInput::Top) + SEEK_STEP,
            ),
            (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => step(
                ElementId::VolumeRange,
                view.range(RangeInput::Volume) + VOLUME_STEP,
            ),
            (KeyCode::Char('-'), _) => step(
                ElementId::VolumeRange,
                view.range(RangeInput::Volume) - VOLUME_STEP,
            ),
            (KeyCode::Char('j'), _) | (KeyCode::Down, _) => Input::SelectCard { forward: true },
            (KeyCode::Char('k'), _) | (KeyCode::Up, _) => Input::SelectCard { forward: false },
            (KeyCode::Char('d'), _) => {
                let song_id = view.selected_card_id()?.to_string();
                Input::Dom(DomEvent::click(ElementId::RemoveButton).with(Payload::Card(song_id)))
            }
            (KeyCode::Tab, _) => Input::CyclePlaylist,
            (KeyCode::Char('a'), _) => Input::Dom(
                DomEvent::new(ElementId::PlaylistForm, EventKind::Submit)
                    .with(Payload::Selection(view.selected_playlist_id())),
            ),
            (KeyCode::Esc, _) => Input::DismissAlert,
            _ => return None,
        };
        Some(input)
    }
}

fn click(target: ElementId) -> Input {
    Input::Dom(DomEvent::click(target))
}

fn step(target: ElementId, value: f64) -> Input {
    Input::Dom(DomEvent::input(target, value.clamp(0.0, 100.0)))
}
