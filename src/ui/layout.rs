use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::Paragraph,
};

use crate::{
    ui::{
        components::{
            controls::PlayerControlsWidget, favorites::FavoritesWidget,
            now_playing::NowPlayingWidget, progress::ProgressWidget,
        },
        view::PlayerView,
    },
    util::colors,
};

const HELP: &str =
    "space play/pause · n/p next/prev · s shuffle · r repeat · f favorite · d remove · a add · q quit";

pub struct AppLayout<'a> {
    pub view: &'a PlayerView,
}

impl<'a> AppLayout<'a> {
    pub fn new(view: &'a PlayerView) -> Self {
        Self { view }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[0]);

        f.render_widget(NowPlayingWidget::new(self.view), main_chunks[0]);
        f.render_widget(FavoritesWidget::new(self.view), main_chunks[1]);

        let player_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(23)])
            .split(chunks[1]);

        f.render_widget(ProgressWidget::new(self.view), player_chunks[0]);
        f.render_widget(PlayerControlsWidget::new(self.view), player_chunks[1]);

        let status = match self.view.current_alert() {
            Some(alert) => Line::from(format!(" ! {alert}  (esc to dismiss)"))
                .bold()
                .fg(colors::ACCENT),
            None => Line::from(HELP).fg(colors::NEUTRAL),
        };
        f.render_widget(Paragraph::new(status), chunks[2]);
    }
}
