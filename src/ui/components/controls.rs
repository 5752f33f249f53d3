use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Style, Stylize},
    symbols::{self, border},
    text::{Line, ToSpan},
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::{
    player::effects::{FavoriteIcon, RangeInput},
    ui::view::PlayerView,
    util::colors,
};

pub struct PlayerControlsWidget<'a> {
    view: &'a PlayerView,
}

impl<'a> PlayerControlsWidget<'a> {
    pub fn new(view: &'a PlayerView) -> Self {
        Self { view }
    }
}

fn toggle_color(active: bool) -> ratatui::style::Color {
    if active { colors::PRIMARY } else { colors::NEUTRAL }
}

impl Widget for PlayerControlsWidget<'_> {
    fn render(self, area: ratatui::prelude::Rect, buf: &mut ratatui::prelude::Buffer) {
        let favorite = match self.view.favorite_icon {
            FavoriteIcon::Filled => "♥".fg(colors::PRIMARY),
            FavoriteIcon::Outline => "♡".fg(colors::NEUTRAL),
        };

        let mut controls_text = Line::default();
        controls_text.push_span("⇄".fg(toggle_color(self.view.shuffle_active)));
        controls_text.push_span("  ");
        controls_text.push_span("↻".fg(toggle_color(self.view.repeat_active)));
        controls_text.push_span("  ");
        controls_text.push_span(favorite);

        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(11), Constraint::Length(12)])
            .split(area);

        let controls_block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_set(border::Set {
                top_left: symbols::line::ROUNDED.horizontal_down,
                top_right: symbols::line::ROUNDED.horizontal_down,
                bottom_left: symbols::line::ROUNDED.horizontal_up,
                bottom_right: symbols::line::ROUNDED.horizontal_up,
                ..symbols::border::ROUNDED
            });
        Paragraph::new(controls_text)
            .block(controls_block)
            .centered()
            .render(layout[0], buf);

        let volume = self.view.range(RangeInput::Volume).clamp(0.0, 100.0);
        let volume_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::Set {
                top_right: symbols::line::ROUNDED.vertical_left,
                top_left: symbols::line::ROUNDED.horizontal_down,
                bottom_left: symbols::line::ROUNDED.horizontal_up,
                ..symbols::border::ROUNDED
            });

        Gauge::default()
            .block(volume_block)
            .gauge_style(Style::new().fg(colors::PRIMARY).bg(colors::NEUTRAL))
            .ratio(volume / 100.0)
            .label(format!("{volume:.0}%").to_span())
            .render(layout[1], buf);
    }
}
