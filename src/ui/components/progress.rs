use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    symbols::{self, border},
    text::ToSpan,
    widgets::{Block, Borders, Gauge, Widget},
};

use crate::{
    player::effects::{PlayIcon, RangeInput, TextField},
    ui::view::PlayerView,
    util::colors,
};

pub struct ProgressWidget<'a> {
    view: &'a PlayerView,
}

impl<'a> ProgressWidget<'a> {
    pub fn new(view: &'a PlayerView) -> Self {
        Self { view }
    }
}

impl Widget for ProgressWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let icon = match self.view.play_icon {
            PlayIcon::Play => "▶",
            PlayIcon::Pause => "⏸",
        };

        let mut track_info = format!("{icon}  {}", self.view.text(TextField::BottomTitle));
        let artist = self.view.text(TextField::BottomArtist);
        if !artist.is_empty() {
            track_info = format!("{track_info} by {artist}");
        }

        let current = self.view.text(TextField::CurrentTime);
        let total = self.view.text(TextField::Duration);
        let clock = format!(
            "{} / {}",
            if current.is_empty() { "0:00" } else { current },
            if total.is_empty() { "0:00" } else { total },
        );

        let ratio = (self.view.range(RangeInput::Progress) / 100.0).clamp(0.0, 1.0);

        Gauge::default()
            .block(
                Block::default()
                    .title_top(track_info)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_set(border::Set {
                        top_right: symbols::line::ROUNDED.horizontal_down,
                        bottom_right: symbols::line::ROUNDED.horizontal_up,
                        ..symbols::border::ROUNDED
                    }),
            )
            .gauge_style(Style::default().fg(colors::PRIMARY).bg(colors::BACKGROUND))
            .ratio(ratio)
            .label(clock.to_span().fg(colors::ACCENT))
            .use_unicode(true)
            .render(area, buf);
    }
}
