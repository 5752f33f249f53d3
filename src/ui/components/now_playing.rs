use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    symbols::border,
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::{
    player::effects::{ImageSlot, TextField},
    ui::view::PlayerView,
    util::colors,
};

pub struct NowPlayingWidget<'a> {
    view: &'a PlayerView,
}

impl<'a> NowPlayingWidget<'a> {
    pub fn new(view: &'a PlayerView) -> Self {
        Self { view }
    }
}

impl Widget for NowPlayingWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .title("now playing")
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(1)])
            .split(inner);

        let title = self.view.text(TextField::Title);
        let header = vec![
            Line::from(if title.is_empty() { "Nothing queued" } else { title })
                .bold()
                .fg(colors::PRIMARY),
            Line::from(self.view.text(TextField::Artist)).fg(colors::ACCENT),
            Line::from(self.view.text(TextField::Album)).italic(),
            Line::from(self.view.image(ImageSlot::Cover).unwrap_or_default()).fg(colors::NEUTRAL),
        ];
        Paragraph::new(header).render(chunks[0], buf);

        Paragraph::new(self.view.text(TextField::Lyrics))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).title("lyrics"))
            .render(chunks[1], buf);
    }
}
