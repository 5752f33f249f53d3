use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols::border,
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::truncate;
use crate::{ui::view::PlayerView, util::colors};

pub struct FavoritesWidget<'a> {
    view: &'a PlayerView,
}

impl<'a> FavoritesWidget<'a> {
    pub fn new(view: &'a PlayerView) -> Self {
        Self { view }
    }
}

impl Widget for FavoritesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(4)])
            .split(area);

        let width = chunks[0].width.saturating_sub(4) as usize;
        let items: Vec<ListItem> = self
            .view
            .cards
            .iter()
            .map(|card| {
                let label = if card.artist.is_empty() {
                    card.name.clone()
                } else {
                    format!("{} · {}", card.name, card.artist)
                };
                ListItem::new(truncate(&label, width))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .title("favorites"),
            )
            .highlight_style(Style::new().fg(colors::BACKGROUND).bg(colors::PRIMARY))
            .highlight_symbol("› ");

        let mut state = ListState::default();
        if !self.view.cards.is_empty() {
            state.select(Some(self.view.selected_card));
        }
        StatefulWidget::render(list, chunks[0], buf, &mut state);

        let selected = self
            .view
            .selected_playlist
            .and_then(|i| self.view.playlists.get(i))
            .map(|p| p.name.as_str())
            .unwrap_or("(choose a playlist)");
        let action = self.view.form_action.as_deref().unwrap_or("-");

        Paragraph::new(vec![
            Line::from(format!("playlist: {selected}")).fg(colors::ACCENT),
            Line::from(format!("action:   {action}")).fg(colors::NEUTRAL),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .title("add to playlist"),
        )
        .render(chunks[1], buf);
    }
}
