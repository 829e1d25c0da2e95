//! Bottom status bar: date, connection state, counts, key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Key hints shown when not searching.
const KEY_HINTS: &str = "←↓↑→ move  / filter  enter detail  s standings  [ ] date  r refresh  q quit";

#[derive(Debug, Clone, Default)]
pub struct StatusBar {
    pub date: String,
    pub game_count: usize,
    pub live_count: usize,
    pub connected: bool,
    pub search_active: bool,
    pub search_input: String,
    pub filter: Option<String>,
}

impl RenderableWidget for StatusBar {
    fn render(&self, area: Rect, buf: &mut Buffer, display: &DisplayConfig) {
        let mut spans: Vec<Span> = Vec::new();

        let indicator = if self.connected { "●" } else { "○" };
        let indicator_style = if self.connected {
            Style::default().fg(ratatui::style::Color::Green)
        } else {
            Style::default().fg(display.error_fg)
        };
        spans.push(Span::styled(format!("{} ", indicator), indicator_style));

        spans.push(Span::styled(
            format!("{}  ", self.date),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw(format!(
            "{} games, {} live  ",
            self.game_count, self.live_count
        )));

        if self.search_active {
            spans.push(Span::styled(
                format!("/{}_", self.search_input),
                Style::default().fg(display.highlight_fg),
            ));
        } else if let Some(filter) = self.filter.as_deref().filter(|f| !f.is_empty()) {
            spans.push(Span::styled(
                format!("filter: {}  ", filter),
                Style::default().fg(display.highlight_fg),
            ));
            spans.push(Span::styled(
                KEY_HINTS,
                Style::default().fg(display.map_fg),
            ));
        } else {
            spans.push(Span::styled(
                KEY_HINTS,
                Style::default().fg(display.map_fg),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(1)
    }
}
