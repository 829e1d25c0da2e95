//! Map page widget: the US canvas with game markers spliced in.

use std::collections::HashMap;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::api::types::{Game, SocialHeat};
use crate::config::DisplayConfig;
use crate::tui::map::{embed_games_in_map, render_map_row};
use crate::tui::widgets::RenderableWidget;
use crate::usmap::{map_lines, MAP_HEIGHT, MAP_WIDTH};

/// Widget for the full map view.
#[derive(Debug, Clone)]
pub struct MapView {
    pub games: Vec<Game>,
    pub selected: usize,
    pub filter: Option<String>,
    pub heat: HashMap<String, SocialHeat>,
    pub blink_on: bool,
}

impl MapView {
    pub fn new(games: Vec<Game>, selected: usize) -> Self {
        Self {
            games,
            selected,
            filter: None,
            heat: HashMap::new(),
            blink_on: true,
        }
    }
}

impl RenderableWidget for MapView {
    fn render(&self, area: Rect, buf: &mut Buffer, display: &DisplayConfig) {
        let lines = map_lines();
        let (rows, positions) = embed_games_in_map(
            &lines,
            &self.games,
            self.selected,
            MAP_WIDTH,
            self.filter.as_deref(),
            &self.heat,
        );

        for (row, text) in rows.iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            let line =
                render_map_row(text, row, &positions, &self.games, self.blink_on, display);
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(MAP_HEIGHT as u16)
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(MAP_WIDTH as u16)
    }
}
