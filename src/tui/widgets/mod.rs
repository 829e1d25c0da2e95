//! Widget-based rendering infrastructure for the TUI.
//!
//! Widgets render themselves directly into a ratatui Buffer, which keeps
//! them composable and testable: tests render into an off-screen buffer and
//! assert on its rows.

#[cfg(test)]
pub mod testing;

pub mod map_view;
pub use map_view::MapView;

pub mod status_bar;
pub use status_bar::StatusBar;

pub mod standings_panel;
pub use standings_panel::StandingsPanel;

pub mod boxscore_panel;
pub use boxscore_panel::BoxscorePanel;

use ratatui::{buffer::Buffer, layout::Rect};

use crate::config::DisplayConfig;

/// Core trait for renderable widgets.
pub trait RenderableWidget {
    /// Render this widget into the provided buffer.
    fn render(&self, area: Rect, buf: &mut Buffer, display: &DisplayConfig);

    /// Preferred height, or None if the widget adapts to any height.
    fn preferred_height(&self) -> Option<u16> {
        None
    }

    /// Preferred width, or None if the widget adapts to any width.
    fn preferred_width(&self) -> Option<u16> {
        None
    }
}
