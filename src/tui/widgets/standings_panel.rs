//! Standings sidebar: conference tables beside the map.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::api::types::Standing;
use crate::config::DisplayConfig;
use crate::tui::widgets::RenderableWidget;

/// Sidebar width in cells, sized for "rank tricode W-L pct".
pub const STANDINGS_PANEL_WIDTH: u16 = 24;

#[derive(Debug, Clone, Default)]
pub struct StandingsPanel {
    pub standings: Vec<Standing>,
}

impl StandingsPanel {
    pub fn new(standings: Vec<Standing>) -> Self {
        Self { standings }
    }

    fn conference_lines(&self, conference: &str, display: &DisplayConfig) -> Vec<Line<'static>> {
        let mut lines = vec![Line::from(Span::styled(
            conference.to_string(),
            Style::default()
                .fg(display.selection_fg)
                .add_modifier(Modifier::BOLD),
        ))];

        for standing in self.standings.iter().filter(|s| s.conference == conference) {
            lines.push(Line::from(Span::raw(format!(
                "{:>2} {:<4} {:>2}-{:<2} {:.3}",
                standing.rank, standing.team_tricode, standing.wins, standing.losses,
                standing.win_pct
            ))));
        }
        lines
    }
}

impl RenderableWidget for StandingsPanel {
    fn render(&self, area: Rect, buf: &mut Buffer, display: &DisplayConfig) {
        let mut lines = self.conference_lines("East", display);
        lines.push(Line::raw(""));
        lines.extend(self.conference_lines("West", display));

        for (i, line) in lines.iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }

    fn preferred_width(&self) -> Option<u16> {
        Some(STANDINGS_PANEL_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::*;

    fn standing(rank: i64, tricode: &str, wins: i64, losses: i64, conf: &str) -> Standing {
        Standing {
            rank,
            team_tricode: tricode.to_string(),
            team_name: String::new(),
            wins,
            losses,
            win_pct: wins as f64 / (wins + losses) as f64,
            conference: conf.to_string(),
        }
    }

    #[test]
    fn test_conferences_are_grouped() {
        let widget = StandingsPanel::new(vec![
            standing(1, "BOS", 30, 8, "East"),
            standing(1, "OKC", 32, 6, "West"),
            standing(2, "NYK", 26, 12, "East"),
        ]);
        let buf = render_widget(&widget, STANDINGS_PANEL_WIDTH, 10);
        let text = buffer_text(&buf);

        let east = text.find("East").unwrap();
        let west = text.find("West").unwrap();
        let bos = text.find("BOS").unwrap();
        let okc = text.find("OKC").unwrap();
        assert!(east < bos && bos < west && west < okc);
    }

    #[test]
    fn test_record_formatting() {
        let widget = StandingsPanel::new(vec![standing(1, "BOS", 30, 8, "East")]);
        let buf = render_widget(&widget, STANDINGS_PANEL_WIDTH, 4);
        let text = buffer_text(&buf);
        assert!(text.contains("30-8"));
        assert!(text.contains("0.789"));
    }

    #[test]
    fn test_overflow_is_clipped() {
        let standings: Vec<Standing> = (1..=15)
            .map(|i| standing(i, "BOS", 20, 10, "East"))
            .collect();
        let widget = StandingsPanel::new(standings);
        // Shorter than the list; must not panic
        let buf = render_widget(&widget, STANDINGS_PANEL_WIDTH, 5);
        assert_eq!(buffer_text(&buf).lines().count(), 5);
    }
}
