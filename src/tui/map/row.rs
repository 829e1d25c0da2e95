//! Row renderer: composite one map line and its markers into styled spans.
//!
//! Walks the row left to right, alternating dimmed background spans with
//! marker spans. Each marker is decomposed into away / middle / home
//! sub-spans so team colors apply per side. The color priority is fixed:
//! highlighted > team color > heat level > crunch time > selected > default.

use std::collections::HashMap;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::api::types::Game;
use crate::config::DisplayConfig;
use crate::teams::team_color;

use super::layout::GridPosition;
use super::marker::{marker_segments, MarkerFlags};

/// Live indicator shown on the visible blink phase, two cells wide.
const LIVE_DOT_ON: &str = "● ";

/// Resolve the style for one marker sub-span.
fn segment_style(
    flags: &MarkerFlags,
    team: Option<(u8, u8, u8)>,
    blink_on: bool,
    display: &DisplayConfig,
) -> Style {
    if flags.highlighted {
        return Style::default()
            .fg(display.highlight_fg)
            .add_modifier(Modifier::BOLD);
    }
    if let Some((r, g, b)) = team {
        return Style::default().fg(ratatui::style::Color::Rgb(r, g, b));
    }
    if flags.heat.is_notable() {
        return Style::default().fg(display.heat_fg(flags.heat));
    }
    if flags.crunch {
        // Crunch time inverts on the blink cadence
        return if blink_on {
            Style::default()
                .fg(ratatui::style::Color::Black)
                .bg(display.crunch_fg)
        } else {
            Style::default().fg(display.crunch_fg)
        };
    }
    if flags.selected {
        return Style::default()
            .fg(display.selection_fg)
            .add_modifier(Modifier::BOLD);
    }
    Style::default().fg(display.marker_fg)
}

fn background_style(display: &DisplayConfig) -> Style {
    Style::default().fg(display.map_fg).add_modifier(Modifier::DIM)
}

fn slice_chars(chars: &[char], start: usize, end: usize) -> String {
    chars[start.min(chars.len())..end.min(chars.len())].iter().collect()
}

/// Render one map row into a full-width sequence of styled spans.
pub fn render_map_row(
    line: &str,
    row: usize,
    positions: &HashMap<usize, GridPosition>,
    games: &[Game],
    blink_on: bool,
    display: &DisplayConfig,
) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let width = chars.len();

    let mut markers: Vec<(usize, &GridPosition)> = positions
        .iter()
        .filter(|(index, pos)| pos.row == row && **index < games.len())
        .map(|(index, pos)| (*index, pos))
        .collect();
    markers.sort_by_key(|(_, pos)| pos.col);

    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut cursor = 0usize;

    for (index, pos) in markers {
        let game = &games[index];
        let flags = &pos.flags;
        let end = (pos.col + pos.len).min(width);

        if end <= cursor {
            continue; // fully buried under the previous marker
        }

        if pos.col < cursor {
            // Overlap accepted by the layout engine: show the visible tail
            // of the spliced text in the plain marker style.
            spans.push(Span::styled(
                slice_chars(&chars, cursor, end),
                segment_style(flags, None, blink_on, display),
            ));
            cursor = end;
            continue;
        }

        if pos.col > cursor {
            spans.push(Span::styled(
                slice_chars(&chars, cursor, pos.col),
                background_style(display),
            ));
        }

        let segments = marker_segments(game, flags);
        let base = segment_style(flags, None, blink_on, display);

        if !segments.prefix.is_empty() {
            let (text, style) = if blink_on {
                (
                    LIVE_DOT_ON.to_string(),
                    Style::default().fg(display.live_fg).add_modifier(Modifier::BOLD),
                )
            } else {
                (segments.prefix.clone(), background_style(display))
            };
            spans.push(Span::styled(text, style));
        }
        if !segments.open.is_empty() {
            spans.push(Span::styled(segments.open.clone(), base));
        }
        if !segments.away.is_empty() {
            spans.push(Span::styled(
                segments.away.clone(),
                segment_style(flags, team_color(&segments.away), blink_on, display),
            ));
        }
        spans.push(Span::styled(segments.middle.clone(), base));
        if !segments.home.is_empty() {
            spans.push(Span::styled(
                segments.home.clone(),
                segment_style(flags, team_color(&segments.home), blink_on, display),
            ));
        }
        if !segments.close.is_empty() {
            spans.push(Span::styled(segments.close.clone(), base));
        }

        cursor = end;
    }

    if cursor < width {
        spans.push(Span::styled(
            slice_chars(&chars, cursor, width),
            background_style(display),
        ));
    }

    Line::from(spans)
}
