//! Layout engine: place game markers on the map canvas.
//!
//! Each game starts at the cell its home team's normalized coordinates scale
//! to. Markers are placed west to east; a marker colliding with an earlier
//! one on its row slides down row by row (wrapping) until a free row turns
//! up. A full wrap with no free row accepts the overlap rather than failing.

use std::collections::HashMap;

use crate::api::types::{Game, SocialHeat};
use crate::heat::is_crunch_time;
use crate::teams::team_coord;
use crate::tui::state::matches_filter;

use super::marker::{format_marker, MarkerFlags};

/// Minimum empty cells kept on each side of a placed marker.
const MARKER_GAP: usize = 3;

/// Fallback coordinate for tricodes missing from the static table.
const UNKNOWN_COORD: (f32, f32) = (0.5, 0.5);

/// Final placement of one game's marker, plus the flags it was formatted
/// with. Recomputed from scratch every render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
    pub len: usize,
    pub flags: MarkerFlags,
}

struct Placement {
    index: usize,
    text: Vec<char>,
    row: usize,
    col: usize,
    flags: MarkerFlags,
}

fn ranges_collide(occupied: &[(usize, usize)], start: usize, end: usize) -> bool {
    occupied.iter().any(|&(s, e)| start < e && s < end)
}

/// Splice game markers into the map lines.
///
/// Returns the mutated lines (each exactly `width` cells) and a map from
/// game index to its accepted [`GridPosition`]. Pure: identical inputs give
/// identical outputs.
pub fn embed_games_in_map(
    lines: &[String],
    games: &[Game],
    selected: usize,
    width: usize,
    filter: Option<&str>,
    heat: &HashMap<String, SocialHeat>,
) -> (Vec<String>, HashMap<usize, GridPosition>) {
    let height = lines.len();
    let mut positions = HashMap::new();

    if height == 0 || width == 0 {
        return (lines.to_vec(), positions);
    }

    let mut grid: Vec<Vec<char>> = lines
        .iter()
        .map(|line| {
            let mut chars: Vec<char> = line.chars().take(width).collect();
            chars.resize(width, ' ');
            chars
        })
        .collect();

    let mut placements: Vec<Placement> = games
        .iter()
        .enumerate()
        .map(|(index, game)| {
            let (x, y) =
                team_coord(&game.home_team.team_tricode).unwrap_or(UNKNOWN_COORD);
            let flags = MarkerFlags {
                selected: index == selected,
                highlighted: filter.map(|f| matches_filter(game, f)).unwrap_or(false),
                live: game.game_status.is_live(),
                heat: heat.get(&game.game_id).map(|h| h.level).unwrap_or_default(),
                crunch: is_crunch_time(game),
            };
            let text: Vec<char> = format_marker(game, &flags).chars().collect();
            let row = ((y * height as f32) as usize).min(height - 1);
            // Shift left just enough for the marker to stay on-grid
            let col = ((x * width as f32) as usize).min(width.saturating_sub(text.len()));
            Placement { index, text, row, col, flags }
        })
        .collect();

    // West-to-east placement order; leftmost markers claim their preferred
    // row first. The sort is stable, so equal columns keep game-list order.
    placements.sort_by_key(|p| p.col);

    let mut occupied: Vec<Vec<(usize, usize)>> = vec![Vec::new(); height];

    for placement in placements {
        let start = placement.col.saturating_sub(MARKER_GAP);
        let end = placement.col + placement.text.len() + MARKER_GAP;

        let mut row = placement.row;
        for attempt in 0..height {
            let candidate = (placement.row + attempt) % height;
            if !ranges_collide(&occupied[candidate], start, end) {
                row = candidate;
                break;
            }
            // Every row taken: fall back to the original row and overlap
        }

        occupied[row].push((start, end));

        for (offset, ch) in placement.text.iter().enumerate() {
            if placement.col + offset < width {
                grid[row][placement.col + offset] = *ch;
            }
        }

        positions.insert(
            placement.index,
            GridPosition {
                row,
                col: placement.col,
                len: placement.text.len(),
                flags: placement.flags,
            },
        );
    }

    let out = grid.into_iter().map(|chars| chars.iter().collect()).collect();
    (out, positions)
}
