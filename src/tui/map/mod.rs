//! Map composition: marker formatting, layout, and row rendering.

pub mod layout;
pub mod marker;
pub mod row;

pub use layout::{embed_games_in_map, GridPosition};
pub use marker::{format_marker, marker_segments, MarkerFlags, MarkerSegments};
pub use row::render_map_row;
