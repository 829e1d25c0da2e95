//! Static per-team lookup tables.
//!
//! Map coordinates are normalized (x, y) fractions of the canvas, derived
//! from each arena's latitude/longitude projected onto the continental-US
//! bounding box (longitude -125..-67, latitude 49.5..24.5, y growing south).

use phf::phf_map;

/// Normalized (x, y) map position per tricode, 0.0..1.0 on each axis.
pub static TEAM_COORDS: phf::Map<&'static str, (f32, f32)> = phf_map! {
    "ATL" => (0.700, 0.630),
    "BKN" => (0.880, 0.353),
    "BOS" => (0.930, 0.286),
    "CHA" => (0.761, 0.571),
    "CHI" => (0.644, 0.305),
    "CLE" => (0.747, 0.320),
    "DAL" => (0.486, 0.669),
    "DEN" => (0.345, 0.390),
    "DET" => (0.723, 0.287),
    "GSW" => (0.045, 0.469),
    "HOU" => (0.511, 0.790),
    "IND" => (0.670, 0.389),
    "LAC" => (0.120, 0.630),
    "LAL" => (0.113, 0.610),
    "MEM" => (0.603, 0.574),
    "MIA" => (0.772, 0.950),
    "MIL" => (0.639, 0.258),
    "MIN" => (0.547, 0.181),
    "NOP" => (0.602, 0.782),
    "NYK" => (0.879, 0.350),
    "OKC" => (0.474, 0.561),
    "ORL" => (0.752, 0.838),
    "PHI" => (0.859, 0.382),
    "PHX" => (0.223, 0.642),
    "POR" => (0.040, 0.159),
    "SAC" => (0.061, 0.437),
    "SAS" => (0.457, 0.803),
    "TOR" => (0.786, 0.234),
    "UTA" => (0.226, 0.350),
    "WAS" => (0.827, 0.424),
};

/// Primary team color per tricode, picked for legibility on dark terminals.
pub static TEAM_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "ATL" => (225, 68, 52),
    "BKN" => (160, 160, 160),
    "BOS" => (0, 170, 85),
    "CHA" => (0, 160, 176),
    "CHI" => (206, 17, 65),
    "CLE" => (160, 30, 70),
    "DAL" => (0, 120, 215),
    "DEN" => (255, 198, 39),
    "DET" => (200, 16, 46),
    "GSW" => (255, 199, 44),
    "HOU" => (206, 17, 65),
    "IND" => (253, 187, 48),
    "LAC" => (200, 16, 46),
    "LAL" => (153, 76, 204),
    "MEM" => (93, 118, 169),
    "MIA" => (152, 0, 46),
    "MIL" => (0, 120, 60),
    "MIN" => (35, 140, 200),
    "NOP" => (180, 151, 90),
    "NYK" => (245, 132, 38),
    "OKC" => (0, 125, 195),
    "ORL" => (0, 125, 197),
    "PHI" => (0, 107, 182),
    "PHX" => (229, 95, 32),
    "POR" => (224, 58, 62),
    "SAC" => (120, 70, 160),
    "SAS" => (196, 206, 211),
    "TOR" => (206, 17, 65),
    "UTA" => (249, 160, 27),
    "WAS" => (227, 24, 55),
};

/// Map position for a tricode, if we know the team.
pub fn team_coord(tricode: &str) -> Option<(f32, f32)> {
    TEAM_COORDS.get(tricode).copied()
}

/// Primary color for a tricode as an RGB triple.
pub fn team_color(tricode: &str) -> Option<(u8, u8, u8)> {
    TEAM_COLORS.get(tricode).copied()
}
