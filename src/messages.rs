//! Closing-line phrase pools for finished games.
//!
//! Selection is an explicit seeded choice so callers control determinism;
//! seeding by game id keeps the line stable across render passes while
//! still varying game to game.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const VICTORY_MESSAGES: &[&str] = &[
    "takes it home",
    "closes it out",
    "survives the scare",
    "runs away with it",
    "gets the W",
    "holds the line",
];

pub const DEFEAT_MESSAGES: &[&str] = &[
    "comes up short",
    "runs out of gas",
    "lets it slip away",
    "goes home empty",
    "drops this one",
];

/// Pick a victory line for the given seed.
pub fn pick_victory(seed: u64) -> &'static str {
    let mut rng = StdRng::seed_from_u64(seed);
    VICTORY_MESSAGES[rng.gen_range(0..VICTORY_MESSAGES.len())]
}

/// Pick a defeat line for the given seed.
pub fn pick_defeat(seed: u64) -> &'static str {
    let mut rng = StdRng::seed_from_u64(seed);
    DEFEAT_MESSAGES[rng.gen_range(0..DEFEAT_MESSAGES.len())]
}

/// Derive a stable seed from a game id.
pub fn message_seed(game_id: &str) -> u64 {
    game_id.bytes().fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64))
}
