use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::collections::HashMap;

use nba::api::types::{Game, GameStatus, TeamSide};
use nba::config::DisplayConfig;
use nba::tui::map::{embed_games_in_map, render_map_row};
use nba::usmap::{map_lines, MAP_WIDTH};

/// A full 15-game slate, every team playing.
fn create_sample_slate() -> Vec<Game> {
    let matchups = [
        ("LAL", "BOS"), ("GSW", "BKN"), ("MIA", "DEN"), ("PHX", "DAL"),
        ("MIL", "CHI"), ("NYK", "PHI"), ("ATL", "CHA"), ("MEM", "NOP"),
        ("POR", "SAC"), ("UTA", "OKC"), ("TOR", "CLE"), ("DET", "IND"),
        ("SAS", "HOU"), ("ORL", "WAS"), ("LAC", "MIN"),
    ];

    matchups
        .iter()
        .enumerate()
        .map(|(i, (away, home))| {
            let status = match i % 3 {
                0 => GameStatus::Live,
                1 => GameStatus::Scheduled,
                _ => GameStatus::Final,
            };
            Game {
                game_id: format!("002250{:04}", i),
                game_status: status,
                game_status_text: String::new(),
                period: if status == GameStatus::Live { 3 } else { 0 },
                game_clock: String::new(),
                game_time_utc: "2026-01-15T00:30:00Z".to_string(),
                away_team: TeamSide {
                    team_tricode: away.to_string(),
                    score: if status.has_started() { 98 + i as i64 } else { 0 },
                    ..Default::default()
                },
                home_team: TeamSide {
                    team_tricode: home.to_string(),
                    score: if status.has_started() { 95 + i as i64 } else { 0 },
                    ..Default::default()
                },
            }
        })
        .collect()
}

fn bench_layout_engine(c: &mut Criterion) {
    let lines = map_lines();
    let games = create_sample_slate();
    let heat = HashMap::new();

    c.bench_function("embed_full_slate", |b| {
        b.iter(|| {
            embed_games_in_map(
                black_box(&lines),
                black_box(&games),
                black_box(3),
                MAP_WIDTH,
                Some("lakers"),
                &heat,
            )
        })
    });
}

fn bench_row_rendering(c: &mut Criterion) {
    let lines = map_lines();
    let games = create_sample_slate();
    let heat = HashMap::new();
    let display = DisplayConfig::default();
    let (rows, positions) = embed_games_in_map(&lines, &games, 3, MAP_WIDTH, None, &heat);

    c.bench_function("render_all_rows", |b| {
        b.iter(|| {
            for (row, text) in rows.iter().enumerate() {
                black_box(render_map_row(
                    black_box(text),
                    row,
                    &positions,
                    &games,
                    true,
                    &display,
                ));
            }
        })
    });
}

criterion_group!(benches, bench_layout_engine, bench_row_rendering);
criterion_main!(benches);
