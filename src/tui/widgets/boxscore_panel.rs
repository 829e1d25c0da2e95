//! Game detail panel: score header, odds, heat, top performers, posts.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
};

use crate::api::types::{Boxscore, Game, GameOdds, PlayerLine, SocialHeat, SocialPost};
use crate::config::DisplayConfig;
use crate::messages::{message_seed, pick_defeat, pick_victory};
use crate::tui::widgets::RenderableWidget;

/// How many players to show per team, ordered by points.
const TOP_PLAYERS: usize = 3;

/// How many discussion posts to show.
const MAX_POSTS: usize = 3;

#[derive(Debug, Clone)]
pub struct BoxscorePanel {
    pub game: Game,
    pub boxscore: Option<Boxscore>,
    pub odds: Option<GameOdds>,
    pub heat: Option<SocialHeat>,
    pub posts: Vec<SocialPost>,
    pub loading: bool,
}

impl BoxscorePanel {
    fn header_line(&self, display: &DisplayConfig) -> Line<'static> {
        let game = &self.game;
        let score = if game.game_status.has_started() {
            format!(
                "{} {} - {} {}",
                game.away_team.team_tricode,
                game.away_team.score,
                game.home_team.score,
                game.home_team.team_tricode
            )
        } else {
            format!(
                "{} @ {}",
                game.away_team.team_tricode, game.home_team.team_tricode
            )
        };
        Line::from(vec![
            Span::styled(score, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                game.game_status_text.clone(),
                Style::default().fg(display.selection_fg),
            ),
        ])
    }

    fn odds_line(&self, display: &DisplayConfig) -> Option<Line<'static>> {
        let odds = self.odds.as_ref()?;
        let mut spans = vec![
            Span::raw(format!(
                "odds  {} {:.1}%  {} {:.1}%",
                odds.away_team, odds.away_prob, odds.home_team, odds.home_prob
            )),
        ];
        if let Some(volume) = odds.volume {
            spans.push(Span::styled(
                format!("  vol ${:.0}k", volume / 1000.0),
                Style::default().fg(display.map_fg),
            ));
        }
        Some(Line::from(spans))
    }

    fn heat_line(&self, display: &DisplayConfig) -> Option<Line<'static>> {
        let heat = self.heat.as_ref()?;
        let trending = if heat.trending { "  trending" } else { "" };
        Some(Line::from(Span::styled(
            format!("buzz  {:?} ({} comments){}", heat.level, heat.count, trending),
            Style::default().fg(display.heat_fg(heat.level)),
        )))
    }

    fn player_lines(&self) -> Vec<Line<'static>> {
        let Some(boxscore) = self.boxscore.as_ref() else {
            return Vec::new();
        };
        let mut lines = Vec::new();
        for team in [&boxscore.away_team, &boxscore.home_team] {
            let mut players: Vec<&PlayerLine> = team.players.iter().collect();
            players.sort_by_key(|p| std::cmp::Reverse(p.points));
            for player in players.into_iter().take(TOP_PLAYERS) {
                lines.push(Line::from(Span::raw(format!(
                    "{:<4} {:<20} {:>2}p {:>2}r {:>2}a",
                    team.team_tricode, player.name, player.points, player.rebounds,
                    player.assists
                ))));
            }
        }
        lines
    }

    fn closing_line(&self, display: &DisplayConfig) -> Option<Line<'static>> {
        if !self.game.game_status.is_final() {
            return None;
        }
        let (winner, loser) = if self.game.home_team.score >= self.game.away_team.score {
            (&self.game.home_team.team_tricode, &self.game.away_team.team_tricode)
        } else {
            (&self.game.away_team.team_tricode, &self.game.home_team.team_tricode)
        };
        let seed = message_seed(&self.game.game_id);
        Some(Line::from(vec![
            Span::styled(
                format!("{} {}", winner, pick_victory(seed)),
                Style::default().fg(display.selection_fg),
            ),
            Span::styled(
                format!("  {} {}", loser, pick_defeat(seed)),
                Style::default().fg(display.map_fg),
            ),
        ]))
    }
}

impl RenderableWidget for BoxscorePanel {
    fn render(&self, area: Rect, buf: &mut Buffer, display: &DisplayConfig) {
        let mut lines = vec![self.header_line(display)];

        if let Some(line) = self.odds_line(display) {
            lines.push(line);
        }
        if let Some(line) = self.heat_line(display) {
            lines.push(line);
        }
        if let Some(line) = self.closing_line(display) {
            lines.push(line);
        }

        if self.loading {
            lines.push(Line::from(Span::styled(
                "loading boxscore...",
                Style::default().fg(display.map_fg),
            )));
        } else {
            lines.extend(self.player_lines());
        }

        for post in self.posts.iter().take(MAX_POSTS) {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{} ", post.user),
                    Style::default().fg(display.highlight_fg),
                ),
                Span::raw(post.text.clone()),
                Span::styled(
                    format!("  +{}", post.likes),
                    Style::default().fg(display.map_fg),
                ),
            ]));
        }

        for (i, line) in lines.iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            buf.set_line(area.x, area.y + i as u16, line, area.width);
        }
    }
}
