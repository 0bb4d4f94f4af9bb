//! Every game of a date with its full box score.

use std::future::Future;
use tracing::info;

use crate::cli::types::{GameDate, GameId};
use crate::config::PipelineConfig;
use crate::core::{OutputValue, Pacer};
use crate::nba::{BoxScore, PlayerLine, StatsProvider};
use crate::pipeline::context::UNAVAILABLE;
use crate::pipeline::discovery::discover_games;
use crate::pipeline::fetcher::fetch_box_scores;
use crate::pipeline::stop_signal;

/// One game's report line.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchReport {
    pub date: GameDate,
    pub game_id: GameId,
    /// `"A vs. B"` in box-score team order.
    pub matchup: String,
    /// `"ptsA - ptsB"`, matching `matchup`'s order.
    pub final_score: String,
    pub players: Vec<PlayerLine>,
}

impl MatchReport {
    fn from_box_score(date: GameDate, box_score: BoxScore) -> Self {
        // matchup and score are reported together or not at all
        let (matchup, final_score) = match box_score.team_totals.as_deref() {
            Some([a, b]) => match (a.points, b.points) {
                (Some(pa), Some(pb)) => (
                    format!("{} vs. {}", a.abbreviation, b.abbreviation),
                    format!("{} - {}", pa, pb),
                ),
                _ => (UNAVAILABLE.to_string(), UNAVAILABLE.to_string()),
            },
            _ => (UNAVAILABLE.to_string(), UNAVAILABLE.to_string()),
        };
        Self {
            date,
            game_id: box_score.game_id,
            matchup,
            final_score,
            players: box_score.players,
        }
    }

    pub fn to_output(&self) -> OutputValue {
        OutputValue::map([
            ("date", OutputValue::from(self.date.to_string())),
            ("game_id", OutputValue::from(self.game_id.as_str())),
            ("matchup", OutputValue::from(self.matchup.as_str())),
            ("final_score", OutputValue::from(self.final_score.as_str())),
            (
                "players",
                OutputValue::List(self.players.iter().map(player_output).collect()),
            ),
        ])
    }
}

fn player_output(line: &PlayerLine) -> OutputValue {
    OutputValue::map([
        ("PLAYER_NAME", OutputValue::from(line.name.as_str())),
        ("TEAM_ABBREVIATION", OutputValue::from(line.team.as_str())),
        ("PTS", OutputValue::from(line.points)),
        ("REB", OutputValue::from(line.rebounds)),
        ("AST", OutputValue::from(line.assists)),
        ("STL", OutputValue::from(line.steals)),
        ("BLK", OutputValue::from(line.blocks)),
        ("FG3M", OutputValue::from(line.fg3m)),
        ("FG3_PCT", OutputValue::from(line.fg3_pct)),
        ("FGM", OutputValue::from(line.fgm)),
        ("FG_PCT", OutputValue::from(line.fg_pct)),
        ("PLUS_MINUS", OutputValue::from(line.plus_minus)),
    ])
}

/// All games of a date.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchesReport {
    pub date: GameDate,
    pub games: Vec<MatchReport>,
}

impl MatchesReport {
    pub fn to_output(&self) -> OutputValue {
        OutputValue::map([(
            "games",
            OutputValue::List(self.games.iter().map(MatchReport::to_output).collect()),
        )])
    }

    /// The sanitized JSON document.
    pub fn to_json(&self) -> serde_json::Value {
        self.to_output().into_json()
    }
}

/// Discover every game of `date` and report each one's box score.
///
/// Games whose box score fails are logged and left out, as are games never
/// fetched because `cancel` resolved or the configured deadline (counted
/// from the start of the call) passed first.
pub async fn matches_of_the_day<P, C>(
    provider: &P,
    config: &PipelineConfig,
    date: GameDate,
    cancel: C,
) -> MatchesReport
where
    P: StatsProvider + ?Sized,
    C: Future<Output = ()>,
{
    let stop = stop_signal(cancel, config.deadline);
    let pacer = Pacer::new(config.pacing);
    let games = discover_games(provider, &pacer, date, &config.phases).await;
    info!(%date, games = games.len(), "listing matches");

    let batch = fetch_box_scores(provider, &pacer, &games, config.concurrency, stop).await;
    MatchesReport {
        date,
        games: batch
            .box_scores
            .into_iter()
            .map(|box_score| MatchReport::from_box_score(date, box_score))
            .collect(),
    }
}
