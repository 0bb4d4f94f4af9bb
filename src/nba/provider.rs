//! The upstream capabilities the pipeline consumes.

use async_trait::async_trait;

use crate::cli::types::{GameDate, GameId, Season, SeasonPhase};
use crate::nba::types::{BoxScore, GameSummary};
use crate::Result;

/// Source of game listings, box scores and game summaries.
///
/// Every call may fail independently; callers decide which failures are
/// fatal. [`NbaStatsClient`](crate::nba::http::NbaStatsClient) is the live
/// implementation.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Game ids played on `date` within one competition phase.
    async fn list_games(
        &self,
        season: Season,
        date: GameDate,
        phase: SeasonPhase,
    ) -> Result<Vec<GameId>>;

    /// Per-player lines, plus team totals when available, for one game.
    async fn box_score(&self, game_id: &GameId) -> Result<BoxScore>;

    /// Home/away totals for one game.
    async fn game_summary(&self, game_id: &GameId) -> Result<GameSummary>;
}
