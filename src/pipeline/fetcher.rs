//! Paced, failure-isolated box-score fetching.

use futures_util::stream::{self, StreamExt};
use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use tracing::{debug, warn};

use crate::cli::types::GameId;
use crate::core::Pacer;
use crate::nba::{BoxScore, PlayerPerformance, StatsProvider, TeamGameTotal};

/// Team totals captured during fetching, keyed by game.
pub type TeamTotalsCache = BTreeMap<GameId, Vec<TeamGameTotal>>;

/// Raw result of fetching a set of games.
#[derive(Debug, Default)]
pub struct BoxScoreBatch {
    /// Successful box scores, in ascending game id order.
    pub box_scores: Vec<BoxScore>,
    /// Games whose fetch or parse failed.
    pub failed: Vec<GameId>,
    /// Games never attempted because the run was cancelled.
    pub abandoned: usize,
}

impl BoxScoreBatch {
    pub fn was_cancelled(&self) -> bool {
        self.abandoned > 0
    }
}

/// Fetch the box score of every game in ascending id order.
///
/// Each request waits on the shared `pacer`. At most `concurrency` requests
/// are in flight, and results are yielded in input order whatever order they
/// complete in. A failed game is logged and recorded in
/// [`BoxScoreBatch::failed`]; it never affects the other games. When
/// `cancel` resolves, fetches still pending are abandoned and whatever was
/// already collected is returned.
pub async fn fetch_box_scores<P, C>(
    provider: &P,
    pacer: &Pacer,
    game_ids: &BTreeSet<GameId>,
    concurrency: usize,
    cancel: C,
) -> BoxScoreBatch
where
    P: StatsProvider + ?Sized,
    C: Future<Output = ()>,
{
    let fetches = stream::iter(game_ids.iter().cloned())
        .map(move |game_id| async move {
            pacer.wait().await;
            let result = provider.box_score(&game_id).await;
            (game_id, result)
        })
        .buffered(concurrency.max(1))
        .take_until(cancel);
    let mut fetches = std::pin::pin!(fetches);

    let mut batch = BoxScoreBatch::default();
    while let Some((game_id, result)) = fetches.next().await {
        match result {
            Ok(box_score) => {
                debug!(%game_id, players = box_score.players.len(), "fetched box score");
                batch.box_scores.push(box_score);
            }
            Err(e) => {
                warn!(%game_id, error = %e, "skipping game");
                batch.failed.push(game_id);
            }
        }
    }

    batch.abandoned = game_ids.len() - batch.box_scores.len() - batch.failed.len();
    if batch.abandoned > 0 {
        warn!(abandoned = batch.abandoned, "fetching cancelled before all games completed");
    }
    batch
}

/// What the ranking and context steps need from a batch of box scores.
#[derive(Debug, Default)]
pub struct FetchedPerformances {
    /// Every player line, game by game in ascending id order, rows in
    /// upstream order within a game.
    pub performances: Vec<PlayerPerformance>,
    /// Team totals for every game that reported them.
    pub team_totals: TeamTotalsCache,
    pub failed: Vec<GameId>,
    pub abandoned: usize,
}

impl From<BoxScoreBatch> for FetchedPerformances {
    fn from(batch: BoxScoreBatch) -> Self {
        let mut fetched = FetchedPerformances {
            failed: batch.failed,
            abandoned: batch.abandoned,
            ..Default::default()
        };
        for box_score in batch.box_scores {
            fetched.performances.extend(box_score.performances());
            if let Some(totals) = box_score.team_totals {
                fetched.team_totals.insert(box_score.game_id, totals);
            }
        }
        fetched
    }
}

/// Fetch every game and flatten the results into performances plus the
/// team-totals side map.
pub async fn fetch_performances<P, C>(
    provider: &P,
    pacer: &Pacer,
    game_ids: &BTreeSet<GameId>,
    concurrency: usize,
    cancel: C,
) -> FetchedPerformances
where
    P: StatsProvider + ?Sized,
    C: Future<Output = ()>,
{
    fetch_box_scores(provider, pacer, game_ids, concurrency, cancel)
        .await
        .into()
}
