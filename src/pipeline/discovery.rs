//! Multi-phase game discovery.

use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::cli::types::{GameDate, GameId, SeasonPhase};
use crate::core::Pacer;
use crate::nba::StatsProvider;

/// Every game played on `date`, across the given phases.
///
/// Each phase is queried once. A phase whose query fails (typically because
/// it does not apply to that date) is logged and skipped. The result is the
/// duplicate-free union of all phase results, so phase order does not
/// change it.
pub async fn discover_games<P>(
    provider: &P,
    pacer: &Pacer,
    date: GameDate,
    phases: &[SeasonPhase],
) -> BTreeSet<GameId>
where
    P: StatsProvider + ?Sized,
{
    let season = date.season();
    let mut games = BTreeSet::new();

    for &phase in phases {
        pacer.wait().await;
        match provider.list_games(season, date, phase).await {
            Ok(ids) => {
                debug!(%phase, %date, count = ids.len(), "phase listed games");
                games.extend(ids);
            }
            Err(e) => {
                warn!(%phase, %date, error = %e, "phase discovery failed, skipping");
            }
        }
    }

    games
}
