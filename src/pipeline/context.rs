//! Opponent and final-score reconstruction for the winning game.

use serde::Serialize;
use tracing::{debug, warn};

use crate::cli::types::GameId;
use crate::core::Pacer;
use crate::nba::{StatsProvider, TeamGameTotal};
use crate::pipeline::fetcher::TeamTotalsCache;

/// Value reported for opponent and final score when the context cannot be
/// reconstructed.
pub const UNAVAILABLE: &str = "unavailable";

/// Which tier produced a resolved context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContextSource {
    /// The game-summary endpoint, with true home/away.
    Summary,
    /// Team totals captured from the box score; home/away unknown.
    TeamTotals,
}

/// Opponent and final score of the winning game.
///
/// Both fields are either resolved together or unavailable together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameContext {
    Resolved {
        opponent: String,
        final_score: String,
        source: ContextSource,
    },
    Unavailable,
}

impl GameContext {
    pub fn opponent(&self) -> &str {
        match self {
            GameContext::Resolved { opponent, .. } => opponent,
            GameContext::Unavailable => UNAVAILABLE,
        }
    }

    pub fn final_score(&self) -> &str {
        match self {
            GameContext::Resolved { final_score, .. } => final_score,
            GameContext::Unavailable => UNAVAILABLE,
        }
    }

    pub fn source(&self) -> Option<ContextSource> {
        match self {
            GameContext::Resolved { source, .. } => Some(*source),
            GameContext::Unavailable => None,
        }
    }
}

/// The two sides of a game, with or without home/away semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Matchup {
    HomeAway {
        home: TeamGameTotal,
        away: TeamGameTotal,
    },
    Unordered(TeamGameTotal, TeamGameTotal),
}

impl Matchup {
    /// A tier only counts when both sides carry a points total.
    fn complete(self) -> Option<Self> {
        let (a, b) = self.sides();
        (a.points.is_some() && b.points.is_some()).then_some(self)
    }

    fn sides(&self) -> (&TeamGameTotal, &TeamGameTotal) {
        match self {
            Matchup::HomeAway { home, away } => (away, home),
            Matchup::Unordered(a, b) => (a, b),
        }
    }

    fn source(&self) -> ContextSource {
        match self {
            Matchup::HomeAway { .. } => ContextSource::Summary,
            Matchup::Unordered(..) => ContextSource::TeamTotals,
        }
    }

    fn final_score(&self) -> Option<String> {
        let (a, b) = self.sides();
        let (pa, pb) = (a.points?, b.points?);
        Some(match self {
            Matchup::HomeAway { .. } => {
                format!("{}@{}: {}-{}", a.abbreviation, b.abbreviation, pa, pb)
            }
            Matchup::Unordered(..) => {
                format!("{} vs {}: {}-{}", a.abbreviation, b.abbreviation, pa, pb)
            }
        })
    }

    /// Resolve against the winner's team; `None` when the team is in neither side.
    fn context_for(&self, team: &str) -> Option<GameContext> {
        let (a, b) = self.sides();
        let opponent = if team == a.abbreviation {
            &b.abbreviation
        } else if team == b.abbreviation {
            &a.abbreviation
        } else {
            return None;
        };
        Some(GameContext::Resolved {
            opponent: opponent.clone(),
            final_score: self.final_score()?,
            source: self.source(),
        })
    }
}

/// Tier 2: exactly two captured team totals, in fetch order.
fn fallback_matchup(totals: Option<&Vec<TeamGameTotal>>) -> Option<Matchup> {
    match totals.map(Vec::as_slice) {
        Some([a, b]) => Matchup::Unordered(a.clone(), b.clone()).complete(),
        _ => None,
    }
}

/// Reconstruct the opponent and final score of `game_id` for `winner_team`.
///
/// Tier 1 asks the provider for the game summary. When that fails or is
/// incomplete, tier 2 uses the team totals captured while fetching box
/// scores. Every failure degrades to [`GameContext::Unavailable`]; nothing
/// is propagated.
pub async fn resolve_context<P>(
    provider: &P,
    pacer: &Pacer,
    game_id: &GameId,
    winner_team: &str,
    fallback: &TeamTotalsCache,
) -> GameContext
where
    P: StatsProvider + ?Sized,
{
    pacer.wait().await;
    let summary = match provider.game_summary(game_id).await {
        Ok(summary) => Matchup::HomeAway {
            home: summary.home,
            away: summary.away,
        }
        .complete(),
        Err(e) => {
            warn!(%game_id, error = %e, "game summary unavailable");
            None
        }
    };

    let matchup = match summary {
        Some(matchup) => Some(matchup),
        None => {
            debug!(%game_id, "falling back to captured team totals");
            fallback_matchup(fallback.get(game_id))
        }
    };

    let Some(matchup) = matchup else {
        warn!(%game_id, "no tier produced both teams");
        return GameContext::Unavailable;
    };

    match matchup.context_for(winner_team) {
        Some(context) => context,
        None => {
            warn!(%game_id, team = winner_team, "winner's team is not in the matchup");
            GameContext::Unavailable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn total(abbr: &str, points: Option<i64>) -> TeamGameTotal {
        TeamGameTotal {
            team_id: None,
            abbreviation: abbr.to_string(),
            points,
        }
    }

    #[test]
    fn test_home_away_format() {
        let matchup = Matchup::HomeAway {
            home: total("LAL", Some(117)),
            away: total("BOS", Some(112)),
        };
        let context = matchup.context_for("LAL").unwrap();
        assert_eq!(context.opponent(), "BOS");
        assert_eq!(context.final_score(), "BOS@LAL: 112-117");
        assert_eq!(context.source(), Some(ContextSource::Summary));

        let context = matchup.context_for("BOS").unwrap();
        assert_eq!(context.opponent(), "LAL");
    }

    #[test]
    fn test_unordered_format() {
        let matchup = Matchup::Unordered(total("MIA", Some(99)), total("NYK", Some(101)));
        let context = matchup.context_for("NYK").unwrap();
        assert_eq!(context.opponent(), "MIA");
        assert_eq!(context.final_score(), "MIA vs NYK: 99-101");
        assert_eq!(context.source(), Some(ContextSource::TeamTotals));
    }

    #[test]
    fn test_unknown_team_has_no_context() {
        let matchup = Matchup::Unordered(total("MIA", Some(99)), total("NYK", Some(101)));
        assert!(matchup.context_for("BOS").is_none());
    }

    #[test]
    fn test_missing_points_is_incomplete() {
        assert!(Matchup::Unordered(total("MIA", None), total("NYK", Some(101)))
            .complete()
            .is_none());
    }

    #[test]
    fn test_fallback_requires_exactly_two_teams() {
        let one = vec![total("MIA", Some(99))];
        let three = vec![
            total("MIA", Some(99)),
            total("NYK", Some(101)),
            total("BOS", Some(90)),
        ];
        assert!(fallback_matchup(None).is_none());
        assert!(fallback_matchup(Some(&one)).is_none());
        assert!(fallback_matchup(Some(&three)).is_none());
    }

    #[test]
    fn test_unavailable_fields_degrade_together() {
        let context = GameContext::Unavailable;
        assert_eq!(context.opponent(), UNAVAILABLE);
        assert_eq!(context.final_score(), UNAVAILABLE);
        assert!(context.source().is_none());
    }
}
