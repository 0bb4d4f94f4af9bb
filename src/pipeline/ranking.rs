//! Running-maximum ranking of player performances.

use crate::cli::types::GameId;
use crate::nba::PlayerPerformance;

/// The best performance seen so far, with its composite score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BestPerformance {
    score: i64,
    performance: PlayerPerformance,
}

impl BestPerformance {
    pub fn new(performance: PlayerPerformance) -> Self {
        Self {
            score: performance.composite_score(),
            performance,
        }
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn performance(&self) -> &PlayerPerformance {
        &self.performance
    }

    pub fn game_id(&self) -> &GameId {
        &self.performance.game_id
    }

    pub fn team(&self) -> &str {
        &self.performance.team
    }

    /// Whether `candidate` should replace this one.
    ///
    /// Only a strictly greater composite score wins. On a tie the current
    /// holder stays, so the first performance seen at a given score keeps
    /// the title.
    pub fn is_beaten_by(&self, candidate: &PlayerPerformance) -> bool {
        candidate.composite_score() > self.score
    }

    pub fn into_performance(self) -> PlayerPerformance {
        self.performance
    }
}

/// Single-pass scan keeping the best performance under the strict-greater rule.
#[derive(Debug, Default)]
pub struct RankingEngine {
    best: Option<BestPerformance>,
    seen: usize,
}

impl RankingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consider one performance. Returns true when it became the new best.
    pub fn observe(&mut self, performance: PlayerPerformance) -> bool {
        self.seen += 1;
        let replace = match &self.best {
            None => true,
            Some(best) => best.is_beaten_by(&performance),
        };
        if replace {
            self.best = Some(BestPerformance::new(performance));
        }
        replace
    }

    pub fn best(&self) -> Option<&BestPerformance> {
        self.best.as_ref()
    }

    pub fn seen(&self) -> usize {
        self.seen
    }

    pub fn finish(self) -> Option<BestPerformance> {
        self.best
    }
}

/// Best performance of a stream, or `None` if the stream is empty.
pub fn rank<I>(performances: I) -> Option<BestPerformance>
where
    I: IntoIterator<Item = PlayerPerformance>,
{
    let mut engine = RankingEngine::new();
    for performance in performances {
        engine.observe(performance);
    }
    engine.finish()
}
