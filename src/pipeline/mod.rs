//! The daily aggregation-and-ranking pipeline.
//!
//! A run goes season → discovery → box-score fetch → ranking → context
//! resolution → sanitized output, with two early exits: no games on the
//! date, and no player data for the games that were found. Nothing here
//! returns an error; upstream failures degrade the result instead.
//!
//! ```rust,no_run
//! use nba_potd::{NbaStatsClient, PipelineConfig, TeamTable};
//! use nba_potd::pipeline::DailyLeaderPipeline;
//!
//! # async fn example() -> nba_potd::Result<()> {
//! let config = PipelineConfig::from_env()?;
//! let client = NbaStatsClient::new(
//!     config.base_url.clone(),
//!     config.request_timeout,
//!     &config.user_agent,
//!     TeamTable::nba(),
//! )?;
//! let pipeline = DailyLeaderPipeline::new(client, config);
//! let document = pipeline.get_player_of_the_day(1).await;
//! println!("{}", document);
//! # Ok(())
//! # }
//! ```

pub mod context;
pub mod discovery;
pub mod fetcher;
pub mod matches;
pub mod ranking;

use serde_json::Value;
use std::future::Future;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cli::types::{GameDate, GameId};
use crate::config::PipelineConfig;
use crate::core::{OutputValue, Pacer};
use crate::nba::StatsProvider;

pub use context::{resolve_context, ContextSource, GameContext, UNAVAILABLE};
pub use discovery::discover_games;
pub use fetcher::{fetch_box_scores, fetch_performances, BoxScoreBatch, FetchedPerformances, TeamTotalsCache};
pub use matches::{matches_of_the_day, MatchReport, MatchesReport};
pub use ranking::{rank, BestPerformance, RankingEngine};

/// The winning performance of a date, with its game context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyLeader {
    pub player: String,
    pub team: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub score: i64,
    pub game_id: GameId,
    pub context: GameContext,
}

impl DailyLeader {
    fn new(best: BestPerformance, context: GameContext) -> Self {
        let score = best.score();
        let perf = best.into_performance();
        Self {
            player: perf.player,
            team: perf.team,
            points: perf.points,
            rebounds: perf.rebounds,
            assists: perf.assists,
            score,
            game_id: perf.game_id,
            context,
        }
    }
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyResult {
    /// No phase reported a game on the date.
    NoGames { date: GameDate },
    /// Games were found but none produced a player line.
    NoPerformances { date: GameDate },
    Leader { date: GameDate, leader: DailyLeader },
}

impl DailyResult {
    pub fn date(&self) -> GameDate {
        match self {
            DailyResult::NoGames { date }
            | DailyResult::NoPerformances { date }
            | DailyResult::Leader { date, .. } => *date,
        }
    }

    /// Informational message for the two empty outcomes.
    pub fn message(&self) -> Option<String> {
        match self {
            DailyResult::NoGames { date } => Some(format!("No NBA games were played on {}.", date)),
            DailyResult::NoPerformances { date } => {
                Some(format!("No player data available for {}.", date))
            }
            DailyResult::Leader { .. } => None,
        }
    }

    pub fn leader(&self) -> Option<&DailyLeader> {
        match self {
            DailyResult::Leader { leader, .. } => Some(leader),
            _ => None,
        }
    }

    /// The output document, before sanitization.
    pub fn to_output(&self) -> OutputValue {
        let DailyResult::Leader { date, leader } = self else {
            return OutputValue::map([("message", OutputValue::from(self.message()))]);
        };
        OutputValue::map([
            ("date", OutputValue::from(date.to_string())),
            (
                "player_of_the_day",
                OutputValue::map([
                    ("Player", OutputValue::from(leader.player.as_str())),
                    ("Team", OutputValue::from(leader.team.as_str())),
                    ("Points", OutputValue::from(leader.points)),
                    ("Rebounds", OutputValue::from(leader.rebounds)),
                    ("Assists", OutputValue::from(leader.assists)),
                    ("Opponent", OutputValue::from(leader.context.opponent())),
                    ("Final_Score", OutputValue::from(leader.context.final_score())),
                ]),
            ),
        ])
    }

    /// The sanitized JSON document handed to callers.
    pub fn to_json(&self) -> Value {
        self.to_output().into_json()
    }
}

/// Future that resolves at `deadline`, or never when there is none.
async fn deadline_elapsed(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}

/// Stop signal for a fetch: `cancel`, or `deadline` counted from now,
/// whichever comes first. Call at the start of a run.
pub(crate) fn stop_signal<C>(
    cancel: C,
    deadline: Option<std::time::Duration>,
) -> impl Future<Output = ()>
where
    C: Future<Output = ()>,
{
    let deadline = deadline.map(|d| Instant::now() + d);
    async move {
        tokio::select! {
            _ = cancel => {}
            _ = deadline_elapsed(deadline) => {}
        }
    }
}

/// Orchestrates one daily-leader run against a stats provider.
///
/// The pipeline holds no per-run state; every call builds its own pacer and
/// accumulators, so one instance can serve many requests.
#[derive(Debug)]
pub struct DailyLeaderPipeline<P> {
    provider: P,
    config: PipelineConfig,
}

impl<P: StatsProvider> DailyLeaderPipeline<P> {
    pub fn new(provider: P, config: PipelineConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Best performance of the local date `days_ago` days before today, as a
    /// sanitized JSON document.
    pub async fn get_player_of_the_day(&self, days_ago: u32) -> Value {
        self.run(GameDate::days_ago(days_ago)).await.to_json()
    }

    pub async fn run(&self, date: GameDate) -> DailyResult {
        self.run_until(date, std::future::pending::<()>()).await
    }

    /// Run for `date`, abandoning outstanding box-score fetches when either
    /// `cancel` resolves or the configured deadline (counted from the start
    /// of the run) passes. Ranking then proceeds over what was collected.
    pub async fn run_until<C>(&self, date: GameDate, cancel: C) -> DailyResult
    where
        C: Future<Output = ()>,
    {
        let stop = stop_signal(cancel, self.config.deadline);
        let pacer = Pacer::new(self.config.pacing);
        let season = date.season();
        info!(%date, %season, "finding player of the day");

        let games = discover_games(&self.provider, &pacer, date, &self.config.phases).await;
        if games.is_empty() {
            info!(%date, "no games found");
            return DailyResult::NoGames { date };
        }
        info!(%date, games = games.len(), "games discovered");

        let fetched =
            fetch_performances(&self.provider, &pacer, &games, self.config.concurrency, stop).await;
        debug!(
            performances = fetched.performances.len(),
            failed = fetched.failed.len(),
            abandoned = fetched.abandoned,
            "box scores scanned"
        );

        let Some(best) = rank(fetched.performances) else {
            info!(%date, "no player data");
            return DailyResult::NoPerformances { date };
        };
        info!(
            player = %best.performance().player,
            score = best.score(),
            game_id = %best.game_id(),
            "best performance found"
        );

        let context = resolve_context(
            &self.provider,
            &pacer,
            best.game_id(),
            best.team(),
            &fetched.team_totals,
        )
        .await;

        DailyResult::Leader {
            date,
            leader: DailyLeader::new(best, context),
        }
    }
}
