//! Command implementations for the NBA player-of-the-day CLI

pub mod matches;
pub mod player_of_the_day;
pub mod season;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

use crate::{
    cli::{
        types::{GameDate, SeasonPhase},
        RunOptions,
    },
    config::PipelineConfig,
    core::TeamTable,
    nba::NbaStatsClient,
    Result,
};

/// Parameters shared by the commands that run the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunParams {
    pub days_ago: u32,
    /// Takes precedence over `days_ago`.
    pub date: Option<GameDate>,
    pub as_json: bool,
    pub pacing_ms: Option<u64>,
    pub concurrency: Option<usize>,
    pub deadline_secs: Option<u64>,
    pub phases: Vec<SeasonPhase>,
}

impl RunParams {
    /// The target date, resolved against the local clock when needed.
    pub fn date(&self) -> GameDate {
        self.date
            .unwrap_or_else(|| GameDate::days_ago(self.days_ago))
    }

    /// Layer the CLI flags over an environment-derived configuration.
    pub fn apply(&self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(ms) = self.pacing_ms {
            config = config.with_pacing(Duration::from_millis(ms));
        }
        if let Some(n) = self.concurrency {
            config = config.with_concurrency(n);
        }
        if let Some(secs) = self.deadline_secs {
            config = config.with_deadline(Some(Duration::from_secs(secs)));
        }
        config.with_phases(self.phases.clone())
    }
}

impl From<RunOptions> for RunParams {
    fn from(options: RunOptions) -> Self {
        Self {
            days_ago: options.days_ago,
            date: options.date,
            as_json: options.json,
            pacing_ms: options.pacing_ms,
            concurrency: options.concurrency,
            deadline_secs: options.deadline_secs,
            phases: options.phases,
        }
    }
}

/// Environment configuration with `params` applied on top.
pub fn resolve_config(params: &RunParams) -> Result<PipelineConfig> {
    Ok(params.apply(PipelineConfig::from_env()?))
}

/// Live stats client for `config`.
pub fn build_client(config: &PipelineConfig) -> Result<NbaStatsClient> {
    NbaStatsClient::new(
        config.base_url.clone(),
        config.request_timeout,
        &config.user_agent,
        TeamTable::nba(),
    )
}

/// Counts Ctrl-C presses for a command run.
///
/// The first press stops box-score fetching so the command can finish with
/// what it has; the binary aborts on the second.
#[derive(Debug, Clone)]
pub struct Interrupts {
    presses: Arc<watch::Sender<u32>>,
}

impl Interrupts {
    pub fn new() -> Self {
        Self {
            presses: Arc::new(watch::Sender::new(0)),
        }
    }

    /// Record one press.
    pub fn record(&self) {
        self.presses.send_modify(|n| *n += 1);
    }

    /// Presses recorded so far.
    pub fn count(&self) -> u32 {
        *self.presses.borrow()
    }

    /// Resolve once `presses` presses have been recorded.
    pub async fn reached(&self, presses: u32) {
        let mut rx = self.presses.subscribe();
        if rx.wait_for(|n| *n >= presses).await.is_err() {
            std::future::pending::<()>().await;
        }
    }

    /// Record every Ctrl-C delivered to the process from now on.
    pub fn listen_for_ctrl_c(&self) {
        let interrupts = self.clone();
        tokio::spawn(async move {
            while tokio::signal::ctrl_c().await.is_ok() {
                interrupts.record();
            }
        });
    }
}

impl Default for Interrupts {
    fn default() -> Self {
        Self::new()
    }
}
