//! Pipeline configuration resolved from defaults, environment, and CLI flags.

use std::time::Duration;

use crate::cli::types::SeasonPhase;
use crate::core::{DEFAULT_PACING, DEFAULT_USER_AGENT};
use crate::error::{NbaError, Result};
use crate::nba::{DEFAULT_REQUEST_TIMEOUT, STATS_BASE_URL};

pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
pub const USER_AGENT_ENV_VAR: &str = "NBA_STATS_USER_AGENT";
pub const PACING_ENV_VAR: &str = "NBA_POTD_PACING_MS";
pub const CONCURRENCY_ENV_VAR: &str = "NBA_POTD_CONCURRENCY";
pub const TIMEOUT_ENV_VAR: &str = "NBA_POTD_TIMEOUT_SECS";
pub const DEADLINE_ENV_VAR: &str = "NBA_POTD_DEADLINE_SECS";
pub const PHASES_ENV_VAR: &str = "NBA_POTD_PHASES";

/// Tunables for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Stats API base URL, without trailing slash.
    pub base_url: String,
    pub user_agent: String,
    /// Minimum spacing between any two upstream calls.
    pub pacing: Duration,
    /// Maximum box-score requests in flight. 1 means strictly sequential.
    pub concurrency: usize,
    pub request_timeout: Duration,
    /// Stop fetching after this long and rank what was collected.
    pub deadline: Option<Duration>,
    /// Phases queried during discovery, in query order.
    pub phases: Vec<SeasonPhase>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base_url: STATS_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            pacing: DEFAULT_PACING,
            concurrency: 1,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            deadline: None,
            phases: SeasonPhase::ALL.to_vec(),
        }
    }
}

impl PipelineConfig {
    /// Defaults overridden by whichever `NBA_*` environment variables are set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV_VAR) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(agent) = lookup(USER_AGENT_ENV_VAR) {
            config.user_agent = agent;
        }
        if let Some(ms) = parse_var::<u64>(&lookup, PACING_ENV_VAR)? {
            config.pacing = Duration::from_millis(ms);
        }
        if let Some(n) = parse_var::<usize>(&lookup, CONCURRENCY_ENV_VAR)? {
            config.concurrency = n.max(1);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, TIMEOUT_ENV_VAR)? {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var::<u64>(&lookup, DEADLINE_ENV_VAR)? {
            config.deadline = Some(Duration::from_secs(secs));
        }
        if let Some(raw) = lookup(PHASES_ENV_VAR) {
            config.phases = parse_phases(&raw).map_err(|_| NbaError::InvalidConfig {
                var: PHASES_ENV_VAR.to_string(),
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_phases(mut self, phases: Vec<SeasonPhase>) -> Self {
        if !phases.is_empty() {
            self.phases = phases;
        }
        self
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &str,
) -> Result<Option<T>> {
    match lookup(var) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| NbaError::InvalidConfig {
                var: var.to_string(),
                value: raw,
            }),
    }
}

/// Comma-separated phase list, e.g. `"regular season, playoffs"`.
fn parse_phases(raw: &str) -> Result<Vec<SeasonPhase>> {
    let phases = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse::<SeasonPhase>)
        .collect::<Result<Vec<SeasonPhase>>>()?;
    if phases.is_empty() {
        return Err(NbaError::InvalidPhase {
            phase: raw.to_string(),
        });
    }
    Ok(phases)
}
