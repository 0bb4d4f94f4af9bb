//! NBA Player of the Day Library
//!
//! Finds the single best individual performance across every NBA game played
//! on a date, using the public stats.nba.com endpoints, and reports it with
//! the opponent and final score of the game it came from.
//!
//! ## Features
//!
//! - **Game Discovery**: Union of the game logs of every competition phase
//! - **Failure Isolation**: A broken box score never drops the other games
//! - **Deterministic Ranking**: Points + rebounds + assists, ties go to the first seen
//! - **Two-tier Context**: Game summary first, captured team totals as fallback
//! - **Safe Output**: Non-finite numbers are replaced before serialization
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_potd::pipeline::DailyLeaderPipeline;
//! use nba_potd::{NbaStatsClient, PipelineConfig, TeamTable};
//!
//! # async fn example() -> nba_potd::Result<()> {
//! let config = PipelineConfig::from_env()?;
//! let client = NbaStatsClient::new(
//!     config.base_url.clone(),
//!     config.request_timeout,
//!     &config.user_agent,
//!     TeamTable::nba(),
//! )?;
//! let result = DailyLeaderPipeline::new(client, config)
//!     .run("2025-03-01".parse()?)
//!     .await;
//! println!("{}", result.to_json());
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Slow down or speed up upstream calls without passing flags every time:
//! ```bash
//! export NBA_POTD_PACING_MS=1000
//! export NBA_POTD_CONCURRENCY=2
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod nba;
pub mod pipeline;

// Re-export commonly used types
pub use cli::types::{GameDate, GameId, Season, SeasonPhase, TeamId};
pub use config::PipelineConfig;
pub use core::TeamTable;
pub use error::{NbaError, Result};
pub use nba::{NbaStatsClient, StatsProvider};
