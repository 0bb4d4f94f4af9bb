//! The NBA stats provider: wire types, parsing, and the HTTP client.

pub mod http;
pub mod provider;
pub mod types;

pub use http::{NbaStatsClient, DEFAULT_REQUEST_TIMEOUT, STATS_BASE_URL};
pub use provider::StatsProvider;
pub use types::{BoxScore, GameSummary, PlayerLine, PlayerPerformance, TeamGameTotal};
