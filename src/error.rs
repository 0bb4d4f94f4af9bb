//! Error types for the NBA player-of-the-day pipeline

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, NbaError>;

#[derive(Error, Debug)]
pub enum NbaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Stats response has no '{name}' result set")]
    MissingResultSet { name: String },

    #[error("Result set '{set}' has no '{column}' column")]
    MissingColumn { set: String, column: String },

    #[error("Game summary for {game_id} is incomplete: {reason}")]
    IncompleteSummary { game_id: String, reason: String },

    #[error("Invalid season: {value} (expected YYYY-YY)")]
    InvalidSeason { value: String },

    #[error("Invalid date: {value} (expected YYYY-MM-DD or MM/DD/YYYY)")]
    InvalidDate { value: String },

    #[error("Invalid season phase: {phase}")]
    InvalidPhase { phase: String },

    #[error("Invalid value for {var}: {value}")]
    InvalidConfig { var: String, value: String },
}
