//! Core utilities shared by the pipeline and the commands
//!
//! - `http`: request headers for the stats provider
//! - `pacing`: shared fixed-interval limiter for upstream calls
//! - `sanitize`: serialization-safe output documents
//! - `teams`: team id → abbreviation lookup

pub mod http;
pub mod pacing;
pub mod sanitize;
pub mod teams;

// Re-export commonly used items for convenience
pub use http::{default_header_map, DEFAULT_USER_AGENT};
pub use pacing::{Pacer, DEFAULT_PACING};
pub use sanitize::{sanitize, OutputValue, NIL_SENTINEL};
pub use teams::TeamTable;
