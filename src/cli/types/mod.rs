//! Type-safe wrappers and enums for NBA stats data.

pub mod ids;
pub mod phase;
pub mod time;

pub use ids::{GameId, TeamId};
pub use phase::SeasonPhase;
pub use time::{GameDate, Season};
