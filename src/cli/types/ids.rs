//! ID types for NBA stats data.

use crate::error::{NbaError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for NBA game identifiers.
///
/// Game ids are opaque strings such as `"0022400061"`. Ordering is plain
/// string ordering, which for the upstream's zero-padded ids matches the
/// order games were scheduled in.
///
/// # Examples
///
/// ```rust
/// use nba_potd::GameId;
///
/// let game_id = GameId::new("0022400061");
/// assert_eq!(game_id.as_str(), "0022400061");
/// assert_eq!(game_id.to_string(), "0022400061");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl GameId {
    /// Create a new GameId from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameId {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().to_string()))
    }
}

/// Type-safe wrapper for NBA team ids (e.g. `1610612747`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_id_ordering_is_lexicographic() {
        let mut ids = vec![
            GameId::new("0022400063"),
            GameId::new("0012400001"),
            GameId::new("0022400061"),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                GameId::new("0012400001"),
                GameId::new("0022400061"),
                GameId::new("0022400063"),
            ]
        );
    }

    #[test]
    fn test_game_id_from_str_trims() {
        let id: GameId = " 0042300405 ".parse().unwrap();
        assert_eq!(id.as_str(), "0042300405");
    }

    #[test]
    fn test_team_id_display() {
        assert_eq!(TeamId::new(1610612747).to_string(), "1610612747");
        assert_eq!(TeamId::new(1610612747).as_u32(), 1610612747);
    }
}
