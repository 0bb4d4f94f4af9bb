//! Time-related types for NBA seasons and game dates.

use crate::error::{NbaError, Result};
use chrono::{Datelike, Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Month in which a new NBA season starts.
const SEASON_START_MONTH: u32 = 10;

/// Type-safe wrapper for NBA seasons, identified by their starting year.
///
/// Displays in the upstream `"YYYY-YY"` form.
///
/// # Examples
///
/// ```rust
/// use nba_potd::{GameDate, Season};
///
/// let date: GameDate = "2024-11-01".parse().unwrap();
/// assert_eq!(Season::for_date(date.as_naive()).to_string(), "2024-25");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub i32);

impl Season {
    pub fn new(start_year: i32) -> Self {
        Self(start_year)
    }

    pub fn start_year(&self) -> i32 {
        self.0
    }

    /// Season a calendar date belongs to.
    ///
    /// October through December belong to the season starting that year;
    /// January through September belong to the season that started the
    /// previous year. No timezone handling happens here.
    pub fn for_date(date: NaiveDate) -> Self {
        if date.month() >= SEASON_START_MONTH {
            Self(date.year())
        } else {
            Self(date.year() - 1)
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.0, (self.0 + 1).rem_euclid(100))
    }
}

impl FromStr for Season {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NbaError::InvalidSeason {
            value: s.to_string(),
        };
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        if start.len() != 4 || end.len() != 2 {
            return Err(invalid());
        }
        let start: i32 = start.parse().map_err(|_| invalid())?;
        let end: i32 = end.parse().map_err(|_| invalid())?;
        if (start + 1).rem_euclid(100) != end {
            return Err(invalid());
        }
        Ok(Self(start))
    }
}

/// Type-safe wrapper for the calendar date games are looked up on.
///
/// Displays as `MM/DD/YYYY`, the convention used both by the stats
/// provider's query parameters and by the output documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GameDate(pub NaiveDate);

impl GameDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// The local calendar date `days` days before today.
    pub fn days_ago(days: u32) -> Self {
        Self::days_before(Local::now().date_naive(), days)
    }

    /// `days` days before `today`; saturates at the earliest representable date.
    pub fn days_before(today: NaiveDate, days: u32) -> Self {
        Self(
            today
                .checked_sub_days(Days::new(u64::from(days)))
                .unwrap_or(NaiveDate::MIN),
        )
    }

    pub fn season(&self) -> Season {
        Season::for_date(self.0)
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%m/%d/%Y"))
    }
}

impl FromStr for GameDate {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(s, "%m/%d/%Y"))
            .map(Self)
            .map_err(|_| NbaError::InvalidDate {
                value: s.to_string(),
            })
    }
}
