//! Season command implementation

use crate::{GameDate, Season};

/// Handle the season command: print the season `date` (default today) falls in.
pub fn handle_season(date: Option<GameDate>) {
    println!("{}", season_of(date)); // tarpaulin::skip
}

pub fn season_of(date: Option<GameDate>) -> Season {
    date.unwrap_or_else(|| GameDate::days_ago(0)).season()
}
