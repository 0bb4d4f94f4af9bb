//! Competition phases queried as independent upstream partitions.

use crate::error::NbaError;
use std::fmt;
use std::str::FromStr;

/// A competition segment of the NBA calendar.
///
/// Each phase is a separate partition of the stats provider's game log, so
/// finding every game on a date means asking once per phase.
///
/// # Examples
///
/// ```rust
/// use nba_potd::SeasonPhase;
///
/// assert_eq!(SeasonPhase::PreSeason.as_query_value(), "Pre Season");
/// assert_eq!(SeasonPhase::ALL.len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, clap::ValueEnum)]
pub enum SeasonPhase {
    RegularSeason,
    Playoffs,
    PreSeason,
    InSeasonTournament,
    AllStar,
}

impl SeasonPhase {
    /// Every phase, in the order they are queried by default.
    pub const ALL: [SeasonPhase; 5] = [
        SeasonPhase::RegularSeason,
        SeasonPhase::Playoffs,
        SeasonPhase::PreSeason,
        SeasonPhase::InSeasonTournament,
        SeasonPhase::AllStar,
    ];

    /// Value of the `SeasonType` query parameter for this phase.
    pub fn as_query_value(&self) -> &'static str {
        match self {
            SeasonPhase::RegularSeason => "Regular Season",
            SeasonPhase::Playoffs => "Playoffs",
            SeasonPhase::PreSeason => "Pre Season",
            SeasonPhase::InSeasonTournament => "In Season Tournament",
            SeasonPhase::AllStar => "All Star",
        }
    }
}

impl fmt::Display for SeasonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_query_value())
    }
}

impl FromStr for SeasonPhase {
    type Err = NbaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "regularseason" | "regular" => Ok(SeasonPhase::RegularSeason),
            "playoffs" => Ok(SeasonPhase::Playoffs),
            "preseason" => Ok(SeasonPhase::PreSeason),
            "inseasontournament" | "ist" | "cup" => Ok(SeasonPhase::InSeasonTournament),
            "allstar" => Ok(SeasonPhase::AllStar),
            _ => Err(NbaError::InvalidPhase {
                phase: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_query_values() {
        assert_eq!(SeasonPhase::RegularSeason.as_query_value(), "Regular Season");
        assert_eq!(SeasonPhase::Playoffs.as_query_value(), "Playoffs");
        assert_eq!(SeasonPhase::PreSeason.as_query_value(), "Pre Season");
        assert_eq!(
            SeasonPhase::InSeasonTournament.as_query_value(),
            "In Season Tournament"
        );
        assert_eq!(SeasonPhase::AllStar.as_query_value(), "All Star");
    }

    #[test]
    fn test_phase_round_trips_through_display() {
        for phase in SeasonPhase::ALL {
            assert_eq!(phase.to_string().parse::<SeasonPhase>().unwrap(), phase);
        }
    }

    #[test]
    fn test_phase_aliases() {
        assert_eq!("IST".parse::<SeasonPhase>().unwrap(), SeasonPhase::InSeasonTournament);
        assert_eq!("all-star".parse::<SeasonPhase>().unwrap(), SeasonPhase::AllStar);
        assert_eq!("pre_season".parse::<SeasonPhase>().unwrap(), SeasonPhase::PreSeason);
        assert!("Summer League".parse::<SeasonPhase>().is_err());
    }
}
