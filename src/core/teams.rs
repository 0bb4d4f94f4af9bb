//! Team id to abbreviation lookup.

use std::collections::BTreeMap;

use crate::cli::types::TeamId;

/// Immutable team-id → abbreviation table.
///
/// Built once at startup and passed to whatever needs it, so tests can use
/// synthetic team sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamTable {
    abbreviations: BTreeMap<TeamId, String>,
}

impl TeamTable {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (TeamId, S)>,
        S: Into<String>,
    {
        Self {
            abbreviations: entries.into_iter().map(|(id, abbr)| (id, abbr.into())).collect(),
        }
    }

    /// The thirty NBA franchises.
    pub fn nba() -> Self {
        Self::new([
            (TeamId(1610612737), "ATL"),
            (TeamId(1610612738), "BOS"),
            (TeamId(1610612751), "BKN"),
            (TeamId(1610612766), "CHA"),
            (TeamId(1610612741), "CHI"),
            (TeamId(1610612739), "CLE"),
            (TeamId(1610612742), "DAL"),
            (TeamId(1610612743), "DEN"),
            (TeamId(1610612765), "DET"),
            (TeamId(1610612744), "GSW"),
            (TeamId(1610612745), "HOU"),
            (TeamId(1610612754), "IND"),
            (TeamId(1610612746), "LAC"),
            (TeamId(1610612747), "LAL"),
            (TeamId(1610612763), "MEM"),
            (TeamId(1610612748), "MIA"),
            (TeamId(1610612749), "MIL"),
            (TeamId(1610612750), "MIN"),
            (TeamId(1610612740), "NOP"),
            (TeamId(1610612752), "NYK"),
            (TeamId(1610612760), "OKC"),
            (TeamId(1610612753), "ORL"),
            (TeamId(1610612755), "PHI"),
            (TeamId(1610612756), "PHX"),
            (TeamId(1610612757), "POR"),
            (TeamId(1610612758), "SAC"),
            (TeamId(1610612759), "SAS"),
            (TeamId(1610612761), "TOR"),
            (TeamId(1610612762), "UTA"),
            (TeamId(1610612764), "WAS"),
        ])
    }

    pub fn abbreviation(&self, id: TeamId) -> Option<&str> {
        self.abbreviations.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abbreviations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nba_table_has_thirty_unique_teams() {
        let table = TeamTable::nba();
        assert_eq!(table.len(), 30);
        assert_eq!(table.abbreviation(TeamId(1610612747)), Some("LAL"));
        assert_eq!(table.abbreviation(TeamId(1610612738)), Some("BOS"));
        assert_eq!(table.abbreviation(TeamId(1)), None);
    }

    #[test]
    fn test_synthetic_table() {
        let table = TeamTable::new([(TeamId(1), "AAA"), (TeamId(2), "BBB")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.abbreviation(TeamId(2)), Some("BBB"));
        assert!(TeamTable::default().is_empty());
    }
}
