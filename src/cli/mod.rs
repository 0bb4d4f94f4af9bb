//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use types::{GameDate, SeasonPhase};

/// Run options shared between the commands that query the stats API.
#[derive(Debug, Args)]
pub struct RunOptions {
    /// How many days before today (local time) to look at.
    #[clap(long, short = 'd', default_value_t = 1)]
    pub days_ago: u32,

    /// Exact date instead of `--days-ago` (YYYY-MM-DD or MM/DD/YYYY).
    #[clap(long, conflicts_with = "days_ago")]
    pub date: Option<GameDate>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,

    /// Log every upstream call and per-game outcome to stderr.
    #[clap(long, short)]
    pub verbose: bool,

    /// Minimum milliseconds between upstream calls (or set `NBA_POTD_PACING_MS`).
    #[clap(long)]
    pub pacing_ms: Option<u64>,

    /// Box-score requests allowed in flight (or set `NBA_POTD_CONCURRENCY`).
    #[clap(long)]
    pub concurrency: Option<usize>,

    /// Stop fetching after this many seconds and rank what was collected.
    #[clap(long)]
    pub deadline_secs: Option<u64>,

    /// Restrict discovery to these phases (repeatable): `--phase playoffs`.
    #[clap(long = "phase")]
    pub phases: Vec<SeasonPhase>,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Find the best individual performance of a date.
    ///
    /// Lists the date's games across every season phase, scans each box
    /// score, and ranks players by points + rebounds + assists.
    PlayerOfTheDay {
        #[clap(flatten)]
        options: RunOptions,
    },

    /// List every game of a date with its final score and box score.
    Matches {
        #[clap(flatten)]
        options: RunOptions,
    },

    /// Print the season label (e.g. 2024-25) a date belongs to.
    Season {
        /// Date to classify; defaults to today.
        #[clap(long)]
        date: Option<GameDate>,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-potd", about = "NBA player of the day")]
pub struct NbaPotd {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the NBA stats API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}

impl NbaPotd {
    /// Whether the chosen command asked for verbose logging.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Commands::Get { cmd } => match cmd {
                GetCmd::PlayerOfTheDay { options } | GetCmd::Matches { options } => {
                    options.verbose
                }
                GetCmd::Season { .. } => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> NbaPotd {
        NbaPotd::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let app = parse(&["nba-potd", "get", "player-of-the-day"]);
        let Commands::Get {
            cmd: GetCmd::PlayerOfTheDay { options },
        } = app.command
        else {
            panic!("Expected player-of-the-day");
        };
        assert_eq!(options.days_ago, 1);
        assert!(options.date.is_none());
        assert!(!options.json);
        assert!(options.phases.is_empty());
        assert!(options.pacing_ms.is_none());
    }

    #[test]
    fn test_all_options() {
        let app = parse(&[
            "nba-potd",
            "get",
            "matches",
            "--date",
            "2025-03-01",
            "--json",
            "-v",
            "--pacing-ms",
            "100",
            "--concurrency",
            "3",
            "--deadline-secs",
            "45",
            "--phase",
            "playoffs",
            "--phase",
            "in-season-tournament",
        ]);
        assert!(app.verbose());
        let Commands::Get {
            cmd: GetCmd::Matches { options },
        } = app.command
        else {
            panic!("Expected matches");
        };
        assert_eq!(options.date.unwrap().to_string(), "03/01/2025");
        assert!(options.json);
        assert_eq!(options.pacing_ms, Some(100));
        assert_eq!(options.concurrency, Some(3));
        assert_eq!(options.deadline_secs, Some(45));
        assert_eq!(
            options.phases,
            vec![SeasonPhase::Playoffs, SeasonPhase::InSeasonTournament]
        );
    }

    #[test]
    fn test_date_conflicts_with_days_ago() {
        let result = NbaPotd::try_parse_from([
            "nba-potd",
            "get",
            "player-of-the-day",
            "--days-ago",
            "2",
            "--date",
            "2025-03-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_date_rejected() {
        let result =
            NbaPotd::try_parse_from(["nba-potd", "get", "season", "--date", "March first"]);
        assert!(result.is_err());
    }
}
