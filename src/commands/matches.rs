//! Matches-of-the-day command implementation

use std::fmt::Write as _;
use std::future::Future;

use crate::{
    config::PipelineConfig,
    nba::StatsProvider,
    pipeline::{matches_of_the_day, MatchesReport},
    Result,
};

use super::{build_client, resolve_config, RunParams};

/// Handle the matches command against the live stats API.
pub async fn handle_matches<C>(params: RunParams, cancel: C) -> Result<()>
where
    C: Future<Output = ()>,
{
    let config = resolve_config(&params)?;
    // tarpaulin::skip - HTTP call, tested via wiremock integration tests
    let client = build_client(&config)?;

    let output = matches_output(&client, &config, &params, cancel).await?;
    println!("{}", output); // tarpaulin::skip
    Ok(())
}

pub async fn matches_output<P, C>(
    provider: &P,
    config: &PipelineConfig,
    params: &RunParams,
    cancel: C,
) -> Result<String>
where
    P: StatsProvider + ?Sized,
    C: Future<Output = ()>,
{
    let report = matches_of_the_day(provider, config, params.date(), cancel).await;
    render(&report, params.as_json)
}

/// Pretty JSON document, or one line per game.
pub fn render(report: &MatchesReport, as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(&report.to_json())?);
    }
    if report.games.is_empty() {
        return Ok(format!("No NBA games were played on {}.", report.date));
    }

    let mut out = format!("Games on {}:", report.date);
    for game in &report.games {
        let top = game.players.iter().max_by_key(|p| p.points);
        // writing to a String cannot fail
        let _ = write!(
            out,
            "\n  {}  {}  {}",
            game.game_id, game.matchup, game.final_score
        );
        if let Some(top) = top {
            let _ = write!(out, "  (top scorer: {} {} PTS)", top.name, top.points);
        }
    }
    Ok(out)
}
