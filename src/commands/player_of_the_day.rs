//! Player-of-the-day command implementation

use std::future::Future;

use crate::{
    nba::StatsProvider,
    pipeline::{DailyLeaderPipeline, DailyResult},
    Result,
};

use super::{build_client, resolve_config, RunParams};

/// Handle the player-of-the-day command against the live stats API.
pub async fn handle_player_of_the_day<C>(params: RunParams, cancel: C) -> Result<()>
where
    C: Future<Output = ()>,
{
    let config = resolve_config(&params)?;
    // tarpaulin::skip - HTTP call, tested via wiremock integration tests
    let client = build_client(&config)?;
    let pipeline = DailyLeaderPipeline::new(client, config);

    let output = player_of_the_day_output(&pipeline, &params, cancel).await?;
    println!("{}", output); // tarpaulin::skip
    Ok(())
}

/// Run the pipeline and render its result the way the command prints it.
pub async fn player_of_the_day_output<P, C>(
    pipeline: &DailyLeaderPipeline<P>,
    params: &RunParams,
    cancel: C,
) -> Result<String>
where
    P: StatsProvider,
    C: Future<Output = ()>,
{
    let result = pipeline.run_until(params.date(), cancel).await;
    render(&result, params.as_json)
}

/// Pretty JSON document, or a short human-readable summary.
pub fn render(result: &DailyResult, as_json: bool) -> Result<String> {
    if as_json {
        return Ok(serde_json::to_string_pretty(&result.to_json())?);
    }

    let Some(leader) = result.leader() else {
        return Ok(result.message().unwrap_or_default());
    };
    Ok(format!(
        "Player of the day for {}: {} ({})\n  {} PTS, {} REB, {} AST (score {})\n  Opponent: {}\n  Final score: {}",
        result.date(),
        leader.player,
        leader.team,
        leader.points,
        leader.rebounds,
        leader.assists,
        leader.score,
        leader.context.opponent(),
        leader.context.final_score(),
    ))
}
