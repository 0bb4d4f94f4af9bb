use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::cli::types::{GameDate, GameId, Season, SeasonPhase};
use crate::core::{default_header_map, TeamTable};
use crate::nba::provider::StatsProvider;
use crate::nba::types::{
    parse_box_score, parse_game_ids, parse_game_summary, BoxScore, GameSummary, StatsResponse,
};
use crate::Result;


/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

/// Default per-request timeout; the stats API is slow and sometimes hangs.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for stats.nba.com.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    base_url: String,
    teams: TeamTable,
}

impl NbaStatsClient {
    pub fn new(
        base_url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
        teams: TeamTable,
    ) -> Result<Self> {
        let client = Client::builder()
            .default_headers(default_header_map(user_agent)?)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            teams,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_stats(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsResponse> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, ?params, "stats request");

        let res = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<StatsResponse>()
            .await?;

        Ok(res)
    }
}

#[async_trait]
impl StatsProvider for NbaStatsClient {
    async fn list_games(
        &self,
        season: Season,
        date: GameDate,
        phase: SeasonPhase,
    ) -> Result<Vec<GameId>> {
        let params = [
            ("Counter", "1000".to_string()),
            ("DateFrom", date.to_string()),
            ("DateTo", date.to_string()),
            ("Direction", "ASC".to_string()),
            ("LeagueID", "00".to_string()),
            ("PlayerOrTeam", "T".to_string()),
            ("Season", season.to_string()),
            ("SeasonType", phase.as_query_value().to_string()),
            ("Sorter", "DATE".to_string()),
        ];
        let response = self.get_stats("leaguegamelog", &params).await?;
        parse_game_ids(&response)
    }

    async fn box_score(&self, game_id: &GameId) -> Result<BoxScore> {
        let params = [
            ("GameID", game_id.to_string()),
            ("StartPeriod", "0".to_string()),
            ("EndPeriod", "10".to_string()),
            ("StartRange", "0".to_string()),
            ("EndRange", "28800".to_string()),
            ("RangeType", "0".to_string()),
        ];
        let response = self.get_stats("boxscoretraditionalv2", &params).await?;
        parse_box_score(game_id, &response, &self.teams)
    }

    async fn game_summary(&self, game_id: &GameId) -> Result<GameSummary> {
        let params = [("GameID", game_id.to_string())];
        let response = self.get_stats("boxscoresummaryv2", &params).await?;
        parse_game_summary(game_id, &response, &self.teams)
    }
}
