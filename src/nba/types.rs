//! Upstream wire shapes and the typed records parsed out of them.
//!
//! The stats provider answers every endpoint with header-indexed tables
//! (`resultSets[].headers` + `rowSet`). Each endpoint gets exactly one
//! parsing function here; nothing outside this module indexes raw rows.

use crate::cli::types::{GameId, TeamId};
use crate::core::TeamTable;
use crate::error::{NbaError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;


/// One named table of an upstream response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultSet {
    pub name: String,
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Index of a required column.
    pub fn column(&self, column: &str) -> Result<usize> {
        self.optional_column(column)
            .ok_or_else(|| NbaError::MissingColumn {
                set: self.name.clone(),
                column: column.to_string(),
            })
    }

    pub fn optional_column(&self, column: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == column)
    }

    pub fn is_empty(&self) -> bool {
        self.row_set.is_empty()
    }
}

/// Top-level envelope shared by the stats endpoints.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets", alias = "resultSet", deserialize_with = "one_or_many")]
    pub result_sets: Vec<ResultSet>,
}

/// Some endpoints send a single `resultSet` object instead of a list.
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<ResultSet>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        Many(Vec<ResultSet>),
        One(ResultSet),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::Many(sets) => sets,
        OneOrMany::One(set) => vec![set],
    })
}

impl StatsResponse {
    pub fn result_set(&self, name: &str) -> Option<&ResultSet> {
        self.result_sets.iter().find(|rs| rs.name == name)
    }

    pub fn require(&self, name: &str) -> Result<&ResultSet> {
        self.result_set(name)
            .ok_or_else(|| NbaError::MissingResultSet {
                name: name.to_string(),
            })
    }
}

/// A counting stat, defaulting to 0 when missing or unparseable.
pub fn stat_or_zero(row: &[Value], idx: usize) -> i64 {
    optional_int(row, idx).unwrap_or(0)
}

fn optional_int(row: &[Value], idx: usize) -> Option<i64> {
    let truncate = |f: f64| f.is_finite().then(|| f.trunc() as i64);
    match row.get(idx)? {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

fn optional_float(row: &[Value], idx: usize) -> Option<f64> {
    match row.get(idx)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn optional_text(row: &[Value], idx: usize) -> Option<String> {
    match row.get(idx)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn optional_team_id(row: &[Value], idx: usize) -> Option<TeamId> {
    optional_int(row, idx)
        .and_then(|id| u32::try_from(id).ok())
        .map(TeamId)
}

/// One player's individual line for one game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerLine {
    pub name: String,
    pub team: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub fg3m: i64,
    pub fgm: i64,
    pub fg3_pct: Option<f64>,
    pub fg_pct: Option<f64>,
    pub plus_minus: Option<f64>,
}

impl PlayerLine {
    /// The ranking view of this line.
    pub fn performance(&self, game_id: &GameId) -> PlayerPerformance {
        PlayerPerformance {
            player: self.name.clone(),
            team: self.team.clone(),
            points: self.points,
            rebounds: self.rebounds,
            assists: self.assists,
            game_id: game_id.clone(),
        }
    }
}

/// A single player's scoring contribution in one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPerformance {
    pub player: String,
    pub team: String,
    pub points: i64,
    pub rebounds: i64,
    pub assists: i64,
    pub game_id: GameId,
}

impl PlayerPerformance {
    /// Points + rebounds + assists. Negative inputs pass through unmodified.
    pub fn composite_score(&self) -> i64 {
        self.points + self.rebounds + self.assists
    }
}

/// One team's final total in one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamGameTotal {
    pub team_id: Option<TeamId>,
    pub abbreviation: String,
    pub points: Option<i64>,
}

/// Everything the box-score endpoint returned for one game.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxScore {
    pub game_id: GameId,
    pub players: Vec<PlayerLine>,
    /// `None` when the response carried no team table.
    pub team_totals: Option<Vec<TeamGameTotal>>,
}

impl BoxScore {
    pub fn performances(&self) -> impl Iterator<Item = PlayerPerformance> + '_ {
        self.players.iter().map(|line| line.performance(&self.game_id))
    }
}

/// Home and away totals of one game, as reported by the summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub game_id: GameId,
    pub home: TeamGameTotal,
    pub away: TeamGameTotal,
}

/// Game ids listed in a `LeagueGameLog` response, first occurrence order.
pub fn parse_game_ids(response: &StatsResponse) -> Result<Vec<GameId>> {
    let log = match response.result_set("LeagueGameLog") {
        Some(set) => set,
        None => response
            .result_sets
            .first()
            .ok_or_else(|| NbaError::MissingResultSet {
                name: "LeagueGameLog".to_string(),
            })?,
    };
    if log.is_empty() {
        return Ok(Vec::new());
    }

    let idx = log.column("GAME_ID")?;
    let mut ids: Vec<GameId> = Vec::new();
    for row in &log.row_set {
        if let Some(id) = optional_text(row, idx).map(GameId) {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
    }
    Ok(ids)
}

/// Parse a `boxscoretraditionalv2` response.
///
/// A missing or empty `PlayerStats` table yields no players. Required
/// columns missing from a non-empty table are a parse error for the game.
pub fn parse_box_score(
    game_id: &GameId,
    response: &StatsResponse,
    teams: &TeamTable,
) -> Result<BoxScore> {
    let players = match response.result_set("PlayerStats") {
        Some(set) if !set.is_empty() => parse_player_lines(set)?,
        _ => Vec::new(),
    };

    let team_totals = match response.result_set("TeamStats") {
        Some(set) if !set.is_empty() => Some(parse_team_totals(set, teams)?),
        _ => None,
    };

    Ok(BoxScore {
        game_id: game_id.clone(),
        players,
        team_totals,
    })
}

fn parse_player_lines(set: &ResultSet) -> Result<Vec<PlayerLine>> {
    let name = set.column("PLAYER_NAME")?;
    let team = set.column("TEAM_ABBREVIATION")?;
    let pts = set.column("PTS")?;
    let reb = set.column("REB")?;
    let ast = set.column("AST")?;
    let stl = set.optional_column("STL");
    let blk = set.optional_column("BLK");
    let fg3m = set.optional_column("FG3M");
    let fgm = set.optional_column("FGM");
    let fg3_pct = set.optional_column("FG3_PCT");
    let fg_pct = set.optional_column("FG_PCT");
    let plus_minus = set.optional_column("PLUS_MINUS");

    let count = |row: &[Value], idx: Option<usize>| idx.map_or(0, |i| stat_or_zero(row, i));
    let ratio = |row: &[Value], idx: Option<usize>| idx.and_then(|i| optional_float(row, i));

    Ok(set
        .row_set
        .iter()
        .map(|row| PlayerLine {
            name: optional_text(row, name).unwrap_or_default(),
            team: optional_text(row, team).unwrap_or_default(),
            points: stat_or_zero(row, pts),
            rebounds: stat_or_zero(row, reb),
            assists: stat_or_zero(row, ast),
            steals: count(row, stl),
            blocks: count(row, blk),
            fg3m: count(row, fg3m),
            fgm: count(row, fgm),
            fg3_pct: ratio(row, fg3_pct),
            fg_pct: ratio(row, fg_pct),
            plus_minus: ratio(row, plus_minus),
        })
        .collect())
}

/// Team rows keyed by `TEAM_ID`, with the abbreviation falling back to the
/// team table when the row leaves it blank. Rows with no usable
/// abbreviation are dropped.
fn parse_team_totals(set: &ResultSet, teams: &TeamTable) -> Result<Vec<TeamGameTotal>> {
    let id = set.column("TEAM_ID")?;
    let abbr = set.column("TEAM_ABBREVIATION")?;
    let pts = set.column("PTS")?;

    Ok(set
        .row_set
        .iter()
        .filter_map(|row| team_total(row, id, abbr, pts, teams))
        .collect())
}

fn team_total(
    row: &[Value],
    id: usize,
    abbr: usize,
    pts: usize,
    teams: &TeamTable,
) -> Option<TeamGameTotal> {
    let team_id = optional_team_id(row, id);
    let abbreviation = optional_text(row, abbr).or_else(|| {
        team_id
            .and_then(|tid| teams.abbreviation(tid))
            .map(str::to_string)
    })?;
    Some(TeamGameTotal {
        team_id,
        abbreviation,
        points: optional_int(row, pts),
    })
}

/// Parse a `boxscoresummaryv2` response into home/away totals.
///
/// Fails with [`NbaError::IncompleteSummary`] unless both the home and the
/// visiting team resolve through the line score.
pub fn parse_game_summary(
    game_id: &GameId,
    response: &StatsResponse,
    teams: &TeamTable,
) -> Result<GameSummary> {
    let incomplete = |reason: &str| NbaError::IncompleteSummary {
        game_id: game_id.to_string(),
        reason: reason.to_string(),
    };

    let summary = response.require("GameSummary")?;
    let home_idx = summary.column("HOME_TEAM_ID")?;
    let away_idx = summary.column("VISITOR_TEAM_ID")?;
    let first = summary
        .row_set
        .first()
        .ok_or_else(|| incomplete("game summary has no rows"))?;
    let home_id = optional_team_id(first, home_idx).ok_or_else(|| incomplete("no home team id"))?;
    let away_id =
        optional_team_id(first, away_idx).ok_or_else(|| incomplete("no visiting team id"))?;

    let line_score = response.require("LineScore")?;
    let id = line_score.column("TEAM_ID")?;
    let abbr = line_score.column("TEAM_ABBREVIATION")?;
    let pts = line_score.column("PTS")?;

    let mut by_team: BTreeMap<TeamId, TeamGameTotal> = BTreeMap::new();
    for row in &line_score.row_set {
        if let Some(total) = team_total(row, id, abbr, pts, teams) {
            if let Some(tid) = total.team_id {
                by_team.insert(tid, total);
            }
        }
    }

    let home = by_team
        .remove(&home_id)
        .ok_or_else(|| incomplete("home team missing from line score"))?;
    let away = by_team
        .remove(&away_id)
        .ok_or_else(|| incomplete("visiting team missing from line score"))?;

    Ok(GameSummary {
        game_id: game_id.clone(),
        home,
        away,
    })
}
