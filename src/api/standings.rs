use itertools::Itertools;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api;
use crate::config::ApiConfig;
use crate::error::{FootballError, Result};
use crate::model::{Endpoint, SplitStats, Standing};
use crate::table::Table;

#[derive(Debug, Deserialize)]
struct StandingsEntry {
    league: StandingsLeague,
}

#[derive(Debug, Deserialize)]
struct StandingsLeague {
    id: u32,
    season: u16,
    /// One list per group; ordinary leagues have a single group.
    standings: Vec<Vec<TeamStanding>>,
}

#[derive(Debug, Deserialize)]
struct TeamStanding {
    rank: u16,
    team: TeamRef,
    points: i32,
    #[serde(rename = "goalsDiff")]
    goals_diff: i32,
    #[serde(default)]
    form: Option<String>,
    all: SplitBlock,
    home: SplitBlock,
    away: SplitBlock,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct SplitBlock {
    played: u32,
    win: u32,
    draw: u32,
    lose: u32,
    goals: Goals,
}

#[derive(Debug, Deserialize)]
struct Goals {
    #[serde(rename = "for")]
    scored: u32,
    against: u32,
}

impl From<SplitBlock> for SplitStats {
    fn from(block: SplitBlock) -> Self {
        Self {
            played: block.played,
            win: block.win,
            draw: block.draw,
            lose: block.lose,
            goals_for: block.goals.scored,
            goals_against: block.goals.against,
        }
    }
}

impl From<TeamStanding> for Standing {
    fn from(row: TeamStanding) -> Self {
        Self {
            rank: row.rank,
            team_id: row.team.id,
            team_name: row.team.name,
            points: row.points,
            goals_diff: row.goals_diff,
            form: row.form,
            all: row.all.into(),
            home: row.home.into(),
            away: row.away.into(),
        }
    }
}

#[instrument(skip(client, config))]
pub(crate) async fn get_standings(
    client: &reqwest::Client,
    config: &ApiConfig,
    season: u16,
    league_id: Option<u32>,
    team_id: Option<u32>,
) -> Result<Table<Standing>> {
    let endpoint = Endpoint::Standings.to_string();
    let mut query = vec![("season", season.to_string())];
    if let Some(league_id) = league_id {
        query.push(("league", league_id.to_string()));
    }
    if let Some(team_id) = team_id {
        query.push(("team", team_id.to_string()));
    }

    let Some(entries) =
        api::get_response::<StandingsEntry>(client, config, &endpoint, &query).await?
    else {
        return Ok(Table::empty());
    };
    let standings = parse_standings(&endpoint, entries)?;
    debug!(count = standings.len(), season, "parsed standings");
    Ok(standings)
}

/// Pick the single league and its single group, then flatten each team's row.
fn parse_standings(endpoint: &str, entries: Vec<StandingsEntry>) -> Result<Table<Standing>> {
    if entries.is_empty() {
        return Ok(Table::empty());
    }
    let league = entries
        .into_iter()
        .exactly_one()
        .map_err(|rest| FootballError::UnexpectedShape {
            endpoint: endpoint.to_owned(),
            detail: format!("expected exactly one league, found {}", rest.count()),
        })?
        .league;

    let group = league
        .standings
        .into_iter()
        .exactly_one()
        .map_err(|rest| FootballError::UnexpectedShape {
            endpoint: endpoint.to_owned(),
            detail: format!(
                "expected exactly one standings group for league {} season {}, found {}",
                league.id,
                league.season,
                rest.count()
            ),
        })?;

    Ok(group.into_iter().map(Standing::from).collect())
}
