use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::{self, parse_utc};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::{Endpoint, Fixture};
use crate::table::Table;

#[derive(Debug, Deserialize)]
struct FixtureEntry {
    fixture: FixtureInfo,
    league: FixtureLeague,
    teams: FixtureTeams,
}

#[derive(Debug, Deserialize)]
struct FixtureInfo {
    id: u32,
    /// RFC 3339 kickoff; the separate `timezone` field is not read.
    date: String,
    venue: Venue,
}

#[derive(Debug, Deserialize)]
struct Venue {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    city: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FixtureLeague {
    season: u16,
    round: String,
}

#[derive(Debug, Deserialize)]
struct FixtureTeams {
    home: TeamRef,
    away: TeamRef,
}

#[derive(Debug, Deserialize)]
struct TeamRef {
    id: u32,
    name: String,
}

#[instrument(skip(client, config))]
pub(crate) async fn get_fixtures(
    client: &reqwest::Client,
    config: &ApiConfig,
    league_id: u32,
) -> Result<Table<Fixture>> {
    let endpoint = Endpoint::Fixtures.to_string();
    let query = [
        ("league", league_id.to_string()),
        ("next", config.fixtures_next.to_string()),
    ];
    let Some(entries) =
        api::get_response::<FixtureEntry>(client, config, &endpoint, &query).await?
    else {
        return Ok(Table::empty());
    };
    let fixtures = entries
        .into_iter()
        .map(parse_fixture)
        .collect::<Result<Table<_>>>()?;
    debug!(count = fixtures.len(), league_id, "parsed fixtures");
    Ok(fixtures)
}

fn parse_fixture(entry: FixtureEntry) -> Result<Fixture> {
    Ok(Fixture {
        id: entry.fixture.id,
        date: parse_utc(&entry.fixture.date)?,
        venue: entry.fixture.venue.name,
        city: entry.fixture.venue.city,
        season: entry.league.season,
        round: entry.league.round,
        home_id: entry.teams.home.id,
        home_name: entry.teams.home.name,
        away_id: entry.teams.away.id,
        away_name: entry.teams.away.name,
    })
}
