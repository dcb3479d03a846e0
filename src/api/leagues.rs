use serde::Deserialize;
use tracing::{debug, instrument};

use crate::api::{self, parse_date};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::{Endpoint, League};
use crate::table::Table;

#[derive(Debug, Deserialize)]
struct LeagueEntry {
    league: LeagueInfo,
    seasons: Vec<SeasonInfo>,
}

#[derive(Debug, Deserialize)]
struct LeagueInfo {
    id: u32,
    name: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct SeasonInfo {
    start: String,
    end: String,
}

#[instrument(skip(client, config))]
pub(crate) async fn get_leagues(
    client: &reqwest::Client,
    config: &ApiConfig,
) -> Result<Table<League>> {
    let endpoint = Endpoint::Leagues.to_string();
    let Some(entries) =
        api::get_response::<LeagueEntry>(client, config, &endpoint, &[]).await?
    else {
        return Ok(Table::empty());
    };
    let leagues = parse_leagues(entries)?;
    debug!(count = leagues.len(), "parsed league seasons");
    Ok(leagues)
}

/// One row per (league, season); leagues without seasons produce none.
fn parse_leagues(entries: Vec<LeagueEntry>) -> Result<Table<League>> {
    let mut leagues = Vec::new();
    for entry in entries {
        for season in &entry.seasons {
            leagues.push(League {
                id: entry.league.id,
                name: entry.league.name.clone(),
                kind: entry.league.kind.clone(),
                start: parse_date(&season.start)?,
                end: parse_date(&season.end)?,
            });
        }
    }
    Ok(Table::from_records(leagues))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::{json, Value};
    use wiremock::MockServer;

    use super::*;
    use crate::api::test_support::*;
    use crate::error::FootballError;
    use crate::table::Cell;

    fn league(id: u32, name: &str, kind: &str, seasons: &[(u16, &str, &str)]) -> Value {
        let seasons: Vec<Value> = seasons
            .iter()
            .map(|(year, start, end)| {
                json!({
                    "year": year,
                    "start": start,
                    "end": end,
                    "current": false,
                    "coverage": { "standings": true }
                })
            })
            .collect();
        json!({
            "league": { "id": id, "name": name, "type": kind, "logo": "https://media.example/l.png" },
            "country": { "name": "England", "code": "GB", "flag": null },
            "seasons": seasons
        })
    }

    #[tokio::test]
    async fn test_get_leagues_one_row_per_season() {
        let server = MockServer::start().await;
        let body = envelope(json!([
            league(
                39,
                "Premier League",
                "League",
                &[(2022, "2022-08-05", "2023-05-28"), (2023, "2023-08-11", "2024-05-19")]
            ),
            league(45, "FA Cup", "Cup", &[(2023, "2023-08-05", "2024-05-25")]),
            league(999, "Defunct", "League", &[]),
        ]));
        mount(&server, "/leagues", 200, body).await;

        let client = reqwest::Client::new();
        let leagues = get_leagues(&client, &config(&server)).await.unwrap();

        assert_eq!(leagues.len(), 3);
        assert_eq!(leagues.columns(), &["id", "name", "type", "start", "end"]);
        assert_eq!(leagues.get(0, "id"), Some(Cell::Int(39)));
        assert_eq!(leagues.get(2, "type"), Some(Cell::Text("Cup".into())));
        assert_eq!(
            leagues.get(1, "start"),
            Some(Cell::Date(NaiveDate::from_ymd_opt(2023, 8, 11).unwrap()))
        );
        assert!(leagues
            .rows()
            .iter()
            .all(|row| row[3].as_date().is_some() && row[4].as_date().is_some()));
    }

    #[tokio::test]
    async fn test_get_leagues_non_success_is_empty() {
        let server = MockServer::start().await;
        mount(&server, "/leagues", 500, json!({ "message": "boom" })).await;

        let client = reqwest::Client::new();
        let leagues = get_leagues(&client, &config(&server)).await.unwrap();
        assert!(leagues.is_empty());
        assert_eq!(leagues.columns().len(), 5);
    }

    #[tokio::test]
    async fn test_get_leagues_missing_seasons_is_schema_error() {
        let server = MockServer::start().await;
        let body = envelope(json!([{
            "league": { "id": 39, "name": "Premier League", "type": "League" }
        }]));
        mount(&server, "/leagues", 200, body).await;

        let client = reqwest::Client::new();
        let err = get_leagues(&client, &config(&server)).await.unwrap_err();
        assert!(matches!(err, FootballError::UnexpectedSchema { .. }));
    }

    #[tokio::test]
    async fn test_get_leagues_bad_date() {
        let server = MockServer::start().await;
        let body = envelope(json!([league(
            39,
            "Premier League",
            "League",
            &[(2023, "soon", "2024-05-19")]
        )]));
        mount(&server, "/leagues", 200, body).await;

        let client = reqwest::Client::new();
        let err = get_leagues(&client, &config(&server)).await.unwrap_err();
        assert!(matches!(err, FootballError::DateParse { ref value, .. } if value == "soon"));
    }
}
