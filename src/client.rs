use tracing::instrument;

use crate::api::{self, ApiResponse};
use crate::config::ApiConfig;
use crate::error::Result;
use crate::model::*;
use crate::table::Table;

/// The main entry point for interacting with API-Football.
///
/// `FootballClient` wraps a [`reqwest::Client`] together with the
/// [`ApiConfig`] holding the credentials, and exposes one method per table.
/// Every table method issues exactly one request. A failed request, a
/// non-success status, or errors reported by the API all produce an empty
/// table; a success response in an unexpected shape is an error.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> football_api::Result<()> {
/// use football_api::{ApiConfig, FootballClient};
///
/// let client = FootballClient::new(ApiConfig::from_env()?);
/// let standings = client.get_standings(2023, Some(39), None).await?;
/// println!("Found {} teams", standings.len());
/// # Ok(())
/// # }
/// ```
pub struct FootballClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl FootballClient {
    /// Create a new client with default HTTP settings.
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, etc.
    pub fn with_client(client: reqwest::Client, config: ApiConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue a raw GET against `endpoint` (e.g. `/leagues`) with the given query parameters.
    #[instrument(skip(self))]
    pub async fn fetch(&self, endpoint: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        api::fetch(&self.http, &self.config, endpoint, query).await
    }

    /// Fetch every league, one row per league season.
    #[instrument(skip(self))]
    pub async fn get_leagues(&self) -> Result<Table<League>> {
        api::leagues::get_leagues(&self.http, &self.config).await
    }

    /// Fetch the league table for a season, optionally filtered by league and team.
    #[instrument(skip(self))]
    pub async fn get_standings(
        &self,
        season: u16,
        league_id: Option<u32>,
        team_id: Option<u32>,
    ) -> Result<Table<Standing>> {
        api::standings::get_standings(&self.http, &self.config, season, league_id, team_id).await
    }

    /// Fetch the next fixtures of a league.
    #[instrument(skip(self))]
    pub async fn get_fixtures(&self, league_id: u32) -> Result<Table<Fixture>> {
        api::fixtures::get_fixtures(&self.http, &self.config, league_id).await
    }
}
