pub(crate) mod fixtures;
pub(crate) mod leagues;
pub(crate) mod standings;

use chrono::{DateTime, NaiveDate, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::config::ApiConfig;
use crate::error::{FootballError, Result};

/// A response as received, before any reshaping.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub url: String,
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Deserialize the body, reporting a mismatch as an unexpected schema of `endpoint`.
    pub fn json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        serde_json::from_str(&self.body).map_err(|source| FootballError::UnexpectedSchema {
            endpoint: endpoint.to_owned(),
            source,
        })
    }
}

/// The outer object every API-Football response is wrapped in.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    /// `[]` when the call succeeded, otherwise an object or list of messages.
    #[serde(default)]
    pub errors: Value,
    pub response: Vec<T>,
}

fn has_errors(errors: &Value) -> bool {
    match errors {
        Value::Null => false,
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Build the request URL for `endpoint` with `query` appended.
pub(crate) fn request_url(
    config: &ApiConfig,
    endpoint: &str,
    query: &[(&str, String)],
) -> Result<Url> {
    let raw = format!("{}{endpoint}", config.base_url);
    let url = if query.is_empty() {
        Url::parse(&raw)
    } else {
        Url::parse_with_params(&raw, query)
    };
    url.map_err(|source| FootballError::InvalidUrl { url: raw, source })
}

/// Issue a GET against `endpoint` with the configured credentials.
///
/// Any status code is returned as-is; only transport failures are errors.
pub(crate) async fn fetch(
    client: &reqwest::Client,
    config: &ApiConfig,
    endpoint: &str,
    query: &[(&str, String)],
) -> Result<ApiResponse> {
    let url = request_url(config, endpoint, query)?;
    debug!(url = %url, "fetching endpoint");

    let response = client
        .get(url.clone())
        .header(config.host_header.as_str(), config.host.as_str())
        .header(config.key_header.as_str(), config.key.as_str())
        .send()
        .await
        .map_err(|e| FootballError::Http {
            url: url.to_string(),
            source: e,
        })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| FootballError::ResponseBody {
        url: url.to_string(),
        source: e,
    })?;

    Ok(ApiResponse {
        url: url.to_string(),
        status,
        body,
    })
}

/// Fetch `endpoint` and unwrap the envelope's `response` list.
///
/// Returns `None` when the request failed, the status was not success, or the
/// API reported errors: callers turn that into an empty table. A success body
/// of the wrong shape is an error.
pub(crate) async fn get_response<T: DeserializeOwned>(
    client: &reqwest::Client,
    config: &ApiConfig,
    endpoint: &str,
    query: &[(&str, String)],
) -> Result<Option<Vec<T>>> {
    let response = match fetch(client, config, endpoint, query).await {
        Ok(response) => response,
        Err(e @ (FootballError::Http { .. } | FootballError::ResponseBody { .. })) => {
            warn!(error = %e, endpoint, "request failed");
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    if !response.is_success() {
        warn!(status = %response.status, url = %response.url, "unsuccessful response");
        return Ok(None);
    }

    let envelope: Envelope<T> = response.json(endpoint)?;
    if has_errors(&envelope.errors) {
        warn!(errors = %envelope.errors, url = %response.url, "api reported errors");
        return Ok(None);
    }
    Ok(Some(envelope.response))
}

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| FootballError::DateParse {
        value: value.to_owned(),
        source,
    })
}

/// Parse an RFC 3339 timestamp and normalize it to UTC, discarding the offset.
pub(crate) fn parse_utc(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|source| FootballError::DateParse {
            value: value.to_owned(),
            source,
        })
}
