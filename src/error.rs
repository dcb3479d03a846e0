/// All errors that can occur while talking to API-Football or reshaping its data.
#[derive(thiserror::Error, Debug)]
pub enum FootballError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// The base URL and endpoint path do not form a valid URL.
    #[error("invalid request url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },

    /// A success response body did not match the expected JSON shape.
    #[error("unexpected schema in {endpoint} response: {source}")]
    UnexpectedSchema {
        endpoint: String,
        source: serde_json::Error,
    },

    /// The response parsed, but holds the wrong number of nested entries.
    #[error("unexpected shape in {endpoint} response: {detail}")]
    UnexpectedShape { endpoint: String, detail: String },

    /// Failed to parse a date or timestamp from the payload.
    #[error("failed to parse date {value:?}: {source}")]
    DateParse {
        value: String,
        source: chrono::ParseError,
    },

    /// A flat row holds a cell of the wrong type for its column.
    #[error("column {column} does not hold {expected}")]
    Cell {
        column: &'static str,
        expected: &'static str,
    },

    /// A flat row has a different number of cells than the record has columns.
    #[error("row has {found} cells, expected {expected}")]
    RowArity { expected: usize, found: usize },

    /// A configuration value could not be used.
    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FootballError>;
