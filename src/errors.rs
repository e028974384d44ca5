use thiserror::Error;

/// Why one poll of the spending endpoint produced nothing to draw.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("Failed to fetch data")]
    Status(reqwest::StatusCode),

    #[error("Failed to fetch data: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Malformed spending data: {0}")]
    Decode(#[from] serde_json::Error),

    /// Empty or `null` body.
    #[error("No data available")]
    NoData,
}
