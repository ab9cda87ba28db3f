use thiserror::Error;

/// Errors surfaced by the track-query client.
///
/// Parse failures are deliberately not represented here: an empty or
/// unparsable response body is the "no result" outcome, reported as
/// `Ok(None)` by the client.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("required field `{field}` is blank")]
    Validation { field: &'static str },

    #[error("request to tracking API failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("tracking API returned status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
