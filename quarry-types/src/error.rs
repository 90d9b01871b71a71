use thiserror::Error;

/// Error returned by every service call. Exactly one of these reaches the
/// caller per request, never a partial result.
#[derive(Debug, Error)]
pub enum Error {
    /// One or more required builder fields were never set. All missing
    /// fields are reported at once.
    #[error("missing required fields: {0:?}")]
    MissingRequiredFields(Vec<&'static str>),

    /// The request could not be encoded: url template expansion or body
    /// serialization failed.
    #[error("unable to encode request: {0}")]
    Encoding(String),

    /// Network or protocol level failure, surfaced unchanged from the
    /// transport.
    #[error("transport failure")]
    Transport(#[source] anyhow::Error),

    /// The response body was not valid JSON of the expected shape.
    #[error("unable to decode response body")]
    Decode(#[source] serde_json::Error),

    /// The supplied context was cancelled before the round trip completed.
    #[error("request cancelled")]
    Cancelled,
}

impl Error {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}
