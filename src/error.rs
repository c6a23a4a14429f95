use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required but not set")]
    MissingVar(&'static str),
}

/// Failure of a single publish attempt.
///
/// `Display` yields only the failure text, which is what ends up in the
/// `error` field of a 500 response.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The messaging service answered and refused the request.
    #[error("{0}")]
    Rejected(String),

    /// The request never got an answer from the service.
    #[error("{0}")]
    Dispatch(String),

    #[error("{0}")]
    Encode(#[from] serde_json::Error),
}
