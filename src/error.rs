use thiserror::Error;

/// Failures surfaced by the estimator and its collaborators.
///
/// A missing config file is not represented here: it resolves to `None`
/// values downstream instead of an error. Everything that reaches this enum
/// is reported to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// Config file exists but cannot be used as-is.
    #[error("config error: {0}")]
    Config(String),

    /// Network-level failure, timeout or non-2xx response from the
    /// sunrise-sunset service.
    #[error("sunrise-sunset request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered but flagged the request as failed.
    #[error("sunrise-sunset API returned status {0:?}")]
    ApiStatus(String),

    /// Response body is not the expected JSON document.
    #[error("malformed sunrise-sunset response: {0}")]
    Json(#[from] serde_json::Error),

    /// Response decoded, but a sunrise/sunset timestamp inside it did not.
    #[error("malformed timestamp in sunrise-sunset response: {0}")]
    Timestamp(#[from] chrono::ParseError),
}
