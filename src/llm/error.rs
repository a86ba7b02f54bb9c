use thiserror::Error;

/// Failures of the external reasoning path
///
/// None of these reach the caller of `Analyzer::analyze`; each one selects
/// the heuristic fallback.
#[derive(Debug, Clone, Error)]
pub enum ReasoningError {
    /// No API key configured
    #[error("no API key configured (set OPENAI_API_KEY)")]
    CredentialMissing,

    /// The service handle could not be constructed
    #[error("reasoning service unavailable: {0}")]
    ServiceUnavailable(String),

    /// A reasoning call failed: network, auth, rate limit or malformed response
    #[error("reasoning service error: {0}")]
    ServiceError(String),
}

impl From<reqwest::Error> for ReasoningError {
    fn from(err: reqwest::Error) -> Self {
        ReasoningError::ServiceError(err.to_string())
    }
}
