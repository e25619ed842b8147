//! Unified Error Model
use thiserror::Error;

/// Errors a gateway request can terminate with.
///
/// Recoverable conditions (unsupported language, malformed target tokens)
/// never appear here: they are absorbed into the report as warn findings.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// User error: missing or blank code. Maps to HTTP 400.
    #[error("INPUT/{0}")]
    InvalidInput(String),

    /// An analyzer failed internally. Maps to HTTP 500 with a generic
    /// message; the detail is logged, never returned to the caller.
    #[error("ANALYZE/{0}")]
    AnalyzerFailure(String),
}

/// Internal failure inside a single analyzer.
#[derive(Error, Debug)]
#[error("{0}")]
pub struct AnalyzerError(pub String);

impl AnalyzerError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
