//! Runner-level error types

use marten_engine::EngineError;
use thiserror::Error;

/// Errors that abort a run outside the boundary of any individual test.
///
/// A thrown test is never one of these; it is absorbed by the test case
/// runner and reported as a failed result.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The test filter is not a valid regular expression.
    #[error("invalid test filter '{pattern}': {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The discovery entry points are missing or malformed. This is a
    /// harness or registration bug, not a test failure, and the host
    /// should abort rather than report it as one.
    #[error("test discovery failed: {0}")]
    Discovery(String),
}

impl From<EngineError> for RunnerError {
    fn from(err: EngineError) -> Self {
        Self::Discovery(err.to_string())
    }
}
