//! Error types for marten-engine

use thiserror::Error;

/// A script failed to compile or its top-level evaluation threw.
///
/// Fatal for the whole run: the harness surfaces the description and stops.
#[derive(Debug, Clone, Error)]
#[error("failed to load '{label}': {message}")]
pub struct LoadError {
    /// Label of the offending source unit.
    pub label: String,
    /// Human-readable engine diagnostic.
    pub message: String,
}

impl LoadError {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
        }
    }
}

/// Host-side engine error
#[derive(Debug, Error)]
pub enum EngineError {
    /// A dotted global path did not resolve to a value
    #[error("unresolved path '{0}'")]
    Unresolved(String),

    /// A value did not have the shape an operation required
    #[error("unexpected value shape: {0}")]
    UnexpectedShape(String),

    /// Internal error
    #[error("internal engine error: {0}")]
    Internal(String),
}

impl EngineError {
    /// Create an unresolved-path error
    pub fn unresolved(path: impl Into<String>) -> Self {
        Self::Unresolved(path.into())
    }

    /// Create an unexpected-shape error
    pub fn unexpected_shape(msg: impl Into<String>) -> Self {
        Self::UnexpectedShape(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Result type using EngineError
pub type EngineResult<T> = Result<T, EngineError>;

/// An exception raised by script code and captured at the invocation
/// boundary. This is an ordinary value, not a host failure.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ThrownError {
    /// The engine's description of the thrown value.
    pub message: String,
}

impl ThrownError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
