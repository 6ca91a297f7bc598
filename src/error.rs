//! Error types for the collectives runtime.
//!
//! There is no recoverable error path inside a collective call itself:
//! mismatched barrier participation or divergent path selection are
//! caller-discipline violations, not runtime conditions. Errors surface only
//! at the host boundary — malformed launch configurations and faulted
//! launches reported through [`crate::launch::Submission::wait`].

use thiserror::Error;

/// Errors surfaced at the host boundary of the collectives runtime.
#[derive(Debug, Error)]
pub enum CollectiveError {
    /// Generic runtime error (construction, host-side bookkeeping).
    #[error("Runtime error: {0}")]
    RuntimeError(String),

    /// A launch configuration that cannot describe a valid lane grid.
    #[error("Invalid launch configuration: {0}")]
    InvalidConfig(String),

    /// A submitted launch faulted. Fatal and not retried; no partial
    /// results exist.
    #[error("Launch faulted: {0}")]
    LaunchFault(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, CollectiveError>;

/// Construct a [`CollectiveError::RuntimeError`] from format arguments.
#[macro_export]
macro_rules! runtime_error {
    ($($arg:tt)*) => {
        $crate::error::CollectiveError::RuntimeError(format!($($arg)*))
    };
}

/// Construct a [`CollectiveError::InvalidConfig`] from format arguments.
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)*) => {
        $crate::error::CollectiveError::InvalidConfig(format!($($arg)*))
    };
}
