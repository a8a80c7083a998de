//! Error types for the compensation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The computation pipeline itself is total (malformed business data is
//! clamped, not rejected), so errors only arise at the configuration
//! boundary where policy files are read from disk.

use thiserror::Error;

/// The main error type for the compensation engine.
///
/// # Example
///
/// ```
/// use compensation_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.json".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.json");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
