//! Error types for the Policy Cost Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions around fetching and pricing a policy.

use thiserror::Error;

/// The main error type for the Policy Cost Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use policy_engine::error::EngineError;
///
/// let error = EngineError::DataUnavailable;
/// assert_eq!(
///     error.to_string(),
///     "Service Unavailable: Error al cargar los datos"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The data source responded but supplied no policy document.
    ///
    /// This is the only failure handled locally by the aggregator; it maps
    /// to a 503 response carrying this exact user-facing message.
    #[error("Service Unavailable: Error al cargar los datos")]
    DataUnavailable,

    /// The request to the data source itself failed (connection error,
    /// timeout, non-success status).
    #[error("Policy source request failed: {message}")]
    Transport {
        /// A description of the transport failure.
        message: String,
    },

    /// The data source payload did not decode into the expected shape.
    #[error("Malformed policy document: {message}")]
    MalformedDocument {
        /// A description of the decode failure.
        message: String,
    },

    /// The company percentage was outside [0, 100] and the engine is
    /// configured to reject out-of-range values.
    #[error("Company percentage out of range: {value}")]
    InvalidPercentage {
        /// The offending percentage value.
        value: f64,
    },

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
