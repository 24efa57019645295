//! Error types for the Meadow engine
//!
//! This module defines the error types used by tiling, culling, camera
//! animation and the renderer abstraction.

use std::fmt;

/// Result type for Meadow engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Meadow engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration rejected (tiling parameters, camera speed, ...)
    InvalidConfig(String),

    /// Instance attribute array does not follow the position/rotation layout
    InvalidInstanceData(String),

    /// A culling state was used with a tile set of different geometry
    IncompatibleTileGeometry(String),

    /// Backend-specific error reported by a command list implementation
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidInstanceData(msg) => write!(f, "Invalid instance data: {}", msg),
            Error::IncompatibleTileGeometry(msg) => write!(f, "Incompatible tile geometry: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an engine-created error once, then hand it back to the caller.
pub(crate) fn log_and_return_error(source: &str, error: Error) -> Error {
    crate::engine_error!(source, "{}", error);
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
