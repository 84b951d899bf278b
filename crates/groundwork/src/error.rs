//! Error types for Groundwork

use groundwork_config::ConfigError;
use groundwork_core::LevelingError;
use thiserror::Error;

/// Main error type for Groundwork operations
#[derive(Debug, Error)]
pub enum GroundworkError {
    /// The area failed validation
    #[error("Invalid area: {0}")]
    Leveling(#[from] LevelingError),

    /// The area document or settings could not be read
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl GroundworkError {
    /// Returns the validation error, if that is what this is.
    pub fn as_leveling(&self) -> Option<&LevelingError> {
        match self {
            GroundworkError::Leveling(err) => Some(err),
            GroundworkError::Config(_) => None,
        }
    }
}

/// Result type alias for Groundwork operations
pub type Result<T> = std::result::Result<T, GroundworkError>;
