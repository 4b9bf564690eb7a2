use thiserror::Error;

/// Result type alias for fixture setup
pub type Result<T> = std::result::Result<T, FixtureError>;

/// Errors raised while building a fixture from configuration.
///
/// Repository operations themselves never fail; only setup can.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Two seed users share an id
    #[error("Duplicate seed user id: {0}")]
    DuplicateSeedId(i32),

    /// Logging section is unusable
    #[error("Invalid logging configuration: {0}")]
    InvalidLogging(String),
}

impl FixtureError {
    /// Check if this error comes from the config loader
    pub fn is_config(&self) -> bool {
        matches!(self, FixtureError::Config(_))
    }
}
