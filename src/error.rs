//! Configuration errors
//!
//! Everything that can fail does so before or while a `Game` is built. Once a round is
//! running, spawning, movement and filtering are infallible.

/// Errors raised while loading or validating settings
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// Settings file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for `Settings`
    #[error("settings parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric setting is NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f32 },

    /// Field is too small to leave any room inside the padding
    #[error("field {width}x{height} is too small for padding {padding}")]
    FieldTooSmall { width: f32, height: f32, padding: f32 },

    /// Padding must not be negative
    #[error("padding must be >= 0, got {0}")]
    NegativePadding(f32),

    /// A speed, scale or sprite dimension that must be positive is not
    #[error("{name} must be > 0, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    /// Target enemy count of zero would leave nothing to shoot
    #[error("enemy target count must be at least 1")]
    NoEnemies,

    /// Enemy fire roll range is empty
    #[error("enemy fire roll must be at least 1")]
    NoFireRoll,
}

/// Result alias for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
