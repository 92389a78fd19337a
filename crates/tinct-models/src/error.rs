//! Error types for color model construction.

use thiserror::Error;

/// Color model construction error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    /// Gray shade outside [0, 1] at construction.
    #[error("shade must be within 0.0 and 1.0, got {0}")]
    ShadeOutOfRange(f64),

    /// Mono decomposition of a color that is neither black nor white.
    #[error("color is neither pure black nor pure white")]
    NotMonochrome,

    /// CMYK literal that is not a four-channel hex string.
    #[error("invalid cmyk color {0:?}")]
    InvalidCmykColor(String),
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
