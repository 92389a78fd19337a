//! Error types for color parsing and formatting.
//!
//! All failures are raised synchronously at the point of construction or
//! conversion; nothing is retried or recovered internally.

use thiserror::Error;

/// Color parsing/formatting error.
///
/// Covers the failure modes of the textual color surface:
/// - Malformed hex literals (wrong length, non-hex digit)
/// - Names missing from the catalog
/// - Formatting requests a representation cannot satisfy
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input string was empty.
    #[error("color value cannot be empty")]
    EmptyValue,

    /// Hex literal has an unsupported length or a non-hex digit.
    #[error("invalid hex color {0:?}")]
    InvalidHex(String),

    /// Name is not in the color catalog.
    #[error("unknown color name {0:?}")]
    UnknownName(String),

    /// Hex rendering requested for a CMYK-flagged color.
    #[error("hex format only works for non-cmyk colors")]
    CmykNotSupported,
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
