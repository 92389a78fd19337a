//! # tinct-core
//!
//! Core numeric types for quantum-scaled color math.
//!
//! A *quantum* is one channel sample in a device color. Its storage type is
//! picked at compile time through the [`Quantum`] trait:
//!
//! | Type  | Depth  | Range       |
//! |-------|--------|-------------|
//! | `u8`  | 8-bit  | 0 - 255     |
//! | `u16` | 16-bit | 0 - 65535   |
//! | `f32` | float  | 0.0 - 1.0 (nominal, may exceed) |
//!
//! All color math upstream of this crate works in normalized `f64` terms and
//! crosses into sample precision only through the conversions defined here.
//!
//! ```
//! use tinct_core::Quantum;
//!
//! // Normalized value into each precision
//! assert_eq!(<u8 as Quantum>::from_norm(0.5), 127);
//! assert_eq!(<u16 as Quantum>::from_norm(0.5), 32767);
//!
//! // Byte space is 0-255 regardless of precision
//! assert_eq!(65535u16.to_byte(), 255);
//! ```
//!
//! # Dependencies
//!
//! None (pure numeric core).
//!
//! # Used By
//!
//! - `tinct-color` - device color values
//! - `tinct-models` - alternative color models

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod percentage;
pub mod quantum;

pub use percentage::Percentage;
pub use quantum::Quantum;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{Percentage, Quantum};
}
