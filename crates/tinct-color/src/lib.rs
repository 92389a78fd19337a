//! # tinct-color
//!
//! Quantum-scaled device color values with textual parsing and formatting.
//!
//! The central type is [`DeviceColor`], an RGBA/CMYKA record generic over
//! the sample precision from `tinct-core`. Around it:
//!
//! - [`hex`] - the `#`-literal parser (1/2/4 hex digits per channel)
//! - [`named`] - the SVG/X11 color name catalog
//! - [`ColorError`] - parse and formatting failures
//!
//! # Quick Start
//!
//! ```
//! use tinct_color::DeviceColor;
//! use tinct_core::Percentage;
//!
//! // Parse at 8-bit precision
//! let red: DeviceColor<u8> = "#F00".parse()?;
//! assert_eq!(red.to_string(), "#FF0000FF");
//!
//! // Same literal at 16-bit precision
//! let red16: DeviceColor<u16> = "#F00".parse()?;
//! assert_eq!(red16.r, 65535);
//!
//! // Scale towards black, alpha untouched
//! let dim = red * Percentage::new(50.0);
//! assert_eq!((dim.r, dim.a), (127, 255));
//! # Ok::<(), tinct_color::ColorError>(())
//! ```
//!
//! # Wire Format
//!
//! | Literal                | Meaning                          |
//! |------------------------|----------------------------------|
//! | `#RGB`, `#RGBA`        | one hex digit per channel        |
//! | `#RRGGBB`, `#RRGGBBAA` | two hex digits per channel       |
//! | `#RRRRGGGGBBBB[AAAA]`  | four hex digits per channel      |
//! | `transparent`          | fully transparent white          |
//! | `rebeccapurple`, ...   | catalog name, case-insensitive   |
//!
//! # Dependencies
//!
//! - [`tinct-core`] - `Quantum` precision trait, `Percentage`
//!
//! # Used By
//!
//! - `tinct-models` - alternative color models derive device colors
//! - `tinct-cli` - parsing and reporting

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod device;
mod error;
pub mod hex;
pub mod named;

pub use device::DeviceColor;
pub use error::{ColorError, ColorResult};

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{ColorError, ColorResult, DeviceColor};
    pub use tinct_core::{Percentage, Quantum};
}
