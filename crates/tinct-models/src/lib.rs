//! # tinct-models
//!
//! Alternative color models over `tinct-color` device colors.
//!
//! Every model stores its own components and implements [`ColorModel`],
//! deriving a fresh [`DeviceColor`](tinct_color::DeviceColor) on demand.
//! Equality, ordering, and display always go through that derived color, so
//! two model values that quantize to the same device color are equal even
//! when their raw components differ.
//!
//! | Model    | Components               | Notes                               |
//! |----------|--------------------------|-------------------------------------|
//! | [`Gray`] | shade                    | validates on construction only      |
//! | [`Hsl`]  | hue, saturation, lightness | fractions of the full ranges      |
//! | [`Hsv`]  | hue, saturation, value   | supports hue rotation               |
//! | [`Cmyk`] | c, m, y, k, alpha        | stored as a device color, no math   |
//! | [`Yuv`]  | y, u, v                  | Rec. 601 luma, chroma biased +0.5   |
//! | [`Mono`] | is_black                 | only pure black/white decompose     |
//!
//! # Quick Start
//!
//! ```
//! use tinct_models::{ColorModel, Hsl};
//! use tinct_color::DeviceColor;
//!
//! let olive = DeviceColor::<u8>::rgb(128, 128, 0);
//! let hsl = Hsl::from_device(&olive);
//! assert!(hsl.lightness < 0.5);
//! assert_eq!(hsl.to_device(), olive);
//! ```
//!
//! # Dependencies
//!
//! - [`tinct-core`] - `Quantum` precision trait, `Percentage`
//! - [`tinct-color`] - the device color type models derive
//! - [`thiserror`] - error type derives
//!
//! # Used By
//!
//! - `tinct-cli` - model conversion and hue rotation commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cmyk;
mod error;
mod gray;
mod hsl;
mod hsv;
mod model;
mod mono;
mod yuv;

pub use cmyk::Cmyk;
pub use error::{ModelError, ModelResult};
pub use gray::Gray;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use model::ColorModel;
pub use mono::Mono;
pub use yuv::Yuv;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{Cmyk, ColorModel, Gray, Hsl, Hsv, ModelError, ModelResult, Mono, Yuv};
    pub use tinct_color::DeviceColor;
    pub use tinct_core::{Percentage, Quantum};
}
