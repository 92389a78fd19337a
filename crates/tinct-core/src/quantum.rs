//! Quantum sample types and precision-boundary conversions.
//!
//! A device color channel is stored as one *quantum* whose concrete type is
//! chosen at compile time. This module defines the [`Quantum`] trait and its
//! three implementations:
//!
//! - `u8` - 8-bit unsigned (0-255)
//! - `u16` - 16-bit unsigned (0-65535)
//! - `f32` - float, nominal range 0.0-1.0
//!
//! # Design
//!
//! Conversions come in three flavors:
//! 1. **Normalized** ([`from_norm`](Quantum::from_norm) /
//!    [`to_norm`](Quantum::to_norm)) - the 0.0-1.0 space all color-model
//!    math runs in.
//! 2. **Byte** ([`from_byte`](Quantum::from_byte) /
//!    [`to_byte`](Quantum::to_byte)) - the 0-255 space used by hex literals
//!    and `cmyk()` notation, independent of the active precision.
//! 3. **Raw** ([`from_f64`](Quantum::from_f64) /
//!    [`to_f64`](Quantum::to_f64)) - sample-unit doubles for arithmetic like
//!    percentage scaling.
//!
//! Integer narrowing truncates after clamping; the float type clamps only at
//! conversion boundaries and otherwise carries out-of-range values untouched.

/// Trait for quantum sample types.
///
/// Implemented for the storage types a build can pick for channel samples:
/// - `u8` - 8-bit unsigned (0-255)
/// - `u16` - 16-bit unsigned (0-65535)
/// - `f32` - float with nominal range 0.0-1.0
///
/// # Constants
///
/// - [`DEPTH`](Quantum::DEPTH) - bit depth of the type
/// - [`IS_FLOAT`](Quantum::IS_FLOAT) - whether this is a floating-point type
/// - [`MAX`](Quantum::MAX) - maximum sample value (nominal for floats)
/// - [`HEX_WIDTH`](Quantum::HEX_WIDTH) - hex digits per channel when
///   formatting at native width
///
/// # Example
///
/// ```
/// use tinct_core::Quantum;
///
/// // Half intensity in each precision
/// assert_eq!(<u8 as Quantum>::from_norm(0.5), 127);
/// assert_eq!(<u16 as Quantum>::from_norm(0.5), 32767);
/// assert_eq!(<f32 as Quantum>::from_norm(0.5), 0.5);
///
/// // Byte space round-trip
/// assert_eq!(<u16 as Quantum>::from_byte(128).to_byte(), 128);
/// ```
pub trait Quantum: Copy + Clone + Default + Send + Sync + PartialOrd + 'static {
    /// Number of bits per sample.
    const DEPTH: u32;

    /// Whether this is a floating-point sample type.
    const IS_FLOAT: bool;

    /// Maximum sample value.
    ///
    /// - 255 for u8
    /// - 65535 for u16
    /// - 1.0 for f32 (nominal; stored samples may exceed it)
    const MAX: Self;

    /// Maximum sample value as an `f64`.
    const MAX_F64: f64;

    /// Hex digits per channel when rendering at native width.
    ///
    /// 2 for u8; 4 for u16 and f32 (the float precision formats through a
    /// nominal 16-bit range).
    const HEX_WIDTH: usize;

    /// Convert a normalized value in [0.0, 1.0] to a sample.
    ///
    /// Multiplies by the maximum and clamps into range; integer types then
    /// truncate. Out-of-range inputs are clamped rather than rejected.
    fn from_norm(v: f64) -> Self;

    /// Convert a sample to its normalized value (sample / max).
    fn to_norm(self) -> f64;

    /// Convert a byte (0-255) to a sample.
    fn from_byte(v: u8) -> Self;

    /// Convert a sample to a byte (0-255). Lossy for wider precisions.
    fn to_byte(self) -> u8;

    /// Convert a 16-bit value (0-65535) to a sample.
    ///
    /// Hex literals are expressed in at most 16-bit digits; this is the
    /// narrowing/widening step into the active precision.
    fn from_short(v: u16) -> Self;

    /// Convert a sample-unit double to a sample, clamping to [0, max] with a
    /// truncating cast for integer types.
    fn from_f64(v: f64) -> Self;

    /// The raw sample value as an `f64`, without normalization.
    fn to_f64(self) -> f64;

    /// The value rendered when hex-formatting at native width.
    fn to_hex_unit(self) -> u16;
}

impl Quantum for u8 {
    const DEPTH: u32 = 8;
    const IS_FLOAT: bool = false;
    const MAX: Self = 255;
    const MAX_F64: f64 = 255.0;
    const HEX_WIDTH: usize = 2;

    #[inline]
    fn from_norm(v: f64) -> Self {
        (v * 255.0).clamp(0.0, 255.0) as u8
    }

    #[inline]
    fn to_norm(self) -> f64 {
        self as f64 / 255.0
    }

    #[inline]
    fn from_byte(v: u8) -> Self {
        v
    }

    #[inline]
    fn to_byte(self) -> u8 {
        self
    }

    #[inline]
    fn from_short(v: u16) -> Self {
        ((v as u32 + 128) / 257) as u8
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v.clamp(0.0, 255.0) as u8
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn to_hex_unit(self) -> u16 {
        self as u16
    }
}

impl Quantum for u16 {
    const DEPTH: u32 = 16;
    const IS_FLOAT: bool = false;
    const MAX: Self = 65535;
    const MAX_F64: f64 = 65535.0;
    const HEX_WIDTH: usize = 4;

    #[inline]
    fn from_norm(v: f64) -> Self {
        (v * 65535.0).clamp(0.0, 65535.0) as u16
    }

    #[inline]
    fn to_norm(self) -> f64 {
        self as f64 / 65535.0
    }

    #[inline]
    fn from_byte(v: u8) -> Self {
        257 * v as u16
    }

    #[inline]
    fn to_byte(self) -> u8 {
        ((self as u32 + 128) / 257) as u8
    }

    #[inline]
    fn from_short(v: u16) -> Self {
        v
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v.clamp(0.0, 65535.0) as u16
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn to_hex_unit(self) -> u16 {
        self
    }
}

impl Quantum for f32 {
    const DEPTH: u32 = 32;
    const IS_FLOAT: bool = true;
    const MAX: Self = 1.0;
    const MAX_F64: f64 = 1.0;
    const HEX_WIDTH: usize = 4;

    #[inline]
    fn from_norm(v: f64) -> Self {
        v.clamp(0.0, 1.0) as f32
    }

    #[inline]
    fn to_norm(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_byte(v: u8) -> Self {
        v as f32 / 255.0
    }

    #[inline]
    fn to_byte(self) -> u8 {
        ((self as f64).clamp(0.0, 1.0) * 255.0).round() as u8
    }

    #[inline]
    fn from_short(v: u16) -> Self {
        v as f32 / 65535.0
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v.clamp(0.0, 1.0) as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn to_hex_unit(self) -> u16 {
        ((self as f64).clamp(0.0, 1.0) * 65535.0).round() as u16
    }
}
