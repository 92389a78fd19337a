//! Cyan/magenta/yellow/black model.

use crate::error::{ModelError, ModelResult};
use crate::model::ColorModel;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tinct_color::{hex, DeviceColor};
use tinct_core::{Percentage, Quantum};

/// CMYKA color stored directly as a CMYK-flagged device color.
///
/// Unlike the derived models this one does no channel math: components map
/// one-to-one onto device samples, so constructing from or deriving to a
/// device color is lossless.
///
/// Parsing accepts hex literals with exactly four channels, where the digits
/// mean cyan/magenta/yellow/black and alpha is left opaque:
///
/// ```
/// use tinct_models::Cmyk;
///
/// let color: Cmyk<u8> = "#0ff0".parse().unwrap();
/// assert_eq!((color.c(), color.m(), color.y(), color.k()), (0, 255, 255, 0));
/// assert_eq!(color.a(), 255);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Cmyk<Q: Quantum> {
    color: DeviceColor<Q>,
}

impl<Q: Quantum> Cmyk<Q> {
    /// Creates an opaque CMYK color from raw samples.
    pub fn new(c: Q, m: Q, y: Q, k: Q) -> Self {
        Self::with_alpha(c, m, y, k, Q::MAX)
    }

    /// Creates a CMYKA color from raw samples.
    pub fn with_alpha(c: Q, m: Q, y: Q, k: Q, a: Q) -> Self {
        Self { color: DeviceColor::cmyk(c, m, y, k, a) }
    }

    /// Creates an opaque CMYK color from percentages of the sample range.
    pub fn from_percentages(c: Percentage, m: Percentage, y: Percentage, k: Percentage) -> Self {
        Self::new(
            Q::from_f64(c.to_quantum::<Q>()),
            Q::from_f64(m.to_quantum::<Q>()),
            Q::from_f64(y.to_quantum::<Q>()),
            Q::from_f64(k.to_quantum::<Q>()),
        )
    }

    /// Creates a CMYKA color from percentages of the sample range.
    pub fn from_percentages_alpha(
        c: Percentage,
        m: Percentage,
        y: Percentage,
        k: Percentage,
        a: Percentage,
    ) -> Self {
        Self::with_alpha(
            Q::from_f64(c.to_quantum::<Q>()),
            Q::from_f64(m.to_quantum::<Q>()),
            Q::from_f64(y.to_quantum::<Q>()),
            Q::from_f64(k.to_quantum::<Q>()),
            Q::from_f64(a.to_quantum::<Q>()),
        )
    }

    /// Adopts a device color unchanged, channel conversion included.
    ///
    /// The samples are taken as they are, so an RGB-flagged input stays an
    /// RGB color when derived back.
    pub fn from_device(color: &DeviceColor<Q>) -> Self {
        Self { color: *color }
    }

    /// Cyan sample.
    pub fn c(&self) -> Q {
        self.color.r
    }

    /// Magenta sample.
    pub fn m(&self) -> Q {
        self.color.g
    }

    /// Yellow sample.
    pub fn y(&self) -> Q {
        self.color.b
    }

    /// Black sample.
    pub fn k(&self) -> Q {
        self.color.k
    }

    /// Alpha sample.
    pub fn a(&self) -> Q {
        self.color.a
    }

    /// Sets the cyan sample.
    pub fn set_c(&mut self, value: Q) {
        self.color.r = value;
    }

    /// Sets the magenta sample.
    pub fn set_m(&mut self, value: Q) {
        self.color.g = value;
    }

    /// Sets the yellow sample.
    pub fn set_y(&mut self, value: Q) {
        self.color.b = value;
    }

    /// Sets the black sample.
    pub fn set_k(&mut self, value: Q) {
        self.color.k = value;
    }

    /// Sets the alpha sample.
    pub fn set_a(&mut self, value: Q) {
        self.color.a = value;
    }
}

impl<Q: Quantum> ColorModel<Q> for Cmyk<Q> {
    fn to_device(&self) -> DeviceColor<Q> {
        self.color
    }
}

impl<Q: Quantum> FromStr for Cmyk<Q> {
    type Err = ModelError;

    /// Parses a hex literal with exactly four channels as opaque CMYK.
    fn from_str(value: &str) -> ModelResult<Self> {
        if !value.starts_with('#') {
            return Err(ModelError::InvalidCmykColor(value.to_string()));
        }
        let channels =
            hex::parse::<Q>(value).ok_or_else(|| ModelError::InvalidCmykColor(value.to_string()))?;
        match channels.as_slice() {
            [c, m, y, k] => Ok(Self::new(*c, *m, *y, *k)),
            _ => Err(ModelError::InvalidCmykColor(value.to_string())),
        }
    }
}

impl<Q: Quantum> PartialEq for Cmyk<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.to_device() == other.to_device()
    }
}

impl<Q: Quantum> PartialOrd for Cmyk<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_device().partial_cmp(&other.to_device())
    }
}

impl<Q: Quantum> fmt::Display for Cmyk<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_device().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_flags_cmyk() {
        let color = Cmyk::<u8>::new(10, 20, 30, 40);
        let device = color.to_device();
        assert!(device.is_cmyk());
        assert_eq!((device.r, device.g, device.b, device.k, device.a), (10, 20, 30, 40, 255));
    }

    #[test]
    fn accessors_and_setters() {
        let mut color = Cmyk::<u8>::with_alpha(1, 2, 3, 4, 5);
        assert_eq!(
            (color.c(), color.m(), color.y(), color.k(), color.a()),
            (1, 2, 3, 4, 5)
        );
        color.set_m(200);
        color.set_a(255);
        assert_eq!(color.m(), 200);
        assert_eq!(color.a(), 255);
    }

    #[test]
    fn percentages_scale_into_precision() {
        let color = Cmyk::<u8>::from_percentages(100.0.into(), 0.0.into(), 50.0.into(), 0.0.into());
        assert_eq!((color.c(), color.m(), color.y(), color.k()), (255, 0, 127, 0));

        let wide = Cmyk::<u16>::from_percentages_alpha(
            100.0.into(),
            0.0.into(),
            0.0.into(),
            0.0.into(),
            50.0.into(),
        );
        assert_eq!(wide.c(), 65535);
        assert_eq!(wide.a(), 32767);
    }

    #[test]
    fn parse_four_channel_hex() {
        let short: Cmyk<u8> = "#0ff0".parse().unwrap();
        assert_eq!((short.c(), short.m(), short.y(), short.k()), (0, 255, 255, 0));
        assert_eq!(short.a(), 255);

        let long: Cmyk<u8> = "#ff00ff00".parse().unwrap();
        assert_eq!((long.c(), long.m(), long.y(), long.k()), (255, 0, 255, 0));

        let wide: Cmyk<u16> = "#0000ffff0000ffff".parse().unwrap();
        assert_eq!((wide.c(), wide.m(), wide.y(), wide.k()), (0, 65535, 0, 65535));
    }

    #[test]
    fn parse_rejects_other_shapes() {
        for bad in ["white", "", "#fff", "#ff00ff", "#ff", "#fffff", "#GG00FF00"] {
            assert!(
                matches!(
                    bad.parse::<Cmyk<u8>>(),
                    Err(ModelError::InvalidCmykColor(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn adopts_device_color_unchanged() {
        let rgb = DeviceColor::<u8>::rgb(9, 8, 7);
        let adopted = Cmyk::from_device(&rgb);
        assert_eq!(adopted.to_device(), rgb);
        assert!(!adopted.to_device().is_cmyk());
    }

    #[test]
    fn displays_as_cmyka() {
        let color = Cmyk::<u8>::new(255, 0, 0, 0);
        assert_eq!(color.to_string(), "cmyka(255,0,0,0,1.0)");
    }
}
