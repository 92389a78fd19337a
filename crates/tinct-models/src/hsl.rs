//! Hue/saturation/lightness model.

use crate::model::ColorModel;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use tinct_color::DeviceColor;
use tinct_core::Quantum;

/// HSL components, each a fraction in [0, 1].
///
/// Hue is stored as a fraction of 360 degrees. Fields are plain and
/// unvalidated; derivation wraps the hue and clamps the resulting samples.
///
/// ```
/// use tinct_models::{ColorModel, Hsl};
/// use tinct_color::DeviceColor;
///
/// let red = DeviceColor::<u8>::rgb(255, 0, 0);
/// let hsl = Hsl::from_device(&red);
/// assert_eq!(hsl.lightness, 0.5);
/// assert_eq!(hsl.to_device(), red);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hsl<Q: Quantum> {
    /// Hue as a fraction of 360 degrees.
    pub hue: f64,
    /// Saturation fraction.
    pub saturation: f64,
    /// Lightness fraction.
    pub lightness: f64,
    _precision: PhantomData<Q>,
}

impl<Q: Quantum> Hsl<Q> {
    /// Creates an HSL color from component fractions.
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self { hue, saturation, lightness, _precision: PhantomData }
    }

    /// Decomposes a device color with the max/min chroma formulas.
    pub fn from_device(color: &DeviceColor<Q>) -> Self {
        let r = color.r.to_norm();
        let g = color.g.to_norm();
        let b = color.b.to_norm();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let c = max - min;

        let lightness = (max + min) / 2.0;
        if c <= 0.0 {
            return Self::new(0.0, 0.0, lightness);
        }

        let mut hue = if max == r {
            let h = (g - b) / c;
            if g < b { h + 6.0 } else { h }
        } else if max == g {
            2.0 + ((b - r) / c)
        } else {
            4.0 + ((r - g) / c)
        };
        hue *= 60.0 / 360.0;

        let saturation = if lightness <= 0.5 {
            c / (2.0 * lightness)
        } else {
            c / (2.0 - (2.0 * lightness))
        };

        Self::new(hue, saturation, lightness)
    }
}

impl<Q: Quantum> ColorModel<Q> for Hsl<Q> {
    /// Six-sector HSL to RGB, wrapping the hue into [0, 360) first.
    fn to_device(&self) -> DeviceColor<Q> {
        let c = if self.lightness <= 0.5 {
            2.0 * self.lightness * self.saturation
        } else {
            (2.0 - (2.0 * self.lightness)) * self.saturation
        };
        let min = self.lightness - (0.5 * c);

        let mut h = self.hue * 360.0;
        h -= 360.0 * (h / 360.0).floor();
        h /= 60.0;
        let x = c * (1.0 - (h - (2.0 * (h / 2.0).floor()) - 1.0).abs());

        let (r, g, b) = match h.floor() as i32 {
            0 => (min + c, min + x, min),
            1 => (min + x, min + c, min),
            2 => (min, min + c, min + x),
            3 => (min, min + x, min + c),
            4 => (min + x, min, min + c),
            5 => (min + c, min, min + x),
            _ => (min, min, min),
        };
        DeviceColor::rgb(Q::from_norm(r), Q::from_norm(g), Q::from_norm(b))
    }
}

impl<Q: Quantum> PartialEq for Hsl<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.to_device() == other.to_device()
    }
}

impl<Q: Quantum> PartialOrd for Hsl<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_device().partial_cmp(&other.to_device())
    }
}

impl<Q: Quantum> fmt::Display for Hsl<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_device().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn primaries_decompose() {
        let red = Hsl::from_device(&DeviceColor::<u8>::rgb(255, 0, 0));
        assert_relative_eq!(red.hue, 0.0);
        assert_relative_eq!(red.saturation, 1.0);
        assert_relative_eq!(red.lightness, 0.5);

        let green = Hsl::from_device(&DeviceColor::<u8>::rgb(0, 255, 0));
        assert_relative_eq!(green.hue, 1.0 / 3.0);

        let blue = Hsl::from_device(&DeviceColor::<u8>::rgb(0, 0, 255));
        assert_relative_eq!(blue.hue, 2.0 / 3.0);
    }

    #[test]
    fn achromatic_has_zero_hue() {
        let gray = Hsl::from_device(&DeviceColor::<u8>::rgb(128, 128, 128));
        assert_relative_eq!(gray.hue, 0.0);
        assert_relative_eq!(gray.saturation, 0.0);
        assert_relative_eq!(gray.lightness, 128.0 / 255.0);
    }

    #[test]
    fn negative_hue_wraps_into_magenta_sector() {
        // Red-dominant with more blue than green lands past 300 degrees
        let rose = Hsl::from_device(&DeviceColor::<u8>::rgb(255, 0, 128));
        assert!(rose.hue > 5.0 / 6.0 && rose.hue < 1.0);
    }

    #[test]
    fn round_trips_within_one_quantum() {
        let samples: [(u8, u8, u8); 6] = [
            (255, 0, 0),
            (0, 255, 0),
            (12, 200, 99),
            (128, 128, 128),
            (255, 255, 255),
            (1, 2, 3),
        ];
        for (r, g, b) in samples {
            let device = DeviceColor::<u8>::rgb(r, g, b);
            let back = Hsl::from_device(&device).to_device();
            assert!(back.r.abs_diff(r) <= 1, "{r},{g},{b} -> r {}", back.r);
            assert!(back.g.abs_diff(g) <= 1, "{r},{g},{b} -> g {}", back.g);
            assert!(back.b.abs_diff(b) <= 1, "{r},{g},{b} -> b {}", back.b);
        }
    }

    #[test]
    fn hue_wraps_before_sector_selection() {
        let base = Hsl::<u8>::new(0.25, 1.0, 0.5);
        let wrapped = Hsl::<u8>::new(0.25 + 2.0, 1.0, 0.5);
        let negative = Hsl::<u8>::new(0.25 - 1.0, 1.0, 0.5);
        assert_eq!(base.to_device(), wrapped.to_device());
        assert_eq!(base.to_device(), negative.to_device());
    }

    #[test]
    fn lightness_extremes() {
        assert_eq!(Hsl::<u8>::new(0.4, 1.0, 0.0).to_device(), DeviceColor::black());
        assert_eq!(Hsl::<u8>::new(0.4, 1.0, 1.0).to_device(), DeviceColor::white());
    }
}
