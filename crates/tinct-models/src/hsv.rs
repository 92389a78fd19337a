//! Hue/saturation/value model.

use crate::model::ColorModel;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use tinct_color::DeviceColor;
use tinct_core::Quantum;

/// HSV components, each a fraction in [0, 1].
///
/// Hue is stored as a fraction of 360 degrees. [`hue_shift`](Hsv::hue_shift)
/// rotates the hue by a degree offset and wraps it back into [0, 1).
///
/// ```
/// use tinct_models::{ColorModel, Hsv};
/// use tinct_color::DeviceColor;
///
/// let mut hsv = Hsv::from_device(&DeviceColor::<u8>::rgb(255, 0, 0));
/// hsv.hue_shift(120.0);
/// let rotated = hsv.to_device();
/// assert_eq!((rotated.r, rotated.g, rotated.b), (0, 255, 0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hsv<Q: Quantum> {
    /// Hue as a fraction of 360 degrees.
    pub hue: f64,
    /// Saturation fraction.
    pub saturation: f64,
    /// Value (brightness) fraction.
    pub value: f64,
    _precision: PhantomData<Q>,
}

impl<Q: Quantum> Hsv<Q> {
    /// Creates an HSV color from component fractions.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self { hue, saturation, value, _precision: PhantomData }
    }

    /// Decomposes a device color.
    ///
    /// Black decomposes to all-zero components; any achromatic color keeps
    /// hue at zero.
    pub fn from_device(color: &DeviceColor<Q>) -> Self {
        let r = color.r.to_norm();
        let g = color.g.to_norm();
        let b = color.b.to_norm();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        if max == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let delta = max - min;
        let saturation = delta / max;
        let value = max;
        if delta == 0.0 {
            return Self::new(0.0, saturation, value);
        }

        let mut hue = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + ((b - r) / delta)
        } else {
            4.0 + ((r - g) / delta)
        };
        hue /= 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }
        Self::new(hue, saturation, value)
    }

    /// Rotates the hue by `degrees`, wrapping back into [0, 1).
    pub fn hue_shift(&mut self, degrees: f64) {
        self.hue += degrees / 360.0;
        while self.hue >= 1.0 {
            self.hue -= 1.0;
        }
        while self.hue < 0.0 {
            self.hue += 1.0;
        }
    }
}

impl<Q: Quantum> ColorModel<Q> for Hsv<Q> {
    /// Six-sector HSV to RGB on the fractional part of the hue.
    fn to_device(&self) -> DeviceColor<Q> {
        if self.saturation == 0.0 {
            let v = Q::from_norm(self.value);
            return DeviceColor::rgb(v, v, v);
        }

        let h = 6.0 * (self.hue - self.hue.floor());
        let f = h - h.floor();
        let p = self.value * (1.0 - self.saturation);
        let q = self.value * (1.0 - (self.saturation * f));
        let t = self.value * (1.0 - (self.saturation * (1.0 - f)));

        let (r, g, b) = match h as i32 {
            1 => (q, self.value, p),
            2 => (p, self.value, t),
            3 => (p, q, self.value),
            4 => (t, p, self.value),
            5 => (self.value, p, q),
            _ => (self.value, t, p),
        };
        DeviceColor::rgb(Q::from_norm(r), Q::from_norm(g), Q::from_norm(b))
    }
}

impl<Q: Quantum> PartialEq for Hsv<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.to_device() == other.to_device()
    }
}

impl<Q: Quantum> PartialOrd for Hsv<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_device().partial_cmp(&other.to_device())
    }
}

impl<Q: Quantum> fmt::Display for Hsv<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_device().fmt(f)
    }
}
