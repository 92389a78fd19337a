//! Percentage value type.
//!
//! Stored on a 0-100 scale like its textual form, so `Percentage::new(50.0)`
//! means 50%. Values outside 0-100 are representable; callers that need a
//! bounded tolerance clamp on their side.

use crate::quantum::Quantum;
use std::fmt;

/// A percentage on a 0-100 scale.
///
/// ```
/// use tinct_core::Percentage;
///
/// let half = Percentage::new(50.0);
/// assert_eq!(half.multiply(250.0), 125.0);
/// assert_eq!(half.to_string(), "50%");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Percentage(f64);

impl Percentage {
    /// Creates a percentage from a 0-100 scaled value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The 0-100 scaled value.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Scales `value` by this percentage (`value * pct / 100`).
    #[inline]
    pub fn multiply(&self, value: f64) -> f64 {
        value * self.0 / 100.0
    }

    /// This percentage expressed in sample units of the precision `Q`.
    ///
    /// Used for tolerance thresholds: 50% under `u8` is 127.5 sample units.
    #[inline]
    pub fn to_quantum<Q: Quantum>(&self) -> f64 {
        self.0 / 100.0 * Q::MAX_F64
    }
}

impl From<f64> for Percentage {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Percentage {
    fn from(value: i32) -> Self {
        Self(value as f64)
    }
}

impl fmt::Display for Percentage {
    /// Renders with at most two decimal digits, trailing zeros trimmed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = format!("{:.2}", self.0);
        let s = s.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{}%", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn multiply_scales() {
        assert_relative_eq!(Percentage::new(50.0).multiply(255.0), 127.5);
        assert_relative_eq!(Percentage::new(0.0).multiply(255.0), 0.0);
        assert_relative_eq!(Percentage::new(200.0).multiply(10.0), 20.0);
    }

    #[test]
    fn quantum_units() {
        assert_relative_eq!(Percentage::new(100.0).to_quantum::<u8>(), 255.0);
        assert_relative_eq!(Percentage::new(50.0).to_quantum::<u16>(), 32767.5);
        assert_relative_eq!(Percentage::new(25.0).to_quantum::<f32>(), 0.25);
    }

    #[test]
    fn display_trims_zeros() {
        assert_eq!(Percentage::new(50.0).to_string(), "50%");
        assert_eq!(Percentage::new(12.5).to_string(), "12.5%");
        assert_eq!(Percentage::new(33.333).to_string(), "33.33%");
        assert_eq!(Percentage::new(0.0).to_string(), "0%");
    }

    #[test]
    fn ordering() {
        assert!(Percentage::new(10.0) < Percentage::new(20.0));
        assert_eq!(Percentage::from(50), Percentage::new(50.0));
    }
}
