//! Grayscale shade model.

use crate::error::{ModelError, ModelResult};
use crate::model::ColorModel;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use tinct_color::DeviceColor;
use tinct_core::Quantum;

/// A single shade in [0, 1], 0 black and 1 white.
///
/// The constructor rejects out-of-range shades while
/// [`set_shade`](Gray::set_shade) silently ignores them; the two are
/// deliberately not unified.
///
/// ```
/// use tinct_models::{ColorModel, Gray};
///
/// let gray = Gray::<u8>::new(0.5).unwrap();
/// assert_eq!(gray.to_device().r, 127);
/// assert!(Gray::<u8>::new(1.01).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Gray<Q: Quantum> {
    shade: f64,
    _precision: PhantomData<Q>,
}

impl<Q: Quantum> Gray<Q> {
    /// Creates a gray from a shade in [0, 1].
    pub fn new(shade: f64) -> ModelResult<Self> {
        if shade < 0.0 || shade > 1.0 {
            return Err(ModelError::ShadeOutOfRange(shade));
        }
        Ok(Self { shade, _precision: PhantomData })
    }

    /// The current shade.
    pub fn shade(&self) -> f64 {
        self.shade
    }

    /// Sets the shade. Out-of-range values are ignored, unlike the
    /// constructor.
    pub fn set_shade(&mut self, shade: f64) {
        if shade < 0.0 || shade > 1.0 {
            return;
        }
        self.shade = shade;
    }

    /// Decomposes a device color; the normalized red channel becomes the
    /// shade.
    pub fn from_device(color: &DeviceColor<Q>) -> Self {
        Self { shade: color.r.to_norm(), _precision: PhantomData }
    }
}

impl<Q: Quantum> ColorModel<Q> for Gray<Q> {
    fn to_device(&self) -> DeviceColor<Q> {
        let sample = Q::from_norm(self.shade);
        DeviceColor::rgb(sample, sample, sample)
    }
}

impl<Q: Quantum> PartialEq for Gray<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.to_device() == other.to_device()
    }
}

impl<Q: Quantum> PartialOrd for Gray<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_device().partial_cmp(&other.to_device())
    }
}

impl<Q: Quantum> fmt::Display for Gray<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_device().fmt(f)
    }
}
