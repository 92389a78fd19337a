//! Luma/chroma (YUV) model.

use crate::model::ColorModel;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use tinct_color::DeviceColor;
use tinct_core::Quantum;

/// YUV components.
///
/// Luma `y` is a fraction in [0, 1]; the chroma planes are biased by +0.5 so
/// an achromatic color sits at `u = v = 0.5`. Saturated colors can push a
/// chroma component outside [0, 1]; deriving a device color clamps each
/// channel back into range.
#[derive(Debug, Clone, Copy)]
pub struct Yuv<Q: Quantum> {
    /// Luma fraction.
    pub y: f64,
    /// Blue-difference chroma, biased by +0.5.
    pub u: f64,
    /// Red-difference chroma, biased by +0.5.
    pub v: f64,
    _precision: PhantomData<Q>,
}

impl<Q: Quantum> Yuv<Q> {
    /// Creates a YUV color from raw components.
    pub fn new(y: f64, u: f64, v: f64) -> Self {
        Self { y, u, v, _precision: PhantomData }
    }

    /// Decomposes a device color with Rec. 601 luma weights.
    pub fn from_device(color: &DeviceColor<Q>) -> Self {
        let r = color.r.to_norm();
        let g = color.g.to_norm();
        let b = color.b.to_norm();
        Self::new(
            (0.298839 * r) + (0.586811 * g) + (0.11435 * b),
            (-0.147130 * r) - (0.288860 * g) + (0.435990 * b) + 0.5,
            (0.615000 * r) - (0.514990 * g) - (0.100010 * b) + 0.5,
        )
    }
}

impl<Q: Quantum> ColorModel<Q> for Yuv<Q> {
    fn to_device(&self) -> DeviceColor<Q> {
        let u = self.u - 0.5;
        let v = self.v - 0.5;
        DeviceColor::rgb(
            Q::from_norm(self.y - (3.945707070708279e-05 * u) + (1.1398279671717170825 * v)),
            Q::from_norm(self.y - (0.3946101641414141437 * u) - (0.5805003156565656797 * v)),
            Q::from_norm(self.y + (2.0319996843434342537 * u) - (4.813762626262513e-04 * v)),
        )
    }
}

impl<Q: Quantum> PartialEq for Yuv<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.to_device() == other.to_device()
    }
}

impl<Q: Quantum> PartialOrd for Yuv<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_device().partial_cmp(&other.to_device())
    }
}

impl<Q: Quantum> fmt::Display for Yuv<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_device().fmt(f)
    }
}
