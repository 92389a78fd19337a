//! Bilevel black/white model.

use crate::error::{ModelError, ModelResult};
use crate::model::ColorModel;
use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use tinct_color::DeviceColor;
use tinct_core::Quantum;

/// A single bit of color: opaque black or opaque white.
///
/// Only exactly those two device colors decompose; anything else, including
/// transparent black, is rejected.
#[derive(Debug, Clone, Copy)]
pub struct Mono<Q: Quantum> {
    /// Whether the color is black.
    pub is_black: bool,
    _precision: PhantomData<Q>,
}

impl<Q: Quantum> Mono<Q> {
    /// Opaque black.
    pub fn black() -> Self {
        Self { is_black: true, _precision: PhantomData }
    }

    /// Opaque white.
    pub fn white() -> Self {
        Self { is_black: false, _precision: PhantomData }
    }

    /// Decomposes a device color, failing unless it is exactly opaque black
    /// or opaque white.
    pub fn from_device(color: &DeviceColor<Q>) -> ModelResult<Self> {
        if *color == DeviceColor::black() {
            Ok(Self::black())
        } else if *color == DeviceColor::white() {
            Ok(Self::white())
        } else {
            Err(ModelError::NotMonochrome)
        }
    }
}

impl<Q: Quantum> ColorModel<Q> for Mono<Q> {
    fn to_device(&self) -> DeviceColor<Q> {
        if self.is_black {
            DeviceColor::black()
        } else {
            DeviceColor::white()
        }
    }
}

impl<Q: Quantum> PartialEq for Mono<Q> {
    fn eq(&self, other: &Self) -> bool {
        self.to_device() == other.to_device()
    }
}

impl<Q: Quantum> PartialOrd for Mono<Q> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_device().partial_cmp(&other.to_device())
    }
}

impl<Q: Quantum> fmt::Display for Mono<Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_device().fmt(f)
    }
}
