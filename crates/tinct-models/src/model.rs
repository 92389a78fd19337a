//! Common surface of the alternative color models.

use tinct_color::DeviceColor;
use tinct_core::{Percentage, Quantum};

/// A color model whose component fields are the write side and whose device
/// color is the read side.
///
/// [`to_device`](ColorModel::to_device) derives a fresh device color from
/// the current components on every call; nothing is cached, so component
/// writes can never leave a stale derived value behind. Comparison and
/// display on the model types go through this derivation, which also means
/// two models with different components that quantize to the same samples
/// compare equal.
pub trait ColorModel<Q: Quantum> {
    /// Derives the device color for the current component values.
    fn to_device(&self) -> DeviceColor<Q>;

    /// Tolerance comparison through the derived device colors.
    fn fuzzy_equals(&self, other: &Self, fuzz: Percentage) -> bool {
        self.to_device().fuzzy_equals(&other.to_device(), fuzz)
    }
}
