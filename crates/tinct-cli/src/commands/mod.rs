//! CLI command implementations

pub mod convert;
pub mod diff;
pub mod names;
pub mod parse;
pub mod shift;

use anyhow::{bail, Context, Result};
use tinct_color::DeviceColor;
use tinct_core::Quantum;

/// Channel precision selected with `--depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Depth {
    /// 8-bit samples (0-255)
    Eight,
    /// 16-bit samples (0-65535)
    Sixteen,
    /// Float samples (nominal 0.0-1.0)
    Float,
}

/// Parse the `--depth` flag value
pub fn parse_depth(value: &str) -> Result<Depth> {
    match value {
        "8" => Ok(Depth::Eight),
        "16" => Ok(Depth::Sixteen),
        "float" | "f32" => Ok(Depth::Float),
        _ => bail!("Unknown depth '{}' (expected 8, 16, or float)", value),
    }
}

/// Parse a color literal at precision `Q`
pub fn parse_color<Q: Quantum>(value: &str) -> Result<DeviceColor<Q>> {
    value
        .parse::<DeviceColor<Q>>()
        .with_context(|| format!("Failed to parse color: {value:?}"))
}
