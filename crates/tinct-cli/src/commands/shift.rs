//! Hue rotation command.

use crate::ShiftArgs;
use super::Depth;
use anyhow::Result;
use tinct_core::Quantum;
use tinct_models::{ColorModel, Hsv};
use tracing::debug;

pub fn run(args: ShiftArgs, verbose: bool, depth: Depth) -> Result<()> {
    match depth {
        Depth::Eight => execute::<u8>(&args, verbose),
        Depth::Sixteen => execute::<u16>(&args, verbose),
        Depth::Float => execute::<f32>(&args, verbose),
    }
}

fn execute<Q: Quantum>(args: &ShiftArgs, verbose: bool) -> Result<()> {
    let color = super::parse_color::<Q>(&args.color)?;

    let mut hsv = Hsv::from_device(&color);
    hsv.hue_shift(args.degrees);
    debug!(degrees = args.degrees, hue = hsv.hue, "rotated hue");

    // Rotation goes through opaque HSV; carry the source alpha over
    let mut shifted = hsv.to_device();
    shifted.a = color.a;

    println!("{} -> {}", color.to_short_string(), shifted.to_short_string());
    if verbose {
        println!("  hue:        {:.4}", hsv.hue);
        println!("  saturation: {:.4}", hsv.saturation);
        println!("  value:      {:.4}", hsv.value);
    }
    Ok(())
}
