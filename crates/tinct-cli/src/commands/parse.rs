//! Color literal inspection command.

use crate::ParseArgs;
use super::Depth;
use anyhow::Result;
use tinct_core::Quantum;
use tracing::debug;

pub fn run(args: ParseArgs, verbose: bool, depth: Depth) -> Result<()> {
    match depth {
        Depth::Eight => execute::<u8>(&args, verbose),
        Depth::Sixteen => execute::<u16>(&args, verbose),
        Depth::Float => execute::<f32>(&args, verbose),
    }
}

fn execute<Q: Quantum>(args: &ParseArgs, verbose: bool) -> Result<()> {
    for value in &args.colors {
        let color = super::parse_color::<Q>(value)?;
        debug!(value = %value, "parsed color");

        println!("{value}");
        println!(
            "  Samples:   r={} g={} b={} a={}",
            color.r.to_f64(),
            color.g.to_f64(),
            color.b.to_f64(),
            color.a.to_f64()
        );
        println!("  Canonical: {color}");
        println!("  Short:     {}", color.to_short_string());
        if let Ok(hex) = color.to_hex_string() {
            println!("  Hex:       {hex}");
        }
        if verbose {
            println!("  Bytes:     {:?}", color.to_bytes());
            println!("  Cmyk:      {}", color.is_cmyk());
        }
    }
    Ok(())
}
