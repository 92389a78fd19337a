//! Color comparison command.

use crate::DiffArgs;
use super::Depth;
use anyhow::{bail, Result};
use tinct_core::{Percentage, Quantum};
use tracing::debug;

pub fn run(args: DiffArgs, verbose: bool, depth: Depth) -> Result<()> {
    match depth {
        Depth::Eight => execute::<u8>(&args, verbose),
        Depth::Sixteen => execute::<u16>(&args, verbose),
        Depth::Float => execute::<f32>(&args, verbose),
    }
}

fn execute<Q: Quantum>(args: &DiffArgs, verbose: bool) -> Result<()> {
    let a = super::parse_color::<Q>(&args.a)?;
    let b = super::parse_color::<Q>(&args.b)?;
    debug!(a = %args.a, b = %args.b, fuzz = args.fuzz, "comparing");

    println!("Comparing {} vs {}", args.a, args.b);
    if verbose {
        println!("  {} vs {}", a, b);
    }
    println!("  Red delta:   {:.6}", (a.r.to_norm() - b.r.to_norm()).abs());
    println!("  Green delta: {:.6}", (a.g.to_norm() - b.g.to_norm()).abs());
    println!("  Blue delta:  {:.6}", (a.b.to_norm() - b.b.to_norm()).abs());
    println!("  Alpha delta: {:.6}", (a.a.to_norm() - b.a.to_norm()).abs());
    println!("  Exact:       {}", a == b);
    let ordering = match a.partial_cmp(&b) {
        Some(std::cmp::Ordering::Less) => "a < b",
        Some(std::cmp::Ordering::Greater) => "a > b",
        Some(std::cmp::Ordering::Equal) => "a == b",
        None => "unordered",
    };
    println!("  Ordering:    {ordering}");

    if !a.fuzzy_equals(&b, Percentage::new(args.fuzz)) {
        bail!("FAIL: colors differ beyond {}% fuzz", args.fuzz);
    }
    println!("PASS");
    Ok(())
}
