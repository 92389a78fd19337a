//! Model conversion command.
//!
//! Decomposes a device color into one of the alternative models, prints the
//! model components, then derives the device color back so quantization is
//! visible.

use crate::ConvertArgs;
use super::Depth;
use anyhow::{bail, Result};
use tinct_color::DeviceColor;
use tinct_core::Quantum;
use tinct_models::{Cmyk, ColorModel, Gray, Hsl, Hsv, Mono, Yuv};
use tracing::debug;

pub fn run(args: ConvertArgs, verbose: bool, depth: Depth) -> Result<()> {
    match depth {
        Depth::Eight => execute::<u8>(&args, verbose),
        Depth::Sixteen => execute::<u16>(&args, verbose),
        Depth::Float => execute::<f32>(&args, verbose),
    }
}

fn execute<Q: Quantum>(args: &ConvertArgs, verbose: bool) -> Result<()> {
    let color = super::parse_color::<Q>(&args.color)?;
    debug!(color = %args.color, model = %args.to, "converting");

    println!("{} as {}", args.color, args.to);
    match args.to.as_str() {
        "gray" | "grey" => {
            let gray = Gray::from_device(&color);
            println!("  shade:      {:.4}", gray.shade());
            report(&gray.to_device(), verbose);
        }
        "hsl" => {
            let hsl = Hsl::from_device(&color);
            println!("  hue:        {:.4}", hsl.hue);
            println!("  saturation: {:.4}", hsl.saturation);
            println!("  lightness:  {:.4}", hsl.lightness);
            report(&hsl.to_device(), verbose);
        }
        "hsv" => {
            let hsv = Hsv::from_device(&color);
            println!("  hue:        {:.4}", hsv.hue);
            println!("  saturation: {:.4}", hsv.saturation);
            println!("  value:      {:.4}", hsv.value);
            report(&hsv.to_device(), verbose);
        }
        "cmyk" => {
            let cmyk = Cmyk::from_device(&color);
            println!(
                "  c: {}  m: {}  y: {}  k: {}",
                cmyk.c().to_byte(),
                cmyk.m().to_byte(),
                cmyk.y().to_byte(),
                cmyk.k().to_byte()
            );
            report(&cmyk.to_device(), verbose);
        }
        "yuv" => {
            let yuv = Yuv::from_device(&color);
            println!("  y:          {:.4}", yuv.y);
            println!("  u:          {:.4}", yuv.u);
            println!("  v:          {:.4}", yuv.v);
            report(&yuv.to_device(), verbose);
        }
        "mono" => {
            let mono = Mono::from_device(&color)?;
            println!("  level:      {}", if mono.is_black { "black" } else { "white" });
            report(&mono.to_device(), verbose);
        }
        other => bail!("Unknown model '{}' (expected gray, hsl, hsv, cmyk, yuv, or mono)", other),
    }
    Ok(())
}

/// Print the device color the model derives back to.
fn report<Q: Quantum>(device: &DeviceColor<Q>, verbose: bool) {
    println!("  device:     {device}");
    if verbose {
        println!("  short:      {}", device.to_short_string());
        println!("  bytes:      {:?}", device.to_bytes());
    }
}
