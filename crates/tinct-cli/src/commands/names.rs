//! Catalog listing command.

use crate::NamesArgs;
use anyhow::Result;
use tinct_color::{named, DeviceColor};

pub fn run(args: NamesArgs, verbose: bool) -> Result<()> {
    let pattern = args.pattern.as_deref().map(str::to_ascii_lowercase);

    let mut count = 0usize;
    for entry in named::CATALOG {
        if let Some(ref pattern) = pattern {
            if !entry.name.contains(pattern.as_str()) {
                continue;
            }
        }
        let [r, g, b, a] = entry.rgba;
        let color = DeviceColor::<u8>::from_rgba_bytes(r, g, b, a);
        println!("{:<22} {}", entry.name, color.to_hex_string()?);
        count += 1;
    }

    if verbose {
        println!("{count} names");
    }
    Ok(())
}
