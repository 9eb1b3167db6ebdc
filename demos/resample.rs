//! Nearest-neighbour and bilinear enlargement of a 4x4 grayscale matrix.
//!
//! Run: cargo run --bin resample -- --factor 4 --bw

use anyhow::{Context, Result};
use clap::Parser;
use pixconn_core::{ResampleMethod, resample};
use pixconn_demos::{checkerboard, format_matrix};

#[derive(Debug, Parser)]
#[command(
    name = "resample",
    about = "Enlarge a 4x4 matrix by nearest-neighbour and bilinear interpolation"
)]
struct Args {
    /// Integer enlargement factor.
    #[arg(long, short, default_value_t = 3)]
    factor: usize,

    /// Use the black/white (0/255) checkerboard.
    #[arg(long)]
    bw: bool,

    /// Only run this method (nearest or bilinear).
    #[arg(long)]
    method: Option<ResampleMethod>,
}

fn main() -> Result<()> {
    pixconn_demos::init_logging();
    let args = Args::parse();

    let img = checkerboard(args.bw).context("building checkerboard")?;
    let methods = match args.method {
        Some(m) => vec![m],
        None => ResampleMethod::ALL.to_vec(),
    };

    println!("--- Original {}x{} ---", img.rows(), img.cols());
    println!("{}\n", format_matrix(&img));

    for method in methods {
        let out = resample(&img, args.factor, method)
            .with_context(|| format!("{method} resample by {}", args.factor))?;
        println!("--- {method} {}x{} ---", out.rows(), out.cols());
        println!("{}\n", format_matrix(&out));
    }

    println!("--- Histogram (non-empty bins) ---");
    for (value, count) in img.histogram().iter().enumerate().filter(|(_, n)| **n > 0) {
        println!("{value:>3}: {count}");
    }
    Ok(())
}
