//! Integer-factor enlargement of a [`GrayImage`] by nearest-neighbour or
//! bilinear interpolation.

use std::fmt;
use std::str::FromStr;

use crate::error::RasterError;
use crate::geom::{Bounds, Coord};
use crate::gray::GrayImage;

/// Interpolation used by [`resample`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ResampleMethod {
    /// Each source sample is replicated into a `factor × factor` block.
    #[default]
    Nearest,
    /// Weighted blend of the four surrounding source samples, edge-clamped.
    Bilinear,
}

impl ResampleMethod {
    pub const ALL: [ResampleMethod; 2] = [ResampleMethod::Nearest, ResampleMethod::Bilinear];
}

impl fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => f.write_str("nearest"),
            Self::Bilinear => f.write_str("bilinear"),
        }
    }
}

impl FromStr for ResampleMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" | "nn" => Ok(Self::Nearest),
            "bilinear" | "linear" => Ok(Self::Bilinear),
            other => Err(format!("unknown resample method \u{201c}{other}\u{201d}")),
        }
    }
}

/// Enlarge `img` by an integer `factor` on both axes.
///
/// The output is `(rows * factor) × (cols * factor)`. A factor of 1 returns a
/// copy of the input for either method. Fails with
/// [`RasterError::ScaleOverflow`] if the output cannot be addressed.
pub fn resample(
    img: &GrayImage,
    factor: usize,
    method: ResampleMethod,
) -> Result<GrayImage, RasterError> {
    if factor == 0 {
        return Err(RasterError::ZeroFactor);
    }
    let bounds = img.bounds();
    let scaled = bounds
        .rows
        .checked_mul(factor)
        .zip(bounds.cols.checked_mul(factor))
        .and_then(|(rows, cols)| Bounds::checked(rows, cols))
        .ok_or(RasterError::ScaleOverflow { bounds, factor })?;

    log::debug!("resample {bounds} by {factor} ({method})");
    let mut out = GrayImage::blank(scaled);
    match method {
        ResampleMethod::Nearest => nearest(img, factor, &mut out),
        ResampleMethod::Bilinear => bilinear(img, factor, &mut out),
    }
    Ok(out)
}

fn nearest(img: &GrayImage, s: usize, out: &mut GrayImage) {
    for (i, row) in img.to_rows().into_iter().enumerate() {
        for (j, v) in row.into_iter().enumerate() {
            for r in 0..s {
                for c in 0..s {
                    out.set(Coord::new((i * s + r) as i32, (j * s + c) as i32), v);
                }
            }
        }
    }
}

fn bilinear(img: &GrayImage, s: usize, out: &mut GrayImage) {
    let scale = s as f64;
    for c in out.bounds().iter() {
        // Map back into source space; e.g. with s = 3, rows 0..12 map to 0..3.67.
        let src_r = f64::from(c.row) / scale;
        let src_c = f64::from(c.col) / scale;
        let r1 = src_r.floor();
        let c1 = src_c.floor();
        let alpha = src_r - r1;
        let beta = src_c - c1;
        let (r1, c1) = (r1 as i64, c1 as i64);

        // The output is empty whenever the input is, so reads always hit.
        let at = |row: i64, col: i64| f64::from(img.get_clamped(row, col).unwrap_or(0));
        let q11 = at(r1, c1);
        let q21 = at(r1 + 1, c1);
        let q12 = at(r1, c1 + 1);
        let q22 = at(r1 + 1, c1 + 1);

        let v = (1.0 - alpha) * (1.0 - beta) * q11
            + alpha * (1.0 - beta) * q21
            + (1.0 - alpha) * beta * q12
            + alpha * beta * q22;
        out.set(c, v as u8);
    }
}
