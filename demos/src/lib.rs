//! Shared inputs and formatting for the pixconn demo binaries.
//!
//! Demonstrates: parsing and generating binary rasters, shortest paths
//! under 4-, 8- and m-connectivity, and nearest/bilinear enlargement of a
//! small grayscale matrix.

use pixconn_core::{Coord, GrayImage, Raster, RasterError};
use rand::{Rng, SeedableRng};

/// The 4×4 raster the connectivity demo searches by default.
pub const REFERENCE_RASTER: &str = "\
1010
1101
1010
0101";

/// Dark/bright checkerboard with distinct values.
pub const CHECKER_GRAY: [[u8; 4]; 4] = [
    [10, 200, 10, 200],
    [200, 50, 200, 50],
    [10, 200, 10, 200],
    [200, 50, 200, 50],
];

/// Pure black/white checkerboard.
pub const CHECKER_BW: [[u8; 4]; 4] = [
    [0, 255, 0, 255],
    [255, 0, 255, 0],
    [0, 255, 0, 255],
    [255, 0, 255, 0],
];

pub fn reference_raster() -> Result<Raster, RasterError> {
    Raster::parse(REFERENCE_RASTER)
}

pub fn checkerboard(bw: bool) -> Result<GrayImage, RasterError> {
    GrayImage::from_rows(if bw { &CHECKER_BW } else { &CHECKER_GRAY })
}

/// A seeded random raster where each cell is foreground with probability
/// `density` (clamped to `[0, 1]`).
pub fn random_raster(
    rows: usize,
    cols: usize,
    density: f64,
    seed: u64,
) -> Result<Raster, RasterError> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let p = density.clamp(0.0, 1.0);
    let data = (0..rows * cols)
        .map(|_| u8::from(rng.random_bool(p)))
        .collect();
    Raster::new(rows, cols, data)
}

/// Parse a 1-based `ROW,COL` pair into a 0-based [`Coord`].
pub fn parse_one_based(s: &str) -> Result<Coord, String> {
    let (r, c) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let parse = |v: &str| -> Result<i32, String> {
        let n: i32 = v
            .trim()
            .parse()
            .map_err(|e| format!("invalid coordinate \u{201c}{v}\u{201d}: {e}"))?;
        if n < 1 {
            return Err(format!("coordinates are 1-based, got {n}"));
        }
        Ok(n - 1)
    };
    Ok(Coord::new(parse(r)?, parse(c)?))
}

/// Parse a `ROWSxCOLS` size.
pub fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (r, c) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected ROWSxCOLS, got \u{201c}{s}\u{201d}"))?;
    let rows = r.trim().parse().map_err(|e| format!("invalid rows: {e}"))?;
    let cols = c.trim().parse().map_err(|e| format!("invalid cols: {e}"))?;
    Ok((rows, cols))
}

/// Render an image as right-aligned rows of sample values.
pub fn format_matrix(img: &GrayImage) -> String {
    img.to_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|v| format!("{v:>3}"))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Install the logger; `RUST_LOG` overrides the default `warn` filter.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_based_coordinates() {
        assert_eq!(parse_one_based("1,1"), Ok(Coord::new(0, 0)));
        assert_eq!(parse_one_based(" 4, 3 "), Ok(Coord::new(3, 2)));
        assert!(parse_one_based("0,1").is_err());
        assert!(parse_one_based("1;1").is_err());
        assert!(parse_one_based("a,1").is_err());
    }

    #[test]
    fn sizes() {
        assert_eq!(parse_size("4x5"), Ok((4, 5)));
        assert_eq!(parse_size("10X2"), Ok((10, 2)));
        assert!(parse_size("4by5").is_err());
    }

    #[test]
    fn random_raster_is_seeded() {
        let a = random_raster(6, 7, 0.5, 3).unwrap();
        let b = random_raster(6, 7, 0.5, 3).unwrap();
        assert_eq!(a, b);
        assert_eq!((a.rows(), a.cols()), (6, 7));
        assert_eq!(random_raster(3, 3, 1.5, 0).unwrap().foreground_count(), 9);
        assert_eq!(random_raster(3, 3, -1.0, 0).unwrap().foreground_count(), 0);
    }

    #[test]
    fn reference_inputs_are_valid() {
        assert_eq!(reference_raster().unwrap().foreground_count(), 9);
        assert_eq!(checkerboard(true).unwrap().histogram()[255], 8);
    }

    #[test]
    fn matrix_formatting() {
        let g = GrayImage::from_rows(&[[0u8, 255], [7, 10]]).unwrap();
        assert_eq!(format_matrix(&g), "  0 255\n  7  10");
    }
}
