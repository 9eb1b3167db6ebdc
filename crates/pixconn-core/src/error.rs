use thiserror::Error;

use crate::geom::{Bounds, Coord};

/// Errors raised while building or transforming a raster or image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// Row `row` has `found` samples while earlier rows have `expected`.
    #[error("raster: inconsistent size: row {row} has {found} columns, expected {expected}")]
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The flat sample buffer does not match `rows × cols`.
    #[error("raster: data length {found} does not match {rows}x{cols} (expected {expected})")]
    DataLength {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },
    /// A binary raster sample other than 0 or 1.
    #[error("raster contains invalid value {value} at {at}; only 0 and 1 are allowed")]
    InvalidValue { value: u8, at: Coord },
    /// A character in a text raster outside the allowed set.
    #[error("raster text contains invalid character \u{201c}{ch}\u{201d} at {at}")]
    InvalidRune { ch: char, at: Coord },
    /// Dimensions with more cells than can be addressed.
    #[error("raster: {rows}x{cols} is too large to address")]
    TooLarge { rows: usize, cols: usize },
    /// Resampling would produce an image too large to address.
    #[error("resample: {bounds} scaled by {factor} is too large to address")]
    ScaleOverflow { bounds: Bounds, factor: usize },
    /// A resampling factor of zero.
    #[error("resample factor must be at least 1")]
    ZeroFactor,
}
