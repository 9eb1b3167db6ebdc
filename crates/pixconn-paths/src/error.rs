use std::fmt;

use pixconn_core::{Coord, RasterError};
use thiserror::Error;

/// Which end of a query a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// Caller-input faults, reported before any search work is done.
///
/// An unreachable end cell is not an error; see
/// [`PathReport::NotFound`](crate::PathReport::NotFound).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("{endpoint} coordinate {coord} is outside the {rows}x{cols} raster")]
    OutOfBounds {
        endpoint: Endpoint,
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    #[error("invalid raster: {0}")]
    InvalidInput(#[from] RasterError),
    /// A [`Path`](crate::Path) built from an empty cell list.
    #[error("path must contain at least one cell")]
    EmptyPath,
    /// A [`Path`](crate::Path) that visits a cell twice.
    #[error("path visits {0} more than once")]
    RepeatedCell(Coord),
}
