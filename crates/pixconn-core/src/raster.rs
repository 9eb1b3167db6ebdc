//! The binary [`Raster`]: an immutable `rows × cols` grid of 0/1 samples.
//!
//! Every constructor validates its input. A value other than 0 or 1 is
//! rejected with [`RasterError::InvalidValue`] instead of being coerced to
//! foreground, so a search never runs over a silently reinterpreted image.

use std::fmt;
use std::str::FromStr;

use crate::error::RasterError;
use crate::geom::{Bounds, Coord};

/// Background sample value.
pub const BACKGROUND: u8 = 0;
/// Foreground sample value.
pub const FOREGROUND: u8 = 1;

/// An immutable binary grid, indexed by `(row, col)` in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct Raster {
    bounds: Bounds,
    cells: Vec<u8>,
}

impl Raster {
    /// Build a raster from a flat row-major buffer.
    pub fn new(rows: usize, cols: usize, data: Vec<u8>) -> Result<Self, RasterError> {
        let bounds =
            Bounds::checked(rows, cols).ok_or(RasterError::TooLarge { rows, cols })?;
        if data.len() != bounds.len() {
            return Err(RasterError::DataLength {
                rows,
                cols,
                expected: bounds.len(),
                found: data.len(),
            });
        }
        if let Some(i) = data.iter().position(|&v| v > FOREGROUND) {
            return Err(RasterError::InvalidValue {
                value: data[i],
                at: bounds.coord(i),
            });
        }
        Ok(Self {
            bounds,
            cells: data,
        })
    }

    /// Caller guarantees `cells.len() == bounds.len()` and binary samples.
    pub(crate) fn from_parts(bounds: Bounds, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), bounds.len());
        Self { bounds, cells }
    }

    /// Build a raster from a slice of equally sized rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, RasterError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(RasterError::InconsistentSize {
                    row: i,
                    expected: cols,
                    found: r.len(),
                });
            }
            data.extend_from_slice(r);
        }
        Self::new(rows.len(), cols, data)
    }

    /// Parse a text raster: one line per row, `0`/`.` for background and
    /// `1`/`#` for foreground. Spaces and tabs are ignored, as are blank
    /// lines before the first and after the last row.
    pub fn parse(text: &str) -> Result<Self, RasterError> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return Self::new(0, 0, Vec::new());
        };

        let mut rows = Vec::with_capacity(last - first + 1);
        for (r, line) in lines[first..=last].iter().enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for ch in line.chars() {
                let v = match ch {
                    '0' | '.' => BACKGROUND,
                    '1' | '#' => FOREGROUND,
                    ' ' | '\t' | '\r' => continue,
                    _ => {
                        return Err(RasterError::InvalidRune {
                            ch,
                            at: Coord::new(r as i32, row.len() as i32),
                        });
                    }
                };
                row.push(v);
            }
            rows.push(row);
        }
        Self::from_rows(&rows)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    /// The raster extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether `c` lies inside the raster.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.bounds.contains(c)
    }

    /// The sample at `c`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<u8> {
        self.bounds.index(c).map(|i| self.cells[i])
    }

    /// Whether `c` is an in-bounds foreground cell. Out-of-bounds cells
    /// count as background.
    #[inline]
    pub fn is_foreground(&self, c: Coord) -> bool {
        self.get(c) == Some(FOREGROUND)
    }

    /// Number of foreground cells.
    pub fn foreground_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == FOREGROUND).count()
    }

    /// Iterate over `(Coord, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, u8)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// The raster as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.bounds.cols == 0 {
            return vec![Vec::new(); self.bounds.rows];
        }
        self.cells
            .chunks(self.bounds.cols)
            .map(<[u8]>::to_vec)
            .collect()
    }
}

impl FromStr for Raster {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, RasterError> {
        Self::parse(s)
    }
}

impl TryFrom<Vec<Vec<u8>>> for Raster {
    type Error = RasterError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, RasterError> {
        Self::from_rows(&rows)
    }
}

impl From<Raster> for Vec<Vec<u8>> {
    fn from(r: Raster) -> Self {
        r.to_rows()
    }
}

impl fmt::Display for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_rows().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for v in row {
                write!(f, "{v}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "\
1010
1101
1010
0101";

    #[test]
    fn parse_and_size() {
        let r = Raster::parse(REFERENCE).unwrap();
        assert_eq!(r.rows(), 4);
        assert_eq!(r.cols(), 4);
        assert_eq!(r.foreground_count(), 9);
        assert!(r.is_foreground(Coord::new(0, 0)));
        assert!(!r.is_foreground(Coord::new(0, 1)));
        assert!(r.is_foreground(Coord::new(3, 3)));
    }

    #[test]
    fn parse_accepts_aliases_and_spacing() {
        let r: Raster = "\n  # . #\n  . # .\n\n".parse().unwrap();
        assert_eq!(r.to_rows(), vec![vec![1, 0, 1], vec![0, 1, 0]]);
    }

    #[test]
    fn parse_rejects_invalid_rune() {
        let err = Raster::parse("10\n1x").unwrap_err();
        assert_eq!(
            err,
            RasterError::InvalidRune {
                ch: 'x',
                at: Coord::new(1, 1)
            }
        );
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Raster::parse("101\n10").unwrap_err();
        assert_eq!(
            err,
            RasterError::InconsistentSize {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn non_binary_values_fail_fast() {
        let err = Raster::from_rows(&[[1u8, 0], [2, 1]]).unwrap_err();
        assert_eq!(
            err,
            RasterError::InvalidValue {
                value: 2,
                at: Coord::new(1, 0)
            }
        );
        assert!(Raster::new(1, 2, vec![255, 0]).is_err());
    }

    #[test]
    fn data_length_must_match() {
        let err = Raster::new(2, 2, vec![0, 1, 1]).unwrap_err();
        assert!(matches!(err, RasterError::DataLength { expected: 4, found: 3, .. }));

        let err = Raster::new(usize::MAX, 3, Vec::new()).unwrap_err();
        assert_eq!(err, RasterError::TooLarge { rows: usize::MAX, cols: 3 });
    }

    #[test]
    fn out_of_bounds_is_background() {
        let r = Raster::parse(REFERENCE).unwrap();
        assert_eq!(r.get(Coord::new(-1, 0)), None);
        assert_eq!(r.get(Coord::new(4, 0)), None);
        assert!(!r.is_foreground(Coord::new(0, 4)));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let r = Raster::parse(REFERENCE).unwrap();
        assert_eq!(r.to_string(), REFERENCE);
        assert_eq!(Raster::parse(&r.to_string()).unwrap(), r);
    }

    #[test]
    fn empty_text_is_empty_raster() {
        let r = Raster::parse("\n\n").unwrap();
        assert!(r.bounds().is_empty());
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    fn iter_is_row_major() {
        let r = Raster::from_rows(&[[0u8, 1], [1, 0]]).unwrap();
        let items: Vec<_> = r.iter().collect();
        assert_eq!(items[1], (Coord::new(0, 1), 1));
        assert_eq!(items[2], (Coord::new(1, 0), 1));
    }
}
