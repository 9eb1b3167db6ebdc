//! An 8-bit single-channel image, the input side of thresholding,
//! histograms and resampling.

use crate::error::RasterError;
use crate::geom::{Bounds, Coord};
use crate::raster::{BACKGROUND, FOREGROUND, Raster};

/// A `rows × cols` grayscale image with row-major `u8` samples.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")
)]
pub struct GrayImage {
    bounds: Bounds,
    samples: Vec<u8>,
}

impl GrayImage {
    /// Build an image from a flat row-major buffer.
    pub fn new(rows: usize, cols: usize, samples: Vec<u8>) -> Result<Self, RasterError> {
        let bounds =
            Bounds::checked(rows, cols).ok_or(RasterError::TooLarge { rows, cols })?;
        if samples.len() != bounds.len() {
            return Err(RasterError::DataLength {
                rows,
                cols,
                expected: bounds.len(),
                found: samples.len(),
            });
        }
        Ok(Self { bounds, samples })
    }

    /// A black image of the given size.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self, RasterError> {
        let bounds =
            Bounds::checked(rows, cols).ok_or(RasterError::TooLarge { rows, cols })?;
        Ok(Self::blank(bounds))
    }

    pub(crate) fn blank(bounds: Bounds) -> Self {
        Self {
            bounds,
            samples: vec![0; bounds.len()],
        }
    }

    /// Build an image from a slice of equally sized rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, RasterError> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut samples = Vec::with_capacity(rows.len() * cols);
        for (i, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != cols {
                return Err(RasterError::InconsistentSize {
                    row: i,
                    expected: cols,
                    found: r.len(),
                });
            }
            samples.extend_from_slice(r);
        }
        Self::new(rows.len(), cols, samples)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// The sample at `c`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<u8> {
        self.bounds.index(c).map(|i| self.samples[i])
    }

    /// The sample at `(row, col)` with both axes clamped to the image edges,
    /// or `None` for an empty image.
    #[inline]
    pub(crate) fn get_clamped(&self, row: i64, col: i64) -> Option<u8> {
        if self.bounds.is_empty() {
            return None;
        }
        let r = row.clamp(0, self.bounds.rows as i64 - 1) as usize;
        let c = col.clamp(0, self.bounds.cols as i64 - 1) as usize;
        Some(self.samples[r * self.bounds.cols + c])
    }

    /// Set the sample at `c`. Does nothing if out of bounds.
    pub fn set(&mut self, c: Coord, v: u8) {
        if let Some(i) = self.bounds.index(c) {
            self.samples[i] = v;
        }
    }

    /// Raw row-major samples.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// The image as a list of rows.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        if self.bounds.cols == 0 {
            return vec![Vec::new(); self.bounds.rows];
        }
        self.samples
            .chunks(self.bounds.cols)
            .map(<[u8]>::to_vec)
            .collect()
    }

    /// Count of samples at each intensity level.
    pub fn histogram(&self) -> [u32; 256] {
        let mut hist = [0u32; 256];
        for &v in &self.samples {
            hist[v as usize] += 1;
        }
        hist
    }

    /// Binarize: samples `>= level` become foreground.
    pub fn threshold(&self, level: u8) -> Raster {
        let cells = self
            .samples
            .iter()
            .map(|&v| if v >= level { FOREGROUND } else { BACKGROUND })
            .collect();
        Raster::from_parts(self.bounds, cells)
    }
}

impl TryFrom<Vec<Vec<u8>>> for GrayImage {
    type Error = RasterError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, RasterError> {
        Self::from_rows(&rows)
    }
}

impl From<GrayImage> for Vec<Vec<u8>> {
    fn from(g: GrayImage) -> Self {
        g.to_rows()
    }
}
