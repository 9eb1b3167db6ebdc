//! **pixconn-core** — raster types for pixel-connectivity analysis.
//!
//! This crate provides the foundational types used across the *pixconn*
//! workspace: grid geometry, the validated binary [`Raster`] that connectivity
//! searches run over, and an 8-bit [`GrayImage`] with histogram, threshold and
//! resampling operations.

pub mod error;
pub mod geom;
pub mod gray;
pub mod raster;
pub mod resample;

pub use error::RasterError;
pub use geom::{Bounds, Coord};
pub use gray::GrayImage;
pub use raster::{BACKGROUND, FOREGROUND, Raster};
pub use resample::{ResampleMethod, resample};
