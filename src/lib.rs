//! Procedural camouflage pattern generation
//!
//! Builds large tileable raster images by compositing randomly shaped colour regions
//! over a dark noise base. Each palette colour becomes one layer whose region mask comes
//! from one of four stochastic generators (organic blobs, jagged polygons, m90 Voronoi
//! cells, tapered brush strokes), optionally textured with digital noise and outlined.
//! Rain streaks and an occlusion grid can be drawn over the finished composite.

#![forbid(unsafe_code)]

/// Layer compositing driver, texture and overlay stages, and batch generation
pub mod algorithm;
/// Hex colour parsing and built-in palettes
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Raster resampling and plane geometry utilities
pub mod math;
/// Region mask generators for the four pattern styles
pub mod pattern;
/// Bit-packed masks, polygon rasterization and morphology
pub mod spatial;

pub use io::error::{CamoError, Result};
