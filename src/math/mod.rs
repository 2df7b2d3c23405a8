//! Mathematical utilities for resampling and geometry

/// Plane geometry for stroke spines and Voronoi cells
pub mod geometry;
/// Nearest-neighbour and bicubic raster resampling
pub mod interpolation;
