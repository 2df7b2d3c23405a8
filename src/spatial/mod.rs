//! Spatial data structures and raster operations on region masks
//!
//! This module contains:
//! - The bit-packed [`Mask`] shared by every generator
//! - Scanline polygon filling with seamless tiling offsets
//! - Square structuring-element dilation for outlines

/// Bit-packed boolean canvas masks
pub mod mask;
/// Morphological dilation and boundary bands
pub mod morphology;
/// Scanline polygon rasterization into masks
pub mod polygon;

pub use mask::Mask;
