//! Colour parsing and palette selection
//!
//! All colours are stored in RGB channel order, matching the pixel layout of
//! [`image::RgbImage`] so parsed colours can be written to the canvas directly.

/// Hex string parsing and formatting
pub mod hex;
/// Built-in presets and explicit colour lists
pub mod palette;

pub use hex::{format_hex, parse_hex};
pub use palette::{Palette, PaletteName};
