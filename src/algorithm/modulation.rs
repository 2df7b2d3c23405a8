//! Digital modulation: blocky brightness speckle over a solid colour
//!
//! The same offset is added to all three channels of a pixel, so the texture varies
//! brightness while preserving hue. Arithmetic is carried out in `i16`, wide enough
//! for `[-255, 510]`, before clipping back to `u8`.

use crate::math::interpolation::nearest_index;
use image::{Rgb, RgbImage};
use ndarray::Array2;
use rand::Rng;

/// Add a signed offset to every channel and clip to [0, 255]
pub fn shift_color(color: Rgb<u8>, offset: i16) -> Rgb<u8> {
    Rgb(color
        .0
        .map(|channel| (i16::from(channel) + offset).clamp(0, 255) as u8))
}

/// Low-resolution offset field, upsampled by nearest-neighbour lookup on demand
///
/// Storing the low-resolution grid keeps memory proportional to
/// `(height / scale) * (width / scale)` instead of the full canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulationField {
    offsets: Array2<i16>,
    width: usize,
    height: usize,
}

impl ModulationField {
    /// Draw a field of offsets uniform in `[-density, density]`
    ///
    /// The grid has `(height / scale, width / scale)` cells, each side at least 1.
    /// Negative densities are treated as their magnitude.
    pub fn generate<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        density: i16,
        scale: usize,
        rng: &mut R,
    ) -> Self {
        let scale = scale.max(1);
        let rows = (height / scale).max(1);
        let cols = (width / scale).max(1);
        let density = density.saturating_abs();
        let offsets =
            Array2::from_shape_simple_fn((rows, cols), || rng.random_range(-density..=density));
        Self {
            offsets,
            width,
            height,
        }
    }

    /// Offset applied at canvas pixel `(x, y)`
    pub fn offset_at(&self, x: usize, y: usize) -> i16 {
        let (rows, cols) = self.offsets.dim();
        let row = nearest_index(y, rows, self.height);
        let col = nearest_index(x, cols, self.width);
        self.offsets.get((row, col)).copied().unwrap_or(0)
    }

    /// Modulated colour at canvas pixel `(x, y)`
    pub fn shade(&self, color: Rgb<u8>, x: usize, y: usize) -> Rgb<u8> {
        shift_color(color, self.offset_at(x, y))
    }

    /// Apply the field to every pixel of a layer image in place
    pub fn apply(&self, layer: &mut RgbImage) {
        for (x, y, pixel) in layer.enumerate_pixels_mut() {
            *pixel = self.shade(*pixel, x as usize, y as usize);
        }
    }
}

/// Texture a layer image in place with a freshly drawn modulation field
pub fn apply_digital_modulation<R: Rng + ?Sized>(
    layer: &mut RgbImage,
    density: i16,
    scale: usize,
    rng: &mut R,
) {
    let field = ModulationField::generate(
        layer.width() as usize,
        layer.height() as usize,
        density,
        scale,
        rng,
    );
    field.apply(layer);
}
