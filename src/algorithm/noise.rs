//! Blocky base noise and the dark starting image built from it

use crate::io::configuration::{
    BASE_BRIGHTNESS_FACTOR, BASE_BRIGHTNESS_OFFSET, BASE_NOISE_SCALE_MAX, BASE_NOISE_SCALE_MIN,
    BASE_NOISE_VALUE_MAX, BASE_NOISE_VALUE_MIN,
};
use crate::math::interpolation::resize_nearest;
use image::{Rgb, RgbImage};
use ndarray::Array2;
use rand::Rng;

/// Generate the full-resolution base luminance field
///
/// A random block size `s` in 100..255 is drawn, a `(height / s, width / s)` grid
/// (each side at least 1) is filled with values in 150..255, and the grid is
/// upsampled to `height` x `width` by nearest-neighbour lookup.
pub fn generate_noise_field<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Array2<u8> {
    let scale = rng.random_range(BASE_NOISE_SCALE_MIN..BASE_NOISE_SCALE_MAX);
    let rows = (height / scale).max(1);
    let cols = (width / scale).max(1);
    let small = Array2::from_shape_simple_fn((rows, cols), || {
        rng.random_range(BASE_NOISE_VALUE_MIN..BASE_NOISE_VALUE_MAX)
    });
    resize_nearest(&small, height, width)
}

/// Darkened grey value of a base noise sample
///
/// `trunc(value * 0.2) + 30`, which keeps the base dark and low in contrast.
pub fn base_level(value: u8) -> u8 {
    let darkened = (f64::from(value) * BASE_BRIGHTNESS_FACTOR) as u8;
    darkened.saturating_add(BASE_BRIGHTNESS_OFFSET)
}

/// Build the starting image from a noise field, grey in all three channels
pub fn base_image(noise: &Array2<u8>) -> RgbImage {
    let (rows, cols) = noise.dim();
    let mut image = RgbImage::new(cols as u32, rows as u32);
    for (pixel, &value) in image.pixels_mut().zip(noise.iter()) {
        let level = base_level(value);
        *pixel = Rgb([level, level, level]);
    }
    image
}
