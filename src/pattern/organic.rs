//! Organic blobs from thresholded bicubic noise

use crate::io::configuration::{ORGANIC_MIN_CELLS, ORGANIC_NOISE_GATE};
use crate::math::interpolation::resize_cubic_periodic;
use crate::spatial::Mask;
use ndarray::Array2;
use rand::Rng;

/// Inclusive lower bound of the low-resolution blob field
const FIELD_MIN: u8 = 50;
/// Exclusive upper bound of the low-resolution blob field
const FIELD_MAX: u8 = 255;

/// Parameters for one organic layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrganicParams {
    /// Canvas pixels per low-resolution cell; larger values give larger blobs
    pub scale: usize,
    /// Smoothed values strictly above this become part of the region
    pub threshold: u8,
}

/// Generate an organic blob mask
///
/// A `(height / scale, width / scale)` random field (each side at least 4 cells) is
/// upsampled bicubically to the canvas, wrapping at the edges so blobs tile, and
/// thresholded. The result is then gated by `base_noise > 80`, tying blob placement
/// to the base texture.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    params: &OrganicParams,
    base_noise: &Array2<u8>,
    rng: &mut R,
) -> Mask {
    let scale = params.scale.max(1);
    let small_rows = (height / scale).max(ORGANIC_MIN_CELLS);
    let small_cols = (width / scale).max(ORGANIC_MIN_CELLS);

    let small = Array2::from_shape_simple_fn((small_rows, small_cols), || {
        rng.random_range(FIELD_MIN..FIELD_MAX)
    });
    let smooth = resize_cubic_periodic(&small, height, width);

    let mut mask = Mask::from_row_major(width, height, smooth.iter().map(|&v| v > params.threshold));

    if base_noise.dim() == (height, width) {
        let gate =
            Mask::from_row_major(width, height, base_noise.iter().map(|&v| v > ORGANIC_NOISE_GATE));
        mask.intersect(&gate);
    } else {
        tracing::warn!(
            expected = ?(height, width),
            actual = ?base_noise.dim(),
            "base noise does not match canvas; organic gate skipped"
        );
    }
    mask
}
