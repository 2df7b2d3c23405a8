//! Screen-print style outlines around composited regions

use crate::io::configuration::{
    OUTLINE_THICKNESS_BASE, OUTLINE_THICKNESS_FALLOFF, OUTLINE_THICKNESS_MIN,
};
use crate::spatial::Mask;
use crate::spatial::morphology::outline_band;
use image::{Rgb, RgbImage};

/// Colour of every outline
pub const OUTLINE_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

/// Outline thickness for a layer at `progress` in [0, 1)
///
/// `max(10, trunc(35 - 15 * progress))`: early terrain layers get heavier borders.
pub fn outline_thickness(progress: f64) -> usize {
    let thickness = OUTLINE_THICKNESS_FALLOFF.mul_add(-progress, OUTLINE_THICKNESS_BASE);
    (thickness.max(0.0) as usize).max(OUTLINE_THICKNESS_MIN)
}

/// Paint the `thickness`-pixel band just outside `mask` black
///
/// Returns the number of pixels painted. Masks whose size differs from the image
/// paint nothing.
pub fn apply_outline(image: &mut RgbImage, mask: &Mask, thickness: usize) -> usize {
    if mask.width() != image.width() as usize || mask.height() != image.height() as usize {
        return 0;
    }

    let band = outline_band(mask, thickness);
    let mut painted = 0;
    for (pixel, in_band) in image.pixels_mut().zip(band.iter()) {
        if in_band {
            *pixel = OUTLINE_COLOR;
            painted += 1;
        }
    }
    painted
}
