//! Dilation with a square structuring element
//!
//! A square element is separable, so dilation runs as a horizontal pass followed by
//! a vertical pass. Each pass uses running counts, making the cost independent of
//! the element size.

use crate::spatial::mask::Mask;

// Dilate a single line of pixels by `radius` in both directions
fn dilate_line(line: &[bool], radius: usize) -> Vec<bool> {
    let mut prefix = Vec::with_capacity(line.len() + 1);
    let mut running = 0_u32;
    prefix.push(running);
    for &value in line {
        running += u32::from(value);
        prefix.push(running);
    }

    (0..line.len())
        .map(|i| {
            let lo = i.saturating_sub(radius);
            let hi = (i + radius + 1).min(line.len());
            prefix.get(hi).copied().unwrap_or(0) > prefix.get(lo).copied().unwrap_or(0)
        })
        .collect()
}

/// Dilate a mask with a `(2 * radius + 1)` square element
///
/// Pixels beyond the canvas count as unset, so regions touching an edge do not
/// wrap around to the opposite side.
pub fn dilate(mask: &Mask, radius: usize) -> Mask {
    let width = mask.width();
    let height = mask.height();
    if radius == 0 {
        return mask.clone();
    }

    let mut horizontal = Mask::new(width, height);
    let mut line = Vec::with_capacity(width.max(height));
    for y in 0..height {
        line.clear();
        line.extend((0..width).map(|x| mask.get(x, y)));
        for (x, value) in dilate_line(&line, radius).into_iter().enumerate() {
            if value {
                horizontal.set(x, y, true);
            }
        }
    }

    let mut dilated = Mask::new(width, height);
    for x in 0..width {
        line.clear();
        line.extend((0..height).map(|y| horizontal.get(x, y)));
        for (y, value) in dilate_line(&line, radius).into_iter().enumerate() {
            if value {
                dilated.set(x, y, true);
            }
        }
    }
    dilated
}

/// Ring of pixels within `thickness` of the region but outside it
///
/// Equal to the dilation by a `(2 * thickness + 1)` square minus the original mask.
pub fn outline_band(mask: &Mask, thickness: usize) -> Mask {
    let mut band = dilate(mask, thickness);
    band.subtract(mask);
    band
}
