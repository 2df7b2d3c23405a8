//! Boolean region masks stored one bit per pixel
//!
//! A full-size canvas mask is 51.8 million pixels at the default size, so masks are
//! bit-packed rather than stored as a byte or bool grid.

use bitvec::prelude::*;

/// Row-major boolean grid with the same dimensions as the canvas
///
/// Bit `y * width + x` is set when pixel `(x, y)` belongs to the region.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    bits: BitVec,
}

impl Mask {
    /// Create a mask with no pixels set
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: bitvec![0; width * height],
        }
    }

    /// Create a mask with every pixel set
    pub fn full(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            bits: bitvec![1; width * height],
        }
    }

    /// Build a mask from values in row-major order
    ///
    /// Missing trailing values are unset; surplus values are ignored, so the mask
    /// always has exactly `width * height` pixels.
    pub fn from_row_major(
        width: usize,
        height: usize,
        values: impl IntoIterator<Item = bool>,
    ) -> Self {
        let len = width * height;
        let mut bits: BitVec = values.into_iter().take(len).collect();
        bits.resize(len, false);
        Self {
            width,
            height,
            bits,
        }
    }

    /// Build a mask by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let values = (0..height).flat_map(|y| (0..width).map(move |x| (x, y)));
        Self::from_row_major(width, height, values.map(|(x, y)| f(x, y)))
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Total number of pixels
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Test a pixel; out-of-range coordinates read as unset
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.index(x, y)
            .and_then(|i| self.bits.get(i).as_deref().copied())
            .unwrap_or(false)
    }

    /// Set or clear a pixel; out-of-range coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if let Some(i) = self.index(x, y) {
            self.bits.set(i, value);
        }
    }

    /// Set the inclusive pixel span `x_start..=x_end` on row `y`
    ///
    /// The span is clipped to the canvas, so callers may pass coordinates from
    /// shapes that extend past either edge.
    pub fn fill_span(&mut self, y: i64, x_start: i64, x_end: i64) {
        if y < 0 || y >= self.height as i64 || self.width == 0 {
            return;
        }
        let start = x_start.max(0);
        let end = x_end.min(self.width as i64 - 1);
        if start > end {
            return;
        }

        let row_offset = y as usize * self.width;
        let range = row_offset + start as usize..row_offset + end as usize + 1;
        if let Some(span) = self.bits.get_mut(range) {
            span.fill(true);
        }
    }

    /// Number of set pixels
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether at least one pixel is set
    pub fn any(&self) -> bool {
        self.bits.any()
    }

    /// Whether every pixel is set
    pub fn all(&self) -> bool {
        self.bits.all()
    }

    /// Fraction of the canvas covered, in [0, 1]
    pub fn coverage(&self) -> f64 {
        if self.bits.is_empty() {
            0.0
        } else {
            self.count() as f64 / self.area() as f64
        }
    }

    /// Pixel values in row-major order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Clear every pixel that is set in `other`
    ///
    /// Masks of different sizes are left unchanged.
    pub fn subtract(&mut self, other: &Self) {
        if self.width == other.width && self.height == other.height {
            let keep = !other.bits.clone();
            self.bits &= &keep;
        }
    }

    /// Keep only pixels that are also set in `other`
    ///
    /// Masks of different sizes are left unchanged.
    pub fn intersect(&mut self, other: &Self) {
        if self.width == other.width && self.height == other.height {
            self.bits &= &other.bits;
        }
    }
}
