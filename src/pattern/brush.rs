//! Brush strokes: tapered polygons around bent quadratic spines

use crate::io::configuration::{
    BRUSH_MIN_HALF_WIDTH, BRUSH_MIN_SEGMENT_LENGTH, BRUSH_SPINE_STEPS,
};
use crate::math::geometry::{Point, linspace, quadratic_bezier};
use crate::pattern::int_between;
use crate::spatial::Mask;
use crate::spatial::polygon::fill_polygon_tiled;
use rand::Rng;

/// Parameters for one brush layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushParams {
    /// Number of strokes drawn
    pub count: usize,
    /// Shortest stroke length in pixels
    pub length_min: i64,
    /// Longest stroke length in pixels
    pub length_max: i64,
}

/// Shape of a single stroke before its edges are jittered
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSpine {
    /// Start of the spine
    pub start: Point,
    /// Bézier control point pulling the spine sideways
    pub control: Point,
    /// End of the spine
    pub end: Point,
    /// Peak half-width before the base width and jitter are added
    pub max_width: f64,
}

impl StrokeSpine {
    /// Draw a random spine centred on `center`
    ///
    /// The stroke runs at 25 to 65 degrees, is `length` pixels long and bends to a
    /// random side by 20% to 50% of its length.
    pub fn random<R: Rng + ?Sized>(center: Point, length: i64, rng: &mut R) -> Self {
        let angle = f64::from(rng.random_range(25_u8..=65)).to_radians();
        let lf = length as f64;
        let max_width = int_between(rng, (lf * 0.1) as i64, (lf * 0.25) as i64) as f64;

        let half = Point::new(angle.cos(), angle.sin()) * (lf / 2.0);
        let start = center - half;
        let end = center + half;

        let direction = if rng.random::<f64>() > 0.5 { 1.0 } else { -1.0 };
        let bend = int_between(rng, (lf * 0.2) as i64, (lf * 0.5) as i64) as f64;
        let normal = Point::new(-angle.sin(), angle.cos());
        let control = start.midpoint(end) + normal * (bend * direction);

        Self {
            start,
            control,
            end,
            max_width,
        }
    }

    /// Spine sampled at `steps` evenly spaced parameters
    pub fn sample(&self, steps: usize) -> Vec<Point> {
        linspace(steps)
            .map(|t| quadratic_bezier(self.start, self.control, self.end, t))
            .collect()
    }

    /// Closed outline of the stroke: left edge forward, then right edge backward
    ///
    /// Each spine segment contributes one point per side, offset along the segment's
    /// normal by a parabolic taper (widest mid-stroke) plus independent jitter: left
    /// in [-50, 50], right in [-50, 100], each clamped to at least 2 pixels.
    /// Segments shorter than a pixel fraction are skipped.
    pub fn outline<R: Rng + ?Sized>(&self, steps: usize, rng: &mut R) -> Vec<[i32; 2]> {
        let spine = self.sample(steps);
        let last_index = steps.saturating_sub(1).max(1) as f64;

        let mut left = Vec::with_capacity(spine.len());
        let mut right = Vec::with_capacity(spine.len());
        for (i, pair) in spine.windows(2).enumerate() {
            let [current, next] = pair else {
                continue;
            };
            let delta = *next - *current;
            let distance = delta.length();
            if distance < BRUSH_MIN_SEGMENT_LENGTH {
                continue;
            }

            let normal = Point::new(-delta.y / distance, delta.x / distance);
            let progress = i as f64 / last_index;
            let taper = 1.0 - 2.0f64.mul_add(progress, -1.0).powi(2);
            let base_width = self.max_width.mul_add(taper, 5.0);

            let left_width =
                (base_width + f64::from(rng.random_range(-50_i32..=50))).max(BRUSH_MIN_HALF_WIDTH);
            let right_width =
                (base_width + f64::from(rng.random_range(-50_i32..=100))).max(BRUSH_MIN_HALF_WIDTH);

            left.push((*current + normal * left_width).to_pixel());
            right.push((*current - normal * right_width).to_pixel());
        }

        left.extend(right.into_iter().rev());
        left
    }
}

/// Generate a brush stroke mask
///
/// Stroke centres are uniform over the canvas, lengths uniform in
/// `[length_min, length_max]`. Strokes are filled at all tile offsets; strokes whose
/// outline degenerates below three points are skipped.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    params: &BrushParams,
    rng: &mut R,
) -> Mask {
    let mut mask = Mask::new(width, height);

    for _ in 0..params.count {
        let center = Point::new(
            rng.random_range(0..=width) as f64,
            rng.random_range(0..=height) as f64,
        );
        let length = int_between(rng, params.length_min, params.length_max);
        let spine = StrokeSpine::random(center, length, rng);
        let outline = spine.outline(BRUSH_SPINE_STEPS, rng);
        fill_polygon_tiled(&mut mask, &outline);
    }
    mask
}
