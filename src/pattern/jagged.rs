//! Jagged shapes: random triangles and quadrilaterals around scattered centres

use crate::math::geometry::Point;
use crate::pattern::uniform_between;
use crate::spatial::Mask;
use crate::spatial::polygon::fill_polygon_tiled;
use rand::Rng;
use std::f64::consts::TAU;

/// Parameters for one jagged layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaggedParams {
    /// Number of polygons drawn
    pub count: usize,
    /// Smallest vertex distance from the polygon centre
    pub size_min: f64,
    /// Largest vertex distance from the polygon centre
    pub size_max: f64,
}

/// Generate a jagged polygon mask
///
/// Each polygon has three or four vertices at random angles and radii around a
/// random centre; the horizontal offset of every vertex is additionally stretched by
/// a factor in [0.5, 1.5]. Vertices are not sorted by angle, so some polygons
/// self-intersect into bow-tie shapes, which the even-odd fill renders as two
/// facing wedges.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    params: &JaggedParams,
    rng: &mut R,
) -> Mask {
    let mut mask = Mask::new(width, height);

    for _ in 0..params.count {
        let cx = rng.random_range(0..=width) as f64;
        let cy = rng.random_range(0..=height) as f64;
        let vertex_count = rng.random_range(3..=4);

        let vertices: Vec<[i32; 2]> = (0..vertex_count)
            .map(|_| {
                let angle = rng.random_range(0.0..TAU);
                let radius = uniform_between(rng, params.size_min, params.size_max);
                let stretch = rng.random_range(0.5..=1.5);
                Point::new(
                    (radius * angle.cos()).mul_add(stretch, cx),
                    radius.mul_add(angle.sin(), cy),
                )
                .to_pixel()
            })
            .collect();

        fill_polygon_tiled(&mut mask, &vertices);
    }
    mask
}
