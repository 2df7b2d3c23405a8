//! m90 pattern: Voronoi cells switched on by a smooth guide field

use crate::io::configuration::{M90_GUIDE_SCALE, VORONOI_PADDING};
use crate::math::geometry::{Point, voronoi_cell};
use crate::math::interpolation::resize_cubic;
use crate::spatial::Mask;
use crate::spatial::polygon::{fill_polygon_tiled, tile_offsets};
use ndarray::Array2;
use rand::Rng;

/// Parameters for one m90 layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct M90Params {
    /// Number of Voronoi sites scattered on the canvas
    pub count: usize,
    /// Cells whose guide value is strictly above this are included
    pub threshold: i32,
}

/// Generate an m90 Voronoi mask
///
/// Sites are replicated at the eight tile offsets before building the diagram, so
/// cells crossing an edge continue seamlessly on the opposite side. The diagram is
/// bounded by the 3x3 tiled canvas padded by 100 pixels. A site's cell is included
/// when the bicubic guide field sampled at the site exceeds the threshold; included
/// cells are filled at all tile offsets.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    params: &M90Params,
    rng: &mut R,
) -> Mask {
    let mut mask = Mask::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }

    let sites: Vec<Point> = (0..params.count)
        .map(|_| {
            Point::new(
                rng.random_range(0..width) as f64,
                rng.random_range(0..height) as f64,
            )
        })
        .collect();

    let guide_rows = (height / M90_GUIDE_SCALE).max(1);
    let guide_cols = (width / M90_GUIDE_SCALE).max(1);
    let guide_small =
        Array2::from_shape_simple_fn((guide_rows, guide_cols), || rng.random_range(0..255_u8));
    let guide = resize_cubic(&guide_small, height, width);

    let w = width as f64;
    let h = height as f64;
    let replicas: Vec<Point> = sites
        .iter()
        .flat_map(|&site| {
            tile_offsets(width as i64, height as i64)
                .map(|[dx, dy]| Point::new(site.x + dx as f64, site.y + dy as f64))
        })
        .collect();
    let bounds_min = Point::new(-w - VORONOI_PADDING, -h - VORONOI_PADDING);
    let bounds_max = Point::new(2.0f64.mul_add(w, VORONOI_PADDING), 2.0f64.mul_add(h, VORONOI_PADDING));

    let mut included = 0_usize;
    for &site in &sites {
        let guide_value = guide
            .get((site.y as usize, site.x as usize))
            .copied()
            .unwrap_or(0);
        if i32::from(guide_value) <= params.threshold {
            continue;
        }

        let cell = voronoi_cell(site, &replicas, bounds_min, bounds_max);
        let vertices: Vec<[i32; 2]> = cell.iter().map(|p| p.to_pixel()).collect();
        if fill_polygon_tiled(&mut mask, &vertices) {
            included += 1;
        }
    }

    tracing::trace!(sites = sites.len(), included, "m90 cells selected");
    mask
}
