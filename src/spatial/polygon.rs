//! Scanline polygon filling with seamless tiling
//!
//! Pixels are filled when their centre lies inside the polygon under the even-odd
//! rule, so shared edges between neighbouring polygons neither overlap nor gap.

use crate::spatial::mask::Mask;

/// Offsets of the canvas and its eight neighbouring copies
///
/// Drawing a shape at each offset wraps whatever crosses one edge back in at the
/// opposite edge, so the resulting pattern tiles without seams.
pub const fn tile_offsets(width: i64, height: i64) -> [[i64; 2]; 9] {
    [
        [0, 0],
        [width, 0],
        [-width, 0],
        [0, height],
        [0, -height],
        [width, height],
        [width, -height],
        [-width, height],
        [-width, -height],
    ]
}

/// Fill a polygon given in integer pixel coordinates
///
/// Parts outside the canvas are clipped. Returns `false` without touching the mask
/// when the polygon has fewer than three vertices.
pub fn fill_polygon(mask: &mut Mask, vertices: &[[i32; 2]]) -> bool {
    fill_polygon_offset(mask, vertices, [0, 0])
}

/// Fill a polygon at all nine tile offsets
///
/// Copies whose bounding box misses the canvas are skipped. Returns `false` when the
/// polygon has fewer than three vertices.
pub fn fill_polygon_tiled(mask: &mut Mask, vertices: &[[i32; 2]]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let width = mask.width() as i64;
    let height = mask.height() as i64;
    let Some((min, max)) = bounding_box(vertices) else {
        return false;
    };

    for offset in tile_offsets(width, height) {
        let visible = max[0] + offset[0] >= 0
            && min[0] + offset[0] < width
            && max[1] + offset[1] >= 0
            && min[1] + offset[1] < height;
        if visible {
            fill_polygon_offset(mask, vertices, offset);
        }
    }
    true
}

fn bounding_box(vertices: &[[i32; 2]]) -> Option<([i64; 2], [i64; 2])> {
    let first = vertices.first()?;
    let mut min = [i64::from(first[0]), i64::from(first[1])];
    let mut max = min;
    for v in vertices {
        min[0] = min[0].min(i64::from(v[0]));
        min[1] = min[1].min(i64::from(v[1]));
        max[0] = max[0].max(i64::from(v[0]));
        max[1] = max[1].max(i64::from(v[1]));
    }
    Some((min, max))
}

fn fill_polygon_offset(mask: &mut Mask, vertices: &[[i32; 2]], offset: [i64; 2]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let Some((min, max)) = bounding_box(vertices) else {
        return false;
    };

    let points: Vec<(f64, f64)> = vertices
        .iter()
        .map(|v| {
            (
                (i64::from(v[0]) + offset[0]) as f64,
                (i64::from(v[1]) + offset[1]) as f64,
            )
        })
        .collect();

    let row_start = (min[1] + offset[1]).max(0);
    let row_end = (max[1] + offset[1]).min(mask.height() as i64 - 1);

    // Preallocate intersection buffer (reused per scanline)
    let mut crossings: Vec<f64> = Vec::with_capacity(points.len());

    for y in row_start..=row_end {
        crossings.clear();
        let yc = y as f64 + 0.5;

        let previous = points.iter().copied().cycle().skip(points.len() - 1);
        for (&(x1, y1), (x2, y2)) in points.iter().zip(previous) {
            // Half-open test so vertices on the scanline count once
            if (y1 <= yc && y2 > yc) || (y2 <= yc && y1 > yc) {
                crossings.push((yc - y1) / (y2 - y1) * (x2 - x1) + x1);
            }
        }

        crossings.sort_unstable_by(f64::total_cmp);
        for pair in crossings.chunks_exact(2) {
            if let [left, right] = pair {
                let x_start = (left - 0.5).ceil() as i64;
                let x_end = (right - 0.5).floor() as i64;
                mask.fill_span(y, x_start, x_end);
            }
        }
    }
    true
}
