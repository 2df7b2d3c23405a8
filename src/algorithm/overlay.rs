//! Decorations drawn over the finished composite

use crate::io::configuration::{
    GRID_LINE_THICKNESS, RAIN_COUNT_MAX, RAIN_COUNT_MIN, RAIN_LENGTH_MAX, RAIN_LENGTH_MIN,
    RAIN_THICKNESS_MAX, RAIN_THICKNESS_MIN,
};
use crate::math::geometry::Point;
use image::{Rgb, RgbImage};
use rand::Rng;

/// Draw a round-capped line of the given thickness
///
/// Every pixel whose integer coordinate lies within `thickness / 2` of the segment
/// is painted. Segments partly or fully outside the image are clipped.
pub fn draw_thick_line(image: &mut RgbImage, start: Point, end: Point, thickness: u32, color: Rgb<u8>) {
    let radius = f64::from(thickness) / 2.0;
    let width = i64::from(image.width());
    let height = i64::from(image.height());

    let x_min = ((start.x.min(end.x) - radius).floor() as i64).max(0);
    let x_max = ((start.x.max(end.x) + radius).ceil() as i64).min(width - 1);
    let y_min = ((start.y.min(end.y) - radius).floor() as i64).max(0);
    let y_max = ((start.y.max(end.y) + radius).ceil() as i64).min(height - 1);

    let segment = end - start;
    let length_squared = segment.dot(segment);

    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let p = Point::new(x as f64, y as f64);
            let t = if length_squared > 0.0 {
                ((p - start).dot(segment) / length_squared).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let nearest = start + segment * t;
            if p.distance(nearest) <= radius {
                image.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

/// Scatter 100 to 399 diagonal streaks over the image
///
/// Each streak starts at a random pixel and runs `length` pixels along both axes
/// (a 45 degree slant) with length in 20..300 and thickness in 3..30. Returns the
/// number of streaks drawn.
pub fn add_rain_streaks<R: Rng + ?Sized>(image: &mut RgbImage, color: Rgb<u8>, rng: &mut R) -> usize {
    let width = image.width();
    let height = image.height();
    if width == 0 || height == 0 {
        return 0;
    }

    let count = rng.random_range(RAIN_COUNT_MIN..RAIN_COUNT_MAX);
    for _ in 0..count {
        let x = f64::from(rng.random_range(0..width));
        let y = f64::from(rng.random_range(0..height));
        let length = rng.random_range(RAIN_LENGTH_MIN..RAIN_LENGTH_MAX) as f64;
        let thickness = rng.random_range(RAIN_THICKNESS_MIN..RAIN_THICKNESS_MAX);
        draw_thick_line(
            image,
            Point::new(x, y),
            Point::new(x + length, y + length),
            thickness,
            color,
        );
    }
    count
}

/// Positions of grid lines along an axis of `extent` pixels: 0, size, 2*size, ...
/// up to and including `extent`
pub fn grid_line_positions(extent: u32, grid_size: u32) -> impl Iterator<Item = u32> {
    (0..=extent).step_by(grid_size.max(1) as usize)
}

/// Draw a regular grid of 10-pixel lines every `grid_size` pixels
///
/// Each line covers `[position - 5, position + 5)` across the whole canvas, so
/// interior lines are exactly 10 pixels wide and lines on the canvas edge are
/// partly clipped.
pub fn apply_occlusion_grid(image: &mut RgbImage, color: Rgb<u8>, grid_size: u32) {
    let width = image.width();
    let height = image.height();
    let half = GRID_LINE_THICKNESS / 2;

    let band = |position: u32, extent: u32| {
        position.saturating_sub(half)..(position + GRID_LINE_THICKNESS - half).min(extent)
    };

    for x in grid_line_positions(width, grid_size) {
        for column in band(x, width) {
            for y in 0..height {
                image.put_pixel(column, y, color);
            }
        }
    }
    for y in grid_line_positions(height, grid_size) {
        for row in band(y, height) {
            for x in 0..width {
                image.put_pixel(x, row, color);
            }
        }
    }
}
