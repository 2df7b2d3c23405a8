//! Plane geometry for brush stroke spines and Voronoi cells

use std::ops::{Add, Mul, Sub};

/// Point or vector in canvas coordinates (x right, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product when both points are read as vectors
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// Euclidean length when read as a vector
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance to another point
    pub fn distance(self, other: Self) -> f64 {
        (other - self).length()
    }

    /// Point halfway to `other`
    pub fn midpoint(self, other: Self) -> Self {
        (self + other) * 0.5
    }

    /// Integer pixel coordinates, rounding toward negative infinity
    ///
    /// Flooring commutes with whole-tile translation, so a shape and its wrapped
    /// copies land on the same pixel grid.
    pub fn to_pixel(self) -> [i32; 2] {
        [self.x.floor() as i32, self.y.floor() as i32]
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Evaluate a quadratic Bézier curve at parameter `t` in [0, 1]
pub fn quadratic_bezier(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// `steps` evenly spaced parameters from 0 to 1 inclusive
///
/// A single step yields just 0; zero steps yield nothing.
pub fn linspace(steps: usize) -> impl Iterator<Item = f64> {
    let denominator = steps.saturating_sub(1).max(1) as f64;
    (0..steps).map(move |i| i as f64 / denominator)
}

/// Clip a convex polygon to the half-plane of points at least as close to `site`
/// as to `other`
///
/// One pass of Sutherland-Hodgman against the perpendicular bisector of the two
/// sites. Coincident sites leave the polygon unchanged.
pub fn clip_to_nearer(polygon: &[Point], site: Point, other: Point) -> Vec<Point> {
    let normal = other - site;
    if normal.length() == 0.0 {
        return polygon.to_vec();
    }
    let mid = site.midpoint(other);
    let side = |p: Point| (p - mid).dot(normal);

    let mut clipped = Vec::with_capacity(polygon.len() + 1);
    let Some(&last) = polygon.last() else {
        return clipped;
    };

    let mut previous = last;
    let mut previous_side = side(previous);
    for &current in polygon {
        let current_side = side(current);
        let previous_inside = previous_side <= 0.0;
        let current_inside = current_side <= 0.0;

        if previous_inside != current_inside {
            let t = previous_side / (previous_side - current_side);
            clipped.push(previous + (current - previous) * t);
        }
        if current_inside {
            clipped.push(current);
        }

        previous = current;
        previous_side = current_side;
    }
    clipped
}

/// Voronoi cell of `site` among `neighbours`, bounded by the rectangle `min`..`max`
///
/// Neighbours are visited nearest first; once a neighbour is more than twice as far
/// away as the farthest cell vertex, no remaining bisector can cut the cell and
/// clipping stops early.
pub fn voronoi_cell(site: Point, neighbours: &[Point], min: Point, max: Point) -> Vec<Point> {
    let mut cell = vec![
        Point::new(min.x, min.y),
        Point::new(max.x, min.y),
        Point::new(max.x, max.y),
        Point::new(min.x, max.y),
    ];

    let mut ordered: Vec<(f64, Point)> = neighbours
        .iter()
        .map(|&n| (site.distance(n), n))
        .filter(|&(d, _)| d > 0.0)
        .collect();
    ordered.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (distance, neighbour) in ordered {
        let reach = cell
            .iter()
            .map(|&v| site.distance(v))
            .fold(0.0_f64, f64::max);
        if distance > 2.0 * reach {
            break;
        }

        cell = clip_to_nearer(&cell, site, neighbour);
        if cell.is_empty() {
            break;
        }
    }
    cell
}
