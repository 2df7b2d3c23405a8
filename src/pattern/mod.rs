//! Region mask generators for the four camouflage styles
//!
//! Every generator draws onto a fixed `width` x `height` canvas and returns a
//! [`Mask`] of exactly that size. Shape-based generators also draw each shape at the
//! eight neighbouring tile offsets so the finished pattern tiles seamlessly.

/// Tapered quadratic brush strokes
pub mod brush;
/// Elongated random triangles and quadrilaterals
pub mod jagged;
/// Voronoi cells selected by a smooth guide field
pub mod m90;
/// Thresholded bicubic blobs gated by the base noise
pub mod organic;

use crate::io::error::{CamoError, Result};
use crate::spatial::Mask;
use ndarray::Array2;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

pub use brush::BrushParams;
pub use jagged::JaggedParams;
pub use m90::M90Params;
pub use organic::OrganicParams;

/// Camouflage style selecting the mask generator used for every layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Smooth blobs
    Organic,
    /// Sharp-edged polygons
    Jagged,
    /// Voronoi cells
    M90,
    /// Hand-brushed strokes over a full base coat
    Brush,
}

impl PatternKind {
    /// All styles in display order
    pub const ALL: [Self; 4] = [Self::Organic, Self::Jagged, Self::M90, Self::Brush];

    /// Lower-case name as accepted on the command line
    pub const fn name(self) -> &'static str {
        match self {
            Self::Organic => "organic",
            Self::Jagged => "jagged",
            Self::M90 => "m90",
            Self::Brush => "brush",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PatternKind {
    type Err = CamoError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CamoError::InvalidPatternType {
                value: s.to_string(),
            })
    }
}

/// Fully parameterized request for one layer's mask
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MaskSpec {
    /// Every pixel set; the brush style's first layer
    BaseCoat,
    /// Organic blob field
    Organic(OrganicParams),
    /// Jagged polygons
    Jagged(JaggedParams),
    /// m90 Voronoi cells
    M90(M90Params),
    /// Brush strokes
    Brush(BrushParams),
}

impl MaskSpec {
    /// Whether the layer gets an outline after compositing
    ///
    /// The base coat covers the whole canvas and has no boundary to trace.
    pub const fn is_outlined(&self) -> bool {
        !matches!(self, Self::BaseCoat)
    }

    /// Generate the mask described by this request
    ///
    /// `base_noise` is the full-resolution base noise field; only the organic
    /// generator reads it.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        width: usize,
        height: usize,
        base_noise: &Array2<u8>,
        rng: &mut R,
    ) -> Mask {
        match self {
            Self::BaseCoat => Mask::full(width, height),
            Self::Organic(params) => organic::generate(width, height, params, base_noise, rng),
            Self::Jagged(params) => jagged::generate(width, height, params, rng),
            Self::M90(params) => m90::generate(width, height, params, rng),
            Self::Brush(params) => brush::generate(width, height, params, rng),
        }
    }
}

/// Draw uniformly from `[a, b]` whichever way round the bounds are given
pub(crate) fn uniform_between<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if lo < hi { rng.random_range(lo..=hi) } else { lo }
}

/// Draw an integer from `[a, b]` inclusive whichever way round the bounds are given
pub(crate) fn int_between<R: Rng + ?Sized>(rng: &mut R, a: i64, b: i64) -> i64 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    rng.random_range(lo..=hi)
}
