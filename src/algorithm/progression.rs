//! Layer-dependent generator parameters
//!
//! Layer progress `p = index / total` runs from 0 for the first palette colour toward
//! 1 for the last. Early layers lay down coarse terrain; later layers add smaller,
//! sparser detail. Each schedule adds random jitter so repeated runs differ.

use crate::io::configuration::{M90_POINT_COUNT, MODULATION_SCALE_MAX, MODULATION_SCALE_MIN};
use crate::pattern::{BrushParams, JaggedParams, M90Params, MaskSpec, OrganicParams, PatternKind};
use rand::Rng;

/// Fraction of the palette already composited before layer `index`
pub fn layer_progress(index: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        index as f64 / total as f64
    }
}

/// Organic: threshold rises from about 90 toward 190 (+-10, clamped to [50, 250]),
/// block size falls from about 700 toward 500 (+-50)
pub fn organic_params<R: Rng + ?Sized>(progress: f64, rng: &mut R) -> OrganicParams {
    let target_threshold = 100.0f64.mul_add(progress, 90.0);
    let threshold = (target_threshold + f64::from(rng.random_range(-10_i32..=10))) as i64;
    let target_scale = 200.0f64.mul_add(-progress, 700.0);
    let scale = (target_scale + f64::from(rng.random_range(-50_i32..=50))) as i64;

    OrganicParams {
        scale: scale.max(1) as usize,
        threshold: threshold.clamp(50, 250) as u8,
    }
}

/// Jagged: 150 to 800 polygons minus up to 100 (+-20), radii shrinking from
/// [200, 500] toward [150, 300]
pub fn jagged_params<R: Rng + ?Sized>(progress: f64, rng: &mut R) -> JaggedParams {
    let base_count = rng.random_range(150_i32..800);
    let count = 100.0f64.mul_add(-progress, f64::from(base_count)) as i64
        + i64::from(rng.random_range(-20_i32..=20));

    JaggedParams {
        count: count.max(0) as usize,
        size_min: 50.0f64.mul_add(-progress, 200.0).trunc(),
        size_max: 200.0f64.mul_add(-progress, 500.0).trunc(),
    }
}

/// m90: 150 sites, threshold rising from about 50 toward 200 (+-20)
pub fn m90_params<R: Rng + ?Sized>(progress: f64, rng: &mut R) -> M90Params {
    let target = 150.0f64.mul_add(progress, 50.0);
    let threshold = (target + f64::from(rng.random_range(-20_i32..=20))) as i32;
    M90Params {
        count: M90_POINT_COUNT,
        threshold,
    }
}

/// Brush: stroke count falling from 80 toward 20, lengths from [800, 3000] toward
/// [700, 2800]
pub fn brush_params(progress: f64) -> BrushParams {
    let count = (60.0f64.mul_add(-progress, 80.0) as i64).max(20);
    BrushParams {
        count: count as usize,
        length_min: 100.0f64.mul_add(-progress, 800.0) as i64,
        length_max: 200.0f64.mul_add(-progress, 3000.0) as i64,
    }
}

/// Mask request for layer `index` of `total`
///
/// The brush style's first layer is a full-canvas base coat.
pub fn plan_layer<R: Rng + ?Sized>(
    kind: PatternKind,
    index: usize,
    total: usize,
    rng: &mut R,
) -> MaskSpec {
    let progress = layer_progress(index, total);
    match kind {
        PatternKind::Brush if index == 0 => MaskSpec::BaseCoat,
        PatternKind::Brush => MaskSpec::Brush(brush_params(progress)),
        PatternKind::M90 => MaskSpec::M90(m90_params(progress, rng)),
        PatternKind::Jagged => MaskSpec::Jagged(jagged_params(progress, rng)),
        PatternKind::Organic => MaskSpec::Organic(organic_params(progress, rng)),
    }
}

/// Block size of the digital modulation texture, uniform in 20..=60
pub fn modulation_scale<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.random_range(MODULATION_SCALE_MIN..=MODULATION_SCALE_MAX)
}
