//! Raster resampling for low-resolution noise fields
//!
//! Nearest-neighbour upsampling produces the blocky "digital" textures, while
//! bicubic upsampling (Keys kernel, a = -0.75) produces the smooth fields
//! thresholded into organic blobs and m90 guide maps. Bicubic edges either replicate
//! the border samples or wrap around, the latter giving fields that tile.

use ndarray::{Array1, Array2};
use num_traits::{Bounded, NumCast, ToPrimitive};

/// Keys cubic convolution parameter
const CUBIC_A: f64 = -0.75;

/// Source index sampled by nearest-neighbour resampling for destination index `dst`
///
/// Equivalent to `floor(dst * src_len / dst_len)`, clamped to the last source cell.
pub const fn nearest_index(dst: usize, src_len: usize, dst_len: usize) -> usize {
    if dst_len == 0 || src_len == 0 {
        return 0;
    }
    let index = dst * src_len / dst_len;
    if index >= src_len { src_len - 1 } else { index }
}

/// Upsample (or downsample) a field to `rows` x `cols` by nearest-neighbour lookup
///
/// An empty source produces a field filled with `T::default()`.
pub fn resize_nearest<T>(src: &Array2<T>, rows: usize, cols: usize) -> Array2<T>
where
    T: Copy + Default,
{
    let (src_rows, src_cols) = src.dim();
    let row_map: Vec<usize> = (0..rows)
        .map(|r| nearest_index(r, src_rows, rows))
        .collect();
    let col_map: Vec<usize> = (0..cols)
        .map(|c| nearest_index(c, src_cols, cols))
        .collect();

    Array2::from_shape_fn((rows, cols), |(r, c)| {
        let sr = row_map.get(r).copied().unwrap_or(0);
        let sc = col_map.get(c).copied().unwrap_or(0);
        src.get((sr, sc)).copied().unwrap_or_default()
    })
}

/// Cubic convolution weights for the four taps around fractional offset `t`
///
/// Taps are at offsets -1, 0, 1, 2 relative to the sample's floor. Weights always
/// sum to one.
pub fn cubic_weights(t: f64) -> [f64; 4] {
    let a = CUBIC_A;
    let t1 = t + 1.0;
    let u = 1.0 - t;
    let w0 = ((a * t1 - 5.0 * a) * t1 + 8.0 * a) * t1 - 4.0 * a;
    let w1 = ((a + 2.0) * t - (a + 3.0)) * t * t + 1.0;
    let w2 = ((a + 2.0) * u - (a + 3.0)) * u * u + 1.0;
    [w0, w1, w2, 1.0 - w0 - w1 - w2]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Clamp,
    Wrap,
}

#[derive(Debug, Clone, Copy)]
struct CubicTap {
    indices: [usize; 4],
    weights: [f64; 4],
}

// Pixel centres are aligned, so each destination sample maps to
// (dst + 0.5) * scale - 0.5 in source coordinates
fn cubic_taps(src_len: usize, dst_len: usize, edge: Edge) -> Vec<CubicTap> {
    let scale = src_len as f64 / dst_len.max(1) as f64;
    let len = src_len.max(1) as i64;
    let source_index = |i: i64| match edge {
        Edge::Clamp => i.clamp(0, len - 1) as usize,
        Edge::Wrap => i.rem_euclid(len) as usize,
    };

    (0..dst_len)
        .map(|dst| {
            let position = (dst as f64 + 0.5).mul_add(scale, -0.5);
            let floor = position.floor();
            let base = floor as i64;
            let indices = [-1_i64, 0, 1, 2].map(|k| source_index(base + k));
            CubicTap {
                indices,
                weights: cubic_weights(position - floor),
            }
        })
        .collect()
}

fn saturate<T>(value: f64) -> T
where
    T: NumCast + Bounded + ToPrimitive,
{
    let lo = T::min_value().to_f64().unwrap_or(f64::MIN);
    let hi = T::max_value().to_f64().unwrap_or(f64::MAX);
    NumCast::from(value.round().clamp(lo, hi)).unwrap_or_else(T::min_value)
}

/// Resample a field to `rows` x `cols` with separable bicubic interpolation
///
/// Results are rounded and saturated to the range of `T`, so overshoot near sharp
/// transitions never wraps. An empty source produces a field of `T::min_value()`.
/// Samples beyond the border repeat the border.
pub fn resize_cubic<T>(src: &Array2<T>, rows: usize, cols: usize) -> Array2<T>
where
    T: Copy + NumCast + Bounded + ToPrimitive,
{
    resize_cubic_edge(src, rows, cols, Edge::Clamp)
}

/// Bicubic resampling that treats the source as one period of an endless tiling
///
/// The result tiles seamlessly: its left edge continues its right edge and its top
/// continues its bottom.
pub fn resize_cubic_periodic<T>(src: &Array2<T>, rows: usize, cols: usize) -> Array2<T>
where
    T: Copy + NumCast + Bounded + ToPrimitive,
{
    resize_cubic_edge(src, rows, cols, Edge::Wrap)
}

fn resize_cubic_edge<T>(src: &Array2<T>, rows: usize, cols: usize, edge: Edge) -> Array2<T>
where
    T: Copy + NumCast + Bounded + ToPrimitive,
{
    let (src_rows, src_cols) = src.dim();
    if src_rows == 0 || src_cols == 0 {
        return Array2::from_elem((rows, cols), T::min_value());
    }

    let col_taps = cubic_taps(src_cols, cols, edge);
    let row_taps = cubic_taps(src_rows, rows, edge);

    // Horizontal pass at source row resolution
    let horizontal = Array2::from_shape_fn((src_rows, cols), |(r, c)| {
        col_taps.get(c).map_or(0.0, |tap| {
            tap.indices
                .iter()
                .zip(tap.weights.iter())
                .map(|(&sc, &w)| {
                    w * src
                        .get((r, sc))
                        .and_then(ToPrimitive::to_f64)
                        .unwrap_or(0.0)
                })
                .sum()
        })
    });

    let mut out = Array2::from_elem((rows, cols), T::min_value());
    let mut accumulator = Array1::<f64>::zeros(cols);
    for (tap, mut out_row) in row_taps.iter().zip(out.rows_mut()) {
        accumulator.fill(0.0);
        for (&sr, &w) in tap.indices.iter().zip(tap.weights.iter()) {
            accumulator.scaled_add(w, &horizontal.row(sr));
        }
        for (dst, &value) in out_row.iter_mut().zip(accumulator.iter()) {
            *dst = saturate(value);
        }
    }
    out
}
