//! Time-series construction and stride decimation
//!
//! Analyses arrive as plain numeric sequences indexed by frame or
//! residue; charts want explicit `[x, y]` points. The builder maps a
//! sequence plus `(start, step)` onto coordinates, and the
//! downsampler emits every stride-th original sample when a sequence
//! exceeds the point budget. Decimation keeps exact values at true
//! coordinates; it never averages.

use crate::reduce::sanitize::finite_or;
use tracing::debug;

/// Normalize `(start, step)`: non-finite start becomes 0, zero or
/// non-finite step becomes 1.
fn normalize_axis(start: f64, step: f64) -> (f64, f64) {
    let step = if step == 0.0 { 1.0 } else { finite_or(step, 1.0) };
    (finite_or(start, 0.0), step)
}

/// Map a numeric sequence onto `[start + i * step, values[i]]` points
///
/// Always produces exactly `values.len()` points. Pure, O(n).
pub fn build_time_series(values: &[f64], start: f64, step: f64) -> Vec<[f64; 2]> {
    let (start, step) = normalize_axis(start, step);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [start + i as f64 * step, v])
        .collect()
}

/// Reduce a sequence to at most `target_points` chart points
///
/// At or under the budget this is exactly [`build_time_series`].
/// Over it, `stride = ceil(len / target)` and one point is emitted
/// per stride-th original sample, keeping its exact value and true
/// coordinate. Deterministic, and idempotent once a series is at or
/// under the target. A zero target is clamped to 1.
pub fn downsample_series(
    values: &[f64],
    start: f64,
    step: f64,
    target_points: usize,
) -> Vec<[f64; 2]> {
    let target = target_points.max(1);
    if values.len() <= target {
        return build_time_series(values, start, step);
    }

    let (start, step) = normalize_axis(start, step);
    let stride = values.len().div_ceil(target);
    debug!(
        len = values.len(),
        target, stride, "decimating series for rendering"
    );
    values
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(i, &v)| [start + i as f64 * step, v])
        .collect()
}

/// Decimate pre-built points (e.g. a PCA projection) to a budget
///
/// Same stride rule as [`downsample_series`], applied to points that
/// already carry their coordinates.
pub fn decimate_points(points: &[[f64; 2]], target_points: usize) -> Vec<[f64; 2]> {
    let target = target_points.max(1);
    if points.len() <= target {
        return points.to_vec();
    }
    let stride = points.len().div_ceil(target);
    points.iter().step_by(stride).copied().collect()
}
