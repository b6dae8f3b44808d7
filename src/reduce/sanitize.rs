//! Numeric sanitization for loosely-shaped payload data
//!
//! External analysis payloads carry numbers as JSON numbers, numeric
//! strings (older depositions), nulls, or garbage. Everything that
//! reaches a chart must be a finite `f64`, so all coercion funnels
//! through here. Nothing in this module panics.
//!
//! Two array policies exist and must not be conflated:
//!
//! - **Filtering** ([`filter_finite`], [`json_series`]): non-finite
//!   entries are dropped and the result shrinks. Used when building a
//!   trimmed series.
//! - **Shape-preserving** ([`zero_non_finite`], [`json_matrix`]):
//!   non-finite entries become 0 so the shape survives. Used for
//!   matrix cells, where rectangularity matters.

use serde_json::Value;

/// Return `value` if finite, otherwise `fallback`
pub fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// Filtering policy: drop non-finite entries, shrinking the result
pub fn filter_finite(values: &[f64]) -> Vec<f64> {
    values.iter().copied().filter(|v| v.is_finite()).collect()
}

/// Shape-preserving policy: replace non-finite entries with 0
pub fn zero_non_finite(values: &[f64]) -> Vec<f64> {
    values.iter().map(|&v| finite_or(v, 0.0)).collect()
}

/// Coerce a JSON value to a finite number
///
/// Accepts JSON numbers and numeric strings; legacy payloads store
/// scores as strings. Non-finite results are rejected.
pub fn json_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Extract a numeric series from a JSON array (filtering policy)
///
/// Returns `None` if `value` is not an array. Non-numeric and
/// non-finite elements are dropped; an empty array yields an empty
/// series, not an error.
pub fn json_series(value: &Value) -> Option<Vec<f64>> {
    let items = value.as_array()?;
    Some(items.iter().filter_map(json_number).collect())
}

/// Extract a matrix from a JSON array of arrays (shape-preserving)
///
/// Returns `None` if `value` is not an array or any row is not an
/// array. Cells that fail numeric coercion become 0 so every row
/// keeps its declared length.
pub fn json_matrix(value: &Value) -> Option<Vec<Vec<f64>>> {
    let rows = value.as_array()?;
    let mut matrix = Vec::with_capacity(rows.len());
    for row in rows {
        let cells = row.as_array()?;
        matrix.push(
            cells
                .iter()
                .map(|c| json_number(c).unwrap_or(0.0))
                .collect(),
        );
    }
    Some(matrix)
}
