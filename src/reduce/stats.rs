//! Statistical series extraction
//!
//! Several analyses ship a raw numeric series together with a
//! pre-computed summary (average, stddev, min, max). The chart layer
//! needs both, exactly once each: points for the line, the summary
//! for the legend. [`stat_to_series`] separates the two without
//! recomputing either from the other, and lets absence propagate -- a
//! missing series is rendered as "no data available" by the UI, never
//! as a zero-filled line.

use crate::reduce::sanitize::{json_number, json_series};
use crate::reduce::series::{build_time_series, downsample_series};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pre-computed summary statistics for a series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub average: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
}

impl SeriesStats {
    /// Read the four summary fields from a payload object
    ///
    /// All four must be present and numeric; a partial summary is
    /// treated as absent rather than patched with zeros.
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            average: json_number(value.get("average")?)?,
            stddev: json_number(value.get("stddev")?)?,
            min: json_number(value.get("min")?)?,
            max: json_number(value.get("max")?)?,
        })
    }
}

/// A raw numeric series plus its optional summary
#[derive(Debug, Clone, PartialEq)]
pub struct StatSeries {
    /// Finite sample values, semantically indexed by frame/residue
    pub data: Vec<f64>,
    /// Upstream-computed summary, when the payload carried one
    pub stats: Option<SeriesStats>,
}

impl StatSeries {
    /// Extract a stat-series from a payload object
    ///
    /// The raw samples live under `data` (current) or `values`
    /// (legacy); returns `None` when neither is a numeric array.
    pub fn from_value(value: &Value) -> Option<Self> {
        let raw = value.get("data").or_else(|| value.get("values"))?;
        let data = json_series(raw)?;
        Some(Self {
            data,
            stats: SeriesStats::from_value(value),
        })
    }
}

/// A named, chart-ready series with its summary attached
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledSeries {
    pub name: String,
    /// `[x, y]` points, already reduced to the render budget
    pub points: Vec<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SeriesStats>,
}

/// Turn an optional stat-series into an optional labeled point series
///
/// `None` propagates: an absent series is never replaced with a
/// zero-filled one. With `target_points` the series is decimated via
/// [`downsample_series`], otherwise built verbatim.
pub fn stat_to_series(
    stat: Option<&StatSeries>,
    name: &str,
    start: f64,
    step: f64,
    target_points: Option<usize>,
) -> Option<LabeledSeries> {
    let stat = stat?;
    let points = match target_points {
        Some(target) => downsample_series(&stat.data, start, step, target),
        None => build_time_series(&stat.data, start, step),
    };
    Some(LabeledSeries {
        name: name.to_string(),
        points,
        stats: stat.stats,
    })
}
