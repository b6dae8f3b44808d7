//! Numeric reduction pipeline
//!
//! Pure, synchronous helpers that shrink oversized analysis data to
//! something a chart can render responsively:
//!
//! - [`sanitize`] - coercion of loose values to finite numbers
//! - [`series`] - time-series construction and stride decimation
//! - [`matrix`] - block-averaging matrix reduction with source ranges
//! - [`stats`] - separation of a labeled series from its summary
//!
//! Every function allocates fresh output and mutates nothing shared,
//! so overlapping invocations from independent visualizations are
//! safe; a caller simply discards stale results.

pub mod matrix;
pub mod sanitize;
pub mod series;
pub mod stats;

pub use matrix::{axis_labels, downsample_matrix, ReducedMatrix};
pub use series::{build_time_series, decimate_points, downsample_series};
pub use stats::{stat_to_series, LabeledSeries, SeriesStats, StatSeries};
