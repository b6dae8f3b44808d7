//! # mdvis-core: analysis reduction for the MD repository portal
//!
//! The classification and downsampling core behind the portal's
//! scientific-analysis visualizations. An external data-access layer
//! fetches an analysis payload (keyed by project, analysis name, and
//! replica) as loosely-shaped JSON; this crate recognizes which known
//! or legacy shape the payload matches, normalizes it into one
//! canonical structure per analysis kind, and reduces oversized
//! series and matrices to a point/cell budget a chart can render
//! responsively.
//!
//! ## Architecture
//!
//! - **Reduce**: pure numeric helpers - sanitization, time-series
//!   construction, stride decimation, block-averaging matrix
//!   reduction with source ranges for axis labels
//! - **Classify**: ordered structural predicates that recognize
//!   current and legacy payload encodings and fold them into a closed
//!   set of canonical variants
//! - **Render**: per-kind renderers producing chart-ready structures,
//!   behind a first-match dispatch boundary
//!
//! Everything is synchronous and allocation-fresh per call: no I/O,
//! no shared mutable state, no persistence. Malformed input degrades
//! to absent or empty output; no panic crosses the crate boundary.
//!
//! ## Example
//!
//! ```
//! use mdvis_core::{render, ReductionConfig};
//! use serde_json::json;
//!
//! let payload = json!({
//!     "data": [{"reference": "5VBL", "values": [0.12, 0.15, 0.14]}]
//! });
//!
//! let chart = render("rmsds", &payload, &ReductionConfig::default()).unwrap();
//! match chart {
//!     mdvis_core::ChartData::Lines(lines) => assert_eq!(lines.series.len(), 1),
//!     _ => unreachable!(),
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod reduce;
pub mod render;

// Re-export commonly used types
pub use classify::{classify, AnalysisKind, CanonicalAnalysis};
pub use config::ReductionConfig;
pub use error::{CoreError, Result};
pub use reduce::{
    build_time_series, downsample_matrix, downsample_series, stat_to_series, LabeledSeries,
    ReducedMatrix, SeriesStats, StatSeries,
};
pub use render::{render, ChartData};
