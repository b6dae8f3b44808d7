//! Renderer dispatch and chart-ready output
//!
//! - [`chart`] - the structures the charting collaborator consumes
//!   (line charts, heatmaps, scatter plots) and the per-kind pure
//!   renderers that build them from canonical analyses
//! - [`dispatch`] - the ordered first-match boundary that ties the
//!   classification table to the renderers

pub mod chart;
pub mod dispatch;

pub use chart::{
    ChartData, HeatmapChart, HeatmapPanel, LineChart, ScatterChart, ScatterSeries,
};
pub use dispatch::render;
