//! Chart-ready structures and per-kind renderers
//!
//! Renderers are pure functions from a canonical analysis plus the
//! reduction knobs to a [`ChartData`] value the charting collaborator
//! can draw directly: every series is already at or under the point
//! budget, every matrix at or under the target resolution, and axis
//! labels name original frames/residues via the block source ranges.

use crate::classify::shapes::CanonicalAnalysis;
use crate::config::ReductionConfig;
use crate::reduce::matrix::{axis_labels, downsample_matrix};
use crate::reduce::series::decimate_points;
use crate::reduce::stats::{stat_to_series, LabeledSeries};
use serde::Serialize;

/// A reduced, chart-ready analysis result
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "chart", rename_all = "snake_case")]
pub enum ChartData {
    Lines(LineChart),
    Heatmap(HeatmapChart),
    Scatter(ScatterChart),
}

/// One or more labeled line series over a shared axis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<LabeledSeries>,
}

/// A scatter point cloud per series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

/// One or more heatmap panels (one per pairwise selection)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapChart {
    pub title: String,
    pub panels: Vec<HeatmapPanel>,
}

/// A block-reduced matrix flattened for a heatmap surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapPanel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `(col, row, value)` triples
    pub cells: Vec<[f64; 3]>,
    pub rows: usize,
    pub cols: usize,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub row_stride: usize,
    pub col_stride: usize,
}

/// Render any canonical analysis with its kind's renderer
pub fn render_canonical(canonical: &CanonicalAnalysis, config: &ReductionConfig) -> Option<ChartData> {
    match canonical {
        CanonicalAnalysis::Rmsd { .. } => render_rmsd(canonical, config),
        CanonicalAnalysis::RmsdPairwise { .. } => render_pairwise(canonical, config),
        CanonicalAnalysis::RadiusOfGyration { .. } => render_rgyr(canonical, config),
        CanonicalAnalysis::Fluctuation { .. } => render_fluctuation(canonical, config),
        CanonicalAnalysis::TmScores { .. } => render_tmscores(canonical, config),
        CanonicalAnalysis::Pca { .. } => render_pca(canonical, config),
        CanonicalAnalysis::PerResidueMatrix { .. } => render_per_residue(canonical, config),
    }
}

/// Render a multi-group RMSD analysis as a line chart
pub fn render_rmsd(canonical: &CanonicalAnalysis, config: &ReductionConfig) -> Option<ChartData> {
    let CanonicalAnalysis::Rmsd { groups } = canonical else {
        return None;
    };
    let series = groups
        .iter()
        .filter_map(|g| {
            stat_to_series(
                Some(&g.series),
                &g.label("RMSD"),
                0.0,
                1.0,
                Some(config.series_target_points),
            )
        })
        .collect();
    Some(ChartData::Lines(LineChart {
        title: "RMSD".to_string(),
        x_label: "Frame".to_string(),
        y_label: "RMSD".to_string(),
        series,
    }))
}

/// Render radius-of-gyration components as a line chart
pub fn render_rgyr(canonical: &CanonicalAnalysis, config: &ReductionConfig) -> Option<ChartData> {
    let CanonicalAnalysis::RadiusOfGyration { components } = canonical else {
        return None;
    };
    let series = components
        .iter()
        .filter_map(|c| {
            stat_to_series(
                Some(&c.series),
                &c.name,
                0.0,
                1.0,
                Some(config.series_target_points),
            )
        })
        .collect();
    Some(ChartData::Lines(LineChart {
        title: "Radius of gyration".to_string(),
        x_label: "Frame".to_string(),
        y_label: "Rgyr".to_string(),
        series,
    }))
}

/// Render a per-residue fluctuation analysis; residues are 1-based
pub fn render_fluctuation(
    canonical: &CanonicalAnalysis,
    config: &ReductionConfig,
) -> Option<ChartData> {
    let CanonicalAnalysis::Fluctuation { series } = canonical else {
        return None;
    };
    let series = stat_to_series(
        Some(series),
        "Fluctuation",
        1.0,
        1.0,
        Some(config.series_target_points),
    )?;
    Some(ChartData::Lines(LineChart {
        title: "Fluctuation".to_string(),
        x_label: "Residue".to_string(),
        y_label: "RMSF".to_string(),
        series: vec![series],
    }))
}

/// Render TM-scores against each reference as a line chart
pub fn render_tmscores(canonical: &CanonicalAnalysis, config: &ReductionConfig) -> Option<ChartData> {
    let CanonicalAnalysis::TmScores { groups } = canonical else {
        return None;
    };
    let series = groups
        .iter()
        .filter_map(|g| {
            stat_to_series(
                Some(&g.series),
                &g.label("TM-score"),
                0.0,
                1.0,
                Some(config.series_target_points),
            )
        })
        .collect();
    Some(ChartData::Lines(LineChart {
        title: "TM-scores".to_string(),
        x_label: "Frame".to_string(),
        y_label: "TM-score".to_string(),
        series,
    }))
}

/// Render PCA projections as decimated scatter clouds
pub fn render_pca(canonical: &CanonicalAnalysis, config: &ReductionConfig) -> Option<ChartData> {
    let CanonicalAnalysis::Pca { projections } = canonical else {
        return None;
    };
    let series = projections
        .iter()
        .enumerate()
        .map(|(i, projection)| {
            let base = projection
                .name
                .clone()
                .unwrap_or_else(|| format!("Projection {}", i + 1));
            let name = match projection.eigenvalue {
                Some(eigenvalue) => format!("{} (eigenvalue {:.2})", base, eigenvalue),
                None => base,
            };
            ScatterSeries {
                name,
                points: decimate_points(&projection.points, config.series_target_points),
            }
        })
        .collect();
    Some(ChartData::Scatter(ScatterChart {
        title: "PCA".to_string(),
        series,
    }))
}

/// Frame axis labels for pairwise matrices
///
/// `step` is frames per matrix index; a block `(s, e)` covers frames
/// `s*step+1` through `(e+1)*step` in the 1-based portal numbering.
fn frame_labels(ranges: &[(usize, usize)], step: f64) -> Vec<String> {
    ranges
        .iter()
        .map(|&(start, end)| {
            let lo = start as f64 * step + 1.0;
            let hi = (end + 1) as f64 * step;
            if lo >= hi {
                format!("Frame {}", lo)
            } else {
                format!("Frame {}-{}", lo, hi)
            }
        })
        .collect()
}

/// Render pairwise RMSD matrices as heatmap panels
pub fn render_pairwise(canonical: &CanonicalAnalysis, config: &ReductionConfig) -> Option<ChartData> {
    let CanonicalAnalysis::RmsdPairwise { entries, step } = canonical else {
        return None;
    };
    let panels = entries
        .iter()
        .map(|entry| {
            let reduced = downsample_matrix(entry.matrix.clone(), config.matrix_target_size);
            HeatmapPanel {
                name: entry.name.clone(),
                rows: reduced.rows(),
                cols: reduced.cols(),
                row_labels: frame_labels(&reduced.row_ranges, *step),
                col_labels: frame_labels(&reduced.col_ranges, *step),
                row_stride: reduced.row_stride,
                col_stride: reduced.col_stride,
                cells: reduced.heatmap_cells(),
            }
        })
        .collect();
    Some(ChartData::Heatmap(HeatmapChart {
        title: "Pairwise RMSD".to_string(),
        panels,
    }))
}

/// Residue axis labels, honoring payload labels when they line up
fn residue_axis_labels(
    ranges: &[(usize, usize)],
    labels: Option<&Vec<String>>,
    original_len: usize,
) -> Vec<String> {
    match labels {
        Some(labels) if labels.len() == original_len => ranges
            .iter()
            .map(|&(start, end)| {
                if start == end {
                    labels[start].clone()
                } else {
                    format!("{}-{}", labels[start], labels[end])
                }
            })
            .collect(),
        _ => axis_labels("Residue", ranges, 1),
    }
}

/// Render a per-residue matrix as a single heatmap panel
pub fn render_per_residue(
    canonical: &CanonicalAnalysis,
    config: &ReductionConfig,
) -> Option<ChartData> {
    let CanonicalAnalysis::PerResidueMatrix { matrix, labels } = canonical else {
        return None;
    };
    let original_rows = matrix.len();
    let original_cols = matrix.iter().map(|r| r.len()).max().unwrap_or(0);
    let reduced = downsample_matrix(matrix.clone(), config.matrix_target_size);
    let panel = HeatmapPanel {
        name: None,
        rows: reduced.rows(),
        cols: reduced.cols(),
        row_labels: residue_axis_labels(&reduced.row_ranges, labels.as_ref(), original_rows),
        col_labels: residue_axis_labels(&reduced.col_ranges, labels.as_ref(), original_cols),
        row_stride: reduced.row_stride,
        col_stride: reduced.col_stride,
        cells: reduced.heatmap_cells(),
    };
    Some(ChartData::Heatmap(HeatmapChart {
        title: "Per-residue matrix".to_string(),
        panels: vec![panel],
    }))
}
