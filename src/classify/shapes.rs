//! Canonical analysis shapes
//!
//! The closed set of tagged variants every recognized payload is
//! normalized into. Each variant carries only the fields its renderer
//! needs; the raw payload is never mutated or carried along.

use crate::reduce::stats::StatSeries;

/// The analysis kinds the portal can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// RMSD over time, one or more reference/group series
    Rmsd,
    /// Frame-vs-frame RMSD matrix
    RmsdPairwise,
    /// Radius of gyration components over time
    RadiusOfGyration,
    /// Per-residue fluctuation (RMSF)
    Fluctuation,
    /// TM-scores against one or more references
    TmScores,
    /// PCA projection point clouds
    Pca,
    /// Generic per-residue matrix (distances, contacts)
    PerResidueMatrix,
}

impl AnalysisKind {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            AnalysisKind::Rmsd => "RMSD",
            AnalysisKind::RmsdPairwise => "Pairwise RMSD",
            AnalysisKind::RadiusOfGyration => "Radius of gyration",
            AnalysisKind::Fluctuation => "Fluctuation",
            AnalysisKind::TmScores => "TM-scores",
            AnalysisKind::Pca => "PCA",
            AnalysisKind::PerResidueMatrix => "Per-residue matrix",
        }
    }

    /// Get all analysis kinds
    pub fn all() -> &'static [AnalysisKind] {
        &[
            AnalysisKind::Rmsd,
            AnalysisKind::RmsdPairwise,
            AnalysisKind::RadiusOfGyration,
            AnalysisKind::Fluctuation,
            AnalysisKind::TmScores,
            AnalysisKind::Pca,
            AnalysisKind::PerResidueMatrix,
        ]
    }
}

/// One labeled series within a multi-group analysis (RMSD, TM-scores)
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesGroup {
    /// Reference structure the series was computed against
    pub reference: Option<String>,
    /// Selection group within the reference, when present
    pub group: Option<String>,
    pub series: StatSeries,
}

impl SeriesGroup {
    /// Legend label for the group, falling back to the analysis name
    pub fn label(&self, fallback: &str) -> String {
        match (&self.reference, &self.group) {
            (Some(reference), Some(group)) => format!("{} ({})", reference, group),
            (Some(reference), None) => reference.clone(),
            (None, Some(group)) => group.clone(),
            (None, None) => fallback.to_string(),
        }
    }
}

/// A named per-axis component (rgyr, rgyrx, rgyry, rgyrz)
#[derive(Debug, Clone, PartialEq)]
pub struct NamedComponent {
    pub name: String,
    pub series: StatSeries,
}

/// One pairwise RMSD matrix, optionally named after its selection
#[derive(Debug, Clone, PartialEq)]
pub struct PairwiseEntry {
    pub name: Option<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// One PCA projection point cloud
#[derive(Debug, Clone, PartialEq)]
pub struct PcaProjection {
    pub name: Option<String>,
    /// Explained variance of the projection, when the payload has it
    pub eigenvalue: Option<f64>,
    pub points: Vec<[f64; 2]>,
}

/// A recognized, normalized analysis payload
///
/// Exactly one variant per [`AnalysisKind`]; legacy encodings are
/// folded into these shapes by the classifier before any renderer
/// sees them.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalAnalysis {
    Rmsd {
        groups: Vec<SeriesGroup>,
    },
    RmsdPairwise {
        entries: Vec<PairwiseEntry>,
        /// Frames per matrix index, for axis labeling
        step: f64,
    },
    RadiusOfGyration {
        components: Vec<NamedComponent>,
    },
    Fluctuation {
        series: StatSeries,
    },
    TmScores {
        groups: Vec<SeriesGroup>,
    },
    Pca {
        projections: Vec<PcaProjection>,
    },
    PerResidueMatrix {
        matrix: Vec<Vec<f64>>,
        /// Residue labels for axis construction, when supplied
        labels: Option<Vec<String>>,
    },
}

impl CanonicalAnalysis {
    /// The kind this canonical structure belongs to
    pub fn kind(&self) -> AnalysisKind {
        match self {
            CanonicalAnalysis::Rmsd { .. } => AnalysisKind::Rmsd,
            CanonicalAnalysis::RmsdPairwise { .. } => AnalysisKind::RmsdPairwise,
            CanonicalAnalysis::RadiusOfGyration { .. } => AnalysisKind::RadiusOfGyration,
            CanonicalAnalysis::Fluctuation { .. } => AnalysisKind::Fluctuation,
            CanonicalAnalysis::TmScores { .. } => AnalysisKind::TmScores,
            CanonicalAnalysis::Pca { .. } => AnalysisKind::Pca,
            CanonicalAnalysis::PerResidueMatrix { .. } => AnalysisKind::PerResidueMatrix,
        }
    }
}
