//! Renderer dispatch
//!
//! The boundary the visualization layer calls per request: the
//! ordered classification table is scanned linearly and the first
//! rule whose extractor produces a canonical analysis wins, then its
//! kind's renderer runs. A linear ordered scan (not a name-keyed map)
//! is required because several analysis kinds are distinguished by
//! payload shape rather than by name alone, and one declared name can
//! map to multiple legacy shapes depending on data vintage.
//!
//! When no entry matches, [`render`] returns
//! [`CoreError::NoRenderer`] naming the raw analysis key so the
//! caller can show a generic placeholder.

use crate::classify::classifier;
use crate::classify::shapes::{AnalysisKind, CanonicalAnalysis};
use crate::config::ReductionConfig;
use crate::error::{CoreError, Result};
use crate::render::chart::{self, ChartData};
use serde_json::Value;
use tracing::debug;

type RenderFn = fn(&CanonicalAnalysis, &ReductionConfig) -> Option<ChartData>;

/// The renderer paired with each analysis kind
fn renderer_for(kind: AnalysisKind) -> RenderFn {
    match kind {
        AnalysisKind::Rmsd => chart::render_rmsd,
        AnalysisKind::RmsdPairwise => chart::render_pairwise,
        AnalysisKind::RadiusOfGyration => chart::render_rgyr,
        AnalysisKind::Fluctuation => chart::render_fluctuation,
        AnalysisKind::TmScores => chart::render_tmscores,
        AnalysisKind::Pca => chart::render_pca,
        AnalysisKind::PerResidueMatrix => chart::render_per_residue,
    }
}

/// Classify a payload and run the matching renderer
///
/// The winning rule's canonical extraction feeds its kind's renderer;
/// when every rule declines, the raw key is reported back in the
/// error so the UI can name it in the placeholder.
pub fn render(name: &str, payload: &Value, config: &ReductionConfig) -> Result<ChartData> {
    let Some((rule, canonical)) = classifier::resolve(name, payload) else {
        return Err(CoreError::NoRenderer {
            name: name.to_string(),
        });
    };
    debug!(
        analysis = name,
        kind = rule.kind.display_name(),
        "dispatching analysis renderer"
    );
    renderer_for(rule.kind)(&canonical, config).ok_or_else(|| CoreError::NoRenderer {
        name: name.to_string(),
    })
}
