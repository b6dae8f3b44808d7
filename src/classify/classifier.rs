//! Structural payload classification
//!
//! An ordered list of shape rules, each a `(matches, extract)` pair.
//! `matches` is a cheap structural/name gate; `extract` validates the
//! full structure and normalizes it into a [`CanonicalAnalysis`].
//! Rules are tried top to bottom and the first successful extraction
//! wins, so more structurally specific rules must precede permissive
//! ones: a payload can satisfy several predicates, and legacy
//! payloads carry unreliable declared names.
//!
//! Recognized historical encodings per kind:
//!
//! - pairwise RMSD: current `{data: [{name?, rmsds}]}`, legacy single
//!   object `{rmsds, step?}`, raw square matrix
//! - RMSD: current `{data: [{reference, group?, values}]}`, legacy
//!   single stat-series object, raw numeric array
//! - per-residue matrix: `{data, labels?}`, legacy `{matrix}`, raw
//!   square matrix
//!
//! Classification is a stateless single pass. No rule ever guesses:
//! an unmatched payload yields `None`, which the caller surfaces as a
//! generic placeholder, not as an application fault.

use crate::classify::shapes::{
    AnalysisKind, CanonicalAnalysis, NamedComponent, PairwiseEntry, PcaProjection, SeriesGroup,
};
use crate::reduce::sanitize::{json_matrix, json_number, json_series};
use crate::reduce::stats::StatSeries;
use serde_json::Value;
use tracing::{debug, trace};

/// One entry of the ordered classification table
pub struct ShapeRule {
    /// Kind this rule normalizes into
    pub kind: AnalysisKind,
    /// Cheap gate on declared name and coarse structure
    pub matches: fn(name: &str, payload: &Value) -> bool,
    /// Full structural validation and normalization
    pub extract: fn(name: &str, payload: &Value) -> Option<CanonicalAnalysis>,
}

/// The ordered classification table, most specific rules first
pub static SHAPE_RULES: &[ShapeRule] = &[
    // Pairwise RMSD first: a `{rmsds: matrix}` payload declared as
    // plain "rmsds" must not fall into the series rules below.
    ShapeRule {
        kind: AnalysisKind::RmsdPairwise,
        matches: matches_pairwise_group_array,
        extract: extract_pairwise_group_array,
    },
    ShapeRule {
        kind: AnalysisKind::RmsdPairwise,
        matches: matches_pairwise_object,
        extract: extract_pairwise_object,
    },
    ShapeRule {
        kind: AnalysisKind::Rmsd,
        matches: matches_rmsd_group_array,
        extract: extract_rmsd_group_array,
    },
    ShapeRule {
        kind: AnalysisKind::Rmsd,
        matches: matches_rmsd_stat_object,
        extract: extract_rmsd_stat_object,
    },
    ShapeRule {
        kind: AnalysisKind::Rmsd,
        matches: matches_rmsd_raw_array,
        extract: extract_rmsd_raw_array,
    },
    ShapeRule {
        kind: AnalysisKind::RadiusOfGyration,
        matches: matches_rgyr,
        extract: extract_rgyr,
    },
    ShapeRule {
        kind: AnalysisKind::Fluctuation,
        matches: matches_fluctuation,
        extract: extract_fluctuation,
    },
    ShapeRule {
        kind: AnalysisKind::TmScores,
        matches: matches_tmscores,
        extract: extract_tmscores,
    },
    // PCA before the generic matrix fallback: a projection payload is
    // structurally a two-column matrix.
    ShapeRule {
        kind: AnalysisKind::Pca,
        matches: matches_pca,
        extract: extract_pca,
    },
    ShapeRule {
        kind: AnalysisKind::RmsdPairwise,
        matches: matches_pairwise_raw_matrix,
        extract: extract_pairwise_raw_matrix,
    },
    ShapeRule {
        kind: AnalysisKind::PerResidueMatrix,
        matches: matches_per_residue_named,
        extract: extract_per_residue,
    },
    // Most permissive rule last: anything that is structurally a
    // square per-residue matrix, whatever its declared name.
    ShapeRule {
        kind: AnalysisKind::PerResidueMatrix,
        matches: matches_per_residue_structural,
        extract: extract_per_residue,
    },
];

/// Scan the rule table; first successful extraction wins
pub fn resolve(name: &str, payload: &Value) -> Option<(&'static ShapeRule, CanonicalAnalysis)> {
    for rule in SHAPE_RULES {
        if (rule.matches)(name, payload) {
            if let Some(canonical) = (rule.extract)(name, payload) {
                return Some((rule, canonical));
            }
        }
    }
    trace!(analysis = name, "no analysis shape matched");
    None
}

/// Classify a `(name, payload)` pair into its canonical shape
pub fn classify(name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    resolve(name, payload).map(|(_, canonical)| canonical)
}

// ==================== Name gates ====================

fn norm(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

fn is_rmsd_name(name: &str) -> bool {
    let n = norm(name);
    n.starts_with("rmsd") && !n.contains("pairwise")
}

fn is_pairwise_name(name: &str) -> bool {
    norm(name).contains("pairwise")
}

// ==================== Structural predicates ====================

fn is_numeric(value: &Value) -> bool {
    json_number(value).is_some()
}

/// Non-empty array of coercible numbers
fn is_numeric_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| !items.is_empty() && items.iter().all(is_numeric))
}

/// Non-empty array of rows, every cell numeric or null
fn is_matrix_value(value: &Value) -> bool {
    let Some(rows) = value.as_array() else {
        return false;
    };
    if rows.is_empty() {
        return false;
    }
    let mut saw_numeric = false;
    for row in rows {
        let Some(cells) = row.as_array() else {
            return false;
        };
        for cell in cells {
            if is_numeric(cell) {
                saw_numeric = true;
            } else if !cell.is_null() {
                return false;
            }
        }
    }
    saw_numeric
}

fn is_square_matrix_value(value: &Value) -> bool {
    let Some(rows) = value.as_array() else {
        return false;
    };
    if !is_matrix_value(value) {
        return false;
    }
    let cols = rows
        .iter()
        .filter_map(|r| r.as_array().map(|c| c.len()))
        .max()
        .unwrap_or(0);
    rows.len() == cols
}

/// Object carrying a numeric array under `data` or `values`
fn is_stat_series_value(value: &Value) -> bool {
    value.is_object()
        && value
            .get("data")
            .or_else(|| value.get("values"))
            .is_some_and(is_numeric_array)
}

/// `{data: [...]}` where every entry is an object with a numeric
/// `data`/`values` array
///
/// Keys are probed in the same order [`StatSeries::from_value`]
/// extracts them, so an entry that passes here always extracts.
fn is_series_group_array(value: &Value) -> bool {
    value.get("data").and_then(Value::as_array).is_some_and(|entries| {
        !entries.is_empty()
            && entries.iter().all(|entry| {
                entry.is_object()
                    && entry
                        .get("data")
                        .or_else(|| entry.get("values"))
                        .is_some_and(is_numeric_array)
            })
    })
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

fn step_field(value: &Value) -> f64 {
    // Frame labels name original frame numbers, so only whole
    // positive steps are honored
    value
        .get("step")
        .and_then(json_number)
        .filter(|&s| s > 0.0 && s.fract() == 0.0)
        .unwrap_or(1.0)
}

// ==================== Pairwise RMSD ====================

fn matches_pairwise_group_array(_name: &str, payload: &Value) -> bool {
    payload.get("data").and_then(Value::as_array).is_some_and(|entries| {
        !entries.is_empty()
            && entries
                .iter()
                .all(|entry| entry.get("rmsds").is_some_and(is_matrix_value))
    })
}

fn extract_pairwise_group_array(_name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    let entries = payload.get("data")?.as_array()?;
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let matrix = json_matrix(entry.get("rmsds")?)?;
        out.push(PairwiseEntry {
            name: string_field(entry, "name"),
            matrix,
        });
    }
    if out.is_empty() {
        return None;
    }
    Some(CanonicalAnalysis::RmsdPairwise {
        entries: out,
        step: step_field(payload),
    })
}

fn matches_pairwise_object(_name: &str, payload: &Value) -> bool {
    payload.get("rmsds").is_some_and(is_matrix_value)
}

fn extract_pairwise_object(name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    let matrix = json_matrix(payload.get("rmsds")?)?;
    debug!(analysis = name, "normalized legacy single-object pairwise payload");
    Some(CanonicalAnalysis::RmsdPairwise {
        entries: vec![PairwiseEntry { name: None, matrix }],
        step: step_field(payload),
    })
}

fn matches_pairwise_raw_matrix(name: &str, payload: &Value) -> bool {
    (is_pairwise_name(name) || is_rmsd_name(name)) && is_square_matrix_value(payload)
}

fn extract_pairwise_raw_matrix(name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    let matrix = json_matrix(payload)?;
    debug!(analysis = name, "normalized raw-matrix pairwise payload");
    Some(CanonicalAnalysis::RmsdPairwise {
        entries: vec![PairwiseEntry { name: None, matrix }],
        step: 1.0,
    })
}

// ==================== RMSD ====================

fn matches_rmsd_group_array(name: &str, payload: &Value) -> bool {
    is_rmsd_name(name) && is_series_group_array(payload)
}

fn extract_rmsd_group_array(_name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    let entries = payload.get("data")?.as_array()?;
    let mut groups = Vec::with_capacity(entries.len());
    for entry in entries {
        let series = StatSeries::from_value(entry)?;
        groups.push(SeriesGroup {
            reference: string_field(entry, "reference"),
            group: string_field(entry, "group"),
            series,
        });
    }
    if groups.is_empty() {
        return None;
    }
    Some(CanonicalAnalysis::Rmsd { groups })
}

fn matches_rmsd_stat_object(name: &str, payload: &Value) -> bool {
    is_rmsd_name(name) && is_stat_series_value(payload)
}

fn extract_rmsd_stat_object(name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    let series = StatSeries::from_value(payload)?;
    debug!(analysis = name, "normalized legacy single-series RMSD payload");
    Some(CanonicalAnalysis::Rmsd {
        groups: vec![SeriesGroup {
            reference: None,
            group: None,
            series,
        }],
    })
}

fn matches_rmsd_raw_array(name: &str, payload: &Value) -> bool {
    is_rmsd_name(name) && is_numeric_array(payload)
}

fn extract_rmsd_raw_array(name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    let data = json_series(payload)?;
    debug!(analysis = name, "normalized raw-array RMSD payload");
    Some(CanonicalAnalysis::Rmsd {
        groups: vec![SeriesGroup {
            reference: None,
            group: None,
            series: StatSeries { data, stats: None },
        }],
    })
}

// ==================== Radius of gyration ====================

const RGYR_COMPONENTS: &[&str] = &["rgyr", "rgyrx", "rgyry", "rgyrz"];

fn matches_rgyr(name: &str, payload: &Value) -> bool {
    let n = norm(name);
    (n.contains("rgyr") || n.contains("gyration")) && payload.is_object()
}

fn extract_rgyr(_name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    let mut components = Vec::new();
    for &key in RGYR_COMPONENTS {
        let Some(value) = payload.get(key) else {
            continue;
        };
        // A component is a stat-series object or a bare numeric array
        let series = if is_numeric_array(value) {
            json_series(value).map(|data| StatSeries { data, stats: None })
        } else if is_stat_series_value(value) {
            StatSeries::from_value(value)
        } else {
            None
        };
        if let Some(series) = series {
            components.push(NamedComponent {
                name: key.to_string(),
                series,
            });
        }
    }
    if components.is_empty() {
        return None;
    }
    Some(CanonicalAnalysis::RadiusOfGyration { components })
}

// ==================== Fluctuation ====================

fn matches_fluctuation(name: &str, _payload: &Value) -> bool {
    let n = norm(name);
    n.contains("fluct") || n.contains("rmsf")
}

fn extract_fluctuation(_name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    let series = if is_numeric_array(payload) {
        StatSeries {
            data: json_series(payload)?,
            stats: None,
        }
    } else if is_stat_series_value(payload) {
        StatSeries::from_value(payload)?
    } else {
        return None;
    };
    Some(CanonicalAnalysis::Fluctuation { series })
}

// ==================== TM-scores ====================

fn matches_tmscores(name: &str, payload: &Value) -> bool {
    norm(name).contains("tmscore") && is_series_group_array(payload)
}

fn extract_tmscores(_name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    let entries = payload.get("data")?.as_array()?;
    let mut groups = Vec::with_capacity(entries.len());
    for entry in entries {
        let series = StatSeries::from_value(entry)?;
        groups.push(SeriesGroup {
            reference: string_field(entry, "reference"),
            group: string_field(entry, "group"),
            series,
        });
    }
    if groups.is_empty() {
        return None;
    }
    Some(CanonicalAnalysis::TmScores { groups })
}

// ==================== PCA ====================

fn matches_pca(name: &str, _payload: &Value) -> bool {
    norm(name).contains("pca")
}

/// Read `[[x, y], ...]` rows, dropping rows that are not coordinate
/// pairs (filtering policy).
fn projection_points(value: &Value) -> Option<Vec<[f64; 2]>> {
    let rows = value.as_array()?;
    let points: Vec<[f64; 2]> = rows
        .iter()
        .filter_map(|row| {
            let cells = row.as_array()?;
            let x = json_number(cells.first()?)?;
            let y = json_number(cells.get(1)?)?;
            Some([x, y])
        })
        .collect();
    Some(points)
}

fn extract_pca(name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    if let Some(projections) = payload.get("projections").and_then(Value::as_array) {
        let mut out = Vec::with_capacity(projections.len());
        for projection in projections {
            let points = projection_points(projection.get("data")?)?;
            out.push(PcaProjection {
                name: string_field(projection, "name"),
                eigenvalue: projection.get("eigenvalue").and_then(json_number),
                points,
            });
        }
        if out.is_empty() {
            return None;
        }
        return Some(CanonicalAnalysis::Pca { projections: out });
    }

    // Legacy form: one projection directly under `data`
    let points = projection_points(payload.get("data")?)?;
    if points.is_empty() {
        return None;
    }
    debug!(analysis = name, "normalized legacy single-projection PCA payload");
    Some(CanonicalAnalysis::Pca {
        projections: vec![PcaProjection {
            name: None,
            eigenvalue: payload.get("eigenvalue").and_then(json_number),
            points,
        }],
    })
}

// ==================== Per-residue matrix ====================

fn residue_labels(payload: &Value) -> Option<Vec<String>> {
    let labels: Vec<String> = payload
        .get("labels")?
        .as_array()?
        .iter()
        .filter_map(|l| l.as_str().map(str::to_string))
        .collect();
    (!labels.is_empty()).then_some(labels)
}

fn matches_per_residue_named(name: &str, _payload: &Value) -> bool {
    let n = norm(name);
    n.contains("dist") || n.contains("matrix") || n.contains("contact")
}

fn matches_per_residue_structural(_name: &str, payload: &Value) -> bool {
    is_square_matrix_value(payload)
        || payload.get("data").is_some_and(is_square_matrix_value)
        || payload.get("matrix").is_some_and(is_square_matrix_value)
}

fn extract_per_residue(name: &str, payload: &Value) -> Option<CanonicalAnalysis> {
    if let Some(matrix) = payload.get("data").and_then(json_matrix) {
        if matrix.is_empty() {
            return None;
        }
        return Some(CanonicalAnalysis::PerResidueMatrix {
            matrix,
            labels: residue_labels(payload),
        });
    }
    if let Some(matrix) = payload.get("matrix").and_then(json_matrix) {
        if matrix.is_empty() {
            return None;
        }
        debug!(analysis = name, "normalized legacy matrix-key per-residue payload");
        return Some(CanonicalAnalysis::PerResidueMatrix {
            matrix,
            labels: residue_labels(payload),
        });
    }
    if is_matrix_value(payload) {
        let matrix = json_matrix(payload)?;
        debug!(analysis = name, "normalized raw per-residue matrix payload");
        return Some(CanonicalAnalysis::PerResidueMatrix {
            matrix,
            labels: None,
        });
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_multi_group_rmsd_beats_single_series() {
        // Array-of-objects form must match the multi-group shape
        let payload = json!({
            "data": [{"reference": "A", "group": "g1", "values": [0.1, 0.2]}]
        });
        let canonical = classify("rmsds", &payload).unwrap();
        match canonical {
            CanonicalAnalysis::Rmsd { groups } => {
                assert_eq!(groups.len(), 1);
                assert_eq!(groups[0].reference.as_deref(), Some("A"));
                assert_eq!(groups[0].group.as_deref(), Some("g1"));
                assert_eq!(groups[0].series.data, vec![0.1, 0.2]);
            }
            other => panic!("expected Rmsd, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_legacy_single_series_rmsd() {
        let payload = json!({
            "data": [1.0, 2.0, 3.0],
            "average": 2.0,
            "stddev": 0.82,
            "min": 1.0,
            "max": 3.0,
        });
        let canonical = classify("rmsds", &payload).unwrap();
        match canonical {
            CanonicalAnalysis::Rmsd { groups } => {
                assert_eq!(groups.len(), 1);
                assert!(groups[0].reference.is_none());
                assert!(groups[0].series.stats.is_some());
            }
            other => panic!("expected Rmsd, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_raw_array_rmsd() {
        let canonical = classify("rmsd", &json!([0.5, 0.6, 0.7])).unwrap();
        match canonical {
            CanonicalAnalysis::Rmsd { groups } => {
                assert_eq!(groups[0].series.data, vec![0.5, 0.6, 0.7]);
                assert!(groups[0].series.stats.is_none());
            }
            other => panic!("expected Rmsd, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_rmsds_key_routes_to_pairwise_despite_name() {
        // Declared plain "rmsds" but structurally a pairwise payload:
        // the specific rule must win over the series rules.
        let payload = json!({"rmsds": [[0.0, 1.0], [1.0, 0.0]], "step": 10});
        let canonical = classify("rmsds", &payload).unwrap();
        match canonical {
            CanonicalAnalysis::RmsdPairwise { entries, step } => {
                assert_eq!(entries.len(), 1);
                assert_eq!(entries[0].matrix, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);
                assert_eq!(step, 10.0);
            }
            other => panic!("expected RmsdPairwise, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_fractional_step_falls_back_to_whole_frames() {
        let payload = json!({"rmsds": [[0.0, 1.0], [1.0, 0.0]], "step": 2.5});
        match classify("rmsds", &payload).unwrap() {
            CanonicalAnalysis::RmsdPairwise { step, .. } => assert_eq!(step, 1.0),
            other => panic!("expected RmsdPairwise, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_group_entry_key_precedence_is_consistent() {
        // `data` wins over `values` in both the shape check and the
        // extraction, so a matching entry always extracts
        let both = json!({
            "data": [{"reference": "A", "data": [1.0, 2.0], "values": ["junk"]}]
        });
        match classify("rmsds", &both).unwrap() {
            CanonicalAnalysis::Rmsd { groups } => {
                assert_eq!(groups[0].series.data, vec![1.0, 2.0]);
            }
            other => panic!("expected Rmsd, got {:?}", other.kind()),
        }
        // A junk `data` key is not patched over by a numeric `values`
        let conflicting = json!({
            "data": [{"reference": "A", "data": "junk", "values": [1.0, 2.0]}]
        });
        assert!(classify("rmsds", &conflicting).is_none());
    }

    #[test]
    fn test_pairwise_current_array_of_objects() {
        let payload = json!({
            "data": [
                {"name": "backbone", "rmsds": [[0.0, 2.0], [2.0, 0.0]]},
                {"name": "ligand", "rmsds": [[0.0, 3.0], [3.0, 0.0]]},
            ]
        });
        let canonical = classify("rmsd-pairwise", &payload).unwrap();
        match canonical {
            CanonicalAnalysis::RmsdPairwise { entries, step } => {
                assert_eq!(entries.len(), 2);
                assert_eq!(entries[0].name.as_deref(), Some("backbone"));
                assert_eq!(step, 1.0);
            }
            other => panic!("expected RmsdPairwise, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_pairwise_raw_matrix_by_name() {
        let payload = json!([[0.0, 1.5], [1.5, 0.0]]);
        let canonical = classify("rmsds-pairwise", &payload).unwrap();
        assert_eq!(canonical.kind(), AnalysisKind::RmsdPairwise);
    }

    #[test]
    fn test_rgyr_components() {
        let payload = json!({
            "rgyr": {"data": [2.0, 2.1], "average": 2.05, "stddev": 0.05, "min": 2.0, "max": 2.1},
            "rgyrx": {"data": [1.0, 1.1]},
            "other": 42,
        });
        let canonical = classify("rgyr", &payload).unwrap();
        match canonical {
            CanonicalAnalysis::RadiusOfGyration { components } => {
                assert_eq!(components.len(), 2);
                assert_eq!(components[0].name, "rgyr");
                assert!(components[0].series.stats.is_some());
                assert_eq!(components[1].name, "rgyrx");
            }
            other => panic!("expected RadiusOfGyration, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_fluctuation_accepts_object_and_raw_array() {
        let object = json!({"data": [0.3, 0.4, 0.5]});
        assert_eq!(
            classify("fluctuation", &object).unwrap().kind(),
            AnalysisKind::Fluctuation
        );
        let raw = json!([0.3, 0.4, 0.5]);
        assert_eq!(
            classify("rmsf", &raw).unwrap().kind(),
            AnalysisKind::Fluctuation
        );
    }

    #[test]
    fn test_tmscores_with_string_values() {
        // Legacy tmscores payloads store scores as strings
        let payload = json!({
            "data": [{"reference": "firstframe", "values": ["0.91", "0.89"]}]
        });
        let canonical = classify("tmscores", &payload).unwrap();
        match canonical {
            CanonicalAnalysis::TmScores { groups } => {
                assert_eq!(groups[0].series.data, vec![0.91, 0.89]);
            }
            other => panic!("expected TmScores, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_pca_current_projections() {
        let payload = json!({
            "projections": [
                {"eigenvalue": 12.5, "data": [[0.1, -0.2], [0.3, 0.4]]},
                {"eigenvalue": 3.1, "data": [[1.0, 1.0]]},
            ]
        });
        let canonical = classify("pca", &payload).unwrap();
        match canonical {
            CanonicalAnalysis::Pca { projections } => {
                assert_eq!(projections.len(), 2);
                assert_eq!(projections[0].eigenvalue, Some(12.5));
                assert_eq!(projections[0].points, vec![[0.1, -0.2], [0.3, 0.4]]);
            }
            other => panic!("expected Pca, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_pca_legacy_single_projection_not_matrix() {
        // A two-column point list is structurally a matrix; the PCA
        // rule must run before the per-residue fallback.
        let payload = json!({"data": [[0.1, 0.2], [0.3, 0.4]]});
        assert_eq!(classify("pca", &payload).unwrap().kind(), AnalysisKind::Pca);
    }

    #[test]
    fn test_per_residue_three_encodings() {
        let square = json!([[0.0, 4.2], [4.2, 0.0]]);
        let current = json!({"data": [[0.0, 4.2], [4.2, 0.0]], "labels": ["GLY12", "ALA13"]});
        let legacy = json!({"matrix": [[0.0, 4.2], [4.2, 0.0]]});

        match classify("distance-matrix", &current).unwrap() {
            CanonicalAnalysis::PerResidueMatrix { labels, .. } => {
                assert_eq!(labels.unwrap(), vec!["GLY12", "ALA13"]);
            }
            other => panic!("expected PerResidueMatrix, got {:?}", other.kind()),
        }
        assert_eq!(
            classify("distmap", &legacy).unwrap().kind(),
            AnalysisKind::PerResidueMatrix
        );
        // Unrecognized name, but structurally a square matrix
        assert_eq!(
            classify("something-new", &square).unwrap().kind(),
            AnalysisKind::PerResidueMatrix
        );
    }

    #[test]
    fn test_unrecognized_yields_none() {
        assert!(classify("hbonds", &json!({"weird": true})).is_none());
        assert!(classify("rmsds", &json!("not a payload")).is_none());
        assert!(classify("", &json!(null)).is_none());
        // Non-square anonymous matrix is not guessed at
        assert!(classify("unknown", &json!([[1.0, 2.0, 3.0]])).is_none());
    }

    #[test]
    fn test_name_gate_respects_declared_kind() {
        // A numeric array declared as tmscores is not an RMSD series
        assert!(classify("tmscores", &json!([1.0, 2.0])).is_none());
    }
}
