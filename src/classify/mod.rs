//! Analysis-shape classification
//!
//! Analysis payloads come from an external data service and are only
//! loosely shaped: the same analysis kind exists in several historical
//! encodings, and declared names are not always reliable. This module
//! recognizes which known shape a `(name, payload)` pair matches and
//! normalizes it into one canonical structure per analysis kind, so
//! every renderer downstream handles exactly one shape.
//!
//! - [`shapes`] - the closed set of canonical analysis variants
//! - [`classifier`] - ordered structural predicates and extractors

pub mod classifier;
pub mod shapes;

pub use classifier::{classify, resolve, ShapeRule, SHAPE_RULES};
pub use shapes::{
    AnalysisKind, CanonicalAnalysis, NamedComponent, PairwiseEntry, PcaProjection, SeriesGroup,
};
