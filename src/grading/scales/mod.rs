// Base trait and the individual grading-system scales
pub mod ewbank;
pub mod french;
pub mod v_scale;
pub mod yds;

// Re-export the main components
pub use ewbank::Ewbank;
pub use french::French;
pub use v_scale::VScale;
pub use yds::Yds;

use crate::grading::{GradeSystem, HintContext};

/// Base trait for notation-specific grade scales.
///
/// `detect` is a pure notation check: it must claim every label written in
/// this scale's syntax, including ones that later fail to convert. The
/// registry consults scales in priority order and stops at the first claim.
pub trait GradeScale: Send + Sync {
    /// Whether this scale's notation claims the label. The label is already
    /// canonical (trimmed, uppercased).
    fn detect(&self, label: &str) -> bool;

    /// Convert a claimed label to the unified difficulty value, or `None`
    /// when the label is malformed or out of the notation's domain.
    fn convert(&self, label: &str, ctx: HintContext) -> Option<f64>;

    /// The grading system this scale implements.
    fn system(&self) -> GradeSystem;

    /// Get a human-readable name for this scale.
    fn name(&self) -> &str;
}
