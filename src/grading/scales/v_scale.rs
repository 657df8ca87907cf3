use super::GradeScale;
use crate::grading::{GradeSystem, HintContext};

/// US bouldering V-scale ("VB", "V0".."V17").
///
/// V0 lands at 10.0 so boulder problems chart alongside 5.10-range routes.
/// The linear offset is a rough visual equivalence, not a physically exact
/// conversion.
pub struct VScale;

impl VScale {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VScale {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeScale for VScale {
    fn detect(&self, label: &str) -> bool {
        label.starts_with('V')
    }

    fn convert(&self, label: &str, _ctx: HintContext) -> Option<f64> {
        // "VB" and anything marked easy sit just below V0
        if label == "VB" || label.contains("EASY") {
            return Some(9.0);
        }

        let numeric: String = label[1..]
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        numeric.parse::<f64>().ok().map(|n| n + 10.0)
    }

    fn system(&self) -> GradeSystem {
        GradeSystem::VScale
    }

    fn name(&self) -> &str {
        "V-scale"
    }
}
