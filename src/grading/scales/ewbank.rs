use super::GradeScale;
use crate::grading::{GradeSystem, HintContext};

/// Ewbank open-ended numeric grades (Australia / South Africa).
///
/// Only pure-digit labels are claimed, and only values in the typical
/// 10..39 window convert. The window is intentional disambiguation: it
/// keeps stray numeric labels from masquerading as grades.
pub struct Ewbank;

const MIN_GRADE: i64 = 10;
const MAX_GRADE: i64 = 40;

impl Ewbank {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Ewbank {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeScale for Ewbank {
    fn detect(&self, label: &str) -> bool {
        !label.is_empty() && label.chars().all(|c| c.is_ascii_digit())
    }

    fn convert(&self, label: &str, _ctx: HintContext) -> Option<f64> {
        let value: i64 = label.parse().ok()?;
        if (MIN_GRADE..MAX_GRADE).contains(&value) {
            // Ewbank 18 sits at 5.9; two Ewbank steps make one YDS number
            Some((value - 9) as f64 / 2.0 + 4.5)
        } else {
            None
        }
    }

    fn system(&self) -> GradeSystem {
        GradeSystem::Ewbank
    }

    fn name(&self) -> &str {
        "Ewbank"
    }
}
