use once_cell::sync::Lazy;
use regex::Regex;

use super::GradeScale;
use crate::grading::{GradeSystem, HintContext};

/// Yosemite Decimal System ("5.9", "5.10a", "5.11+").
///
/// The number after "5." is the unified value; the letter refines it in
/// quarter steps. A bare "+" or "-" (old-school grades without a letter)
/// nudges the value by half a grade up or a quarter down.
pub struct Yds;

// Base number, optional letter, optional trailing sign. Anything after the
// first match is ignored, so "5.10a PG-13" still reads as 5.10a.
static GRADE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)([ABCD]?)([+-]?)").unwrap());

impl Yds {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Yds {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeScale for Yds {
    fn detect(&self, label: &str) -> bool {
        label.starts_with("5.")
    }

    fn convert(&self, label: &str, _ctx: HintContext) -> Option<f64> {
        let rest = &label[2..];
        let caps = GRADE_RE.captures(rest)?;

        let base: f64 = caps[1].parse().ok()?;
        let letter = &caps[2];
        let sign = &caps[3];

        // Letter takes precedence; the sign only matters without one
        let modifier = match letter {
            "A" => 0.0,
            "B" => 0.25,
            "C" => 0.5,
            "D" => 0.75,
            _ => match sign {
                "+" => 0.5,
                "-" => -0.25,
                _ => 0.0,
            },
        };

        Some(base + modifier)
    }

    fn system(&self) -> GradeSystem {
        GradeSystem::Yds
    }

    fn name(&self) -> &str {
        "YDS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert(label: &str) -> Option<f64> {
        Yds::new().convert(label, HintContext::default())
    }

    #[test]
    fn base_number_is_the_value() {
        assert_eq!(convert("5.9"), Some(9.0));
        assert_eq!(convert("5.14"), Some(14.0));
    }

    #[test]
    fn letters_refine_in_quarter_steps() {
        assert_eq!(convert("5.10A"), Some(10.0));
        assert_eq!(convert("5.10B"), Some(10.25));
        assert_eq!(convert("5.10C"), Some(10.5));
        assert_eq!(convert("5.10D"), Some(10.75));
    }

    #[test]
    fn bare_signs_nudge_unlettered_grades() {
        assert_eq!(convert("5.11+"), Some(11.5));
        assert_eq!(convert("5.9-"), Some(8.75));
    }

    #[test]
    fn sign_is_ignored_when_a_letter_is_present() {
        assert_eq!(convert("5.10A+"), Some(10.0));
        assert_eq!(convert("5.12C-"), Some(12.5));
    }

    #[test]
    fn trailing_annotations_are_ignored() {
        assert_eq!(convert("5.10A PG-13"), Some(10.0));
    }

    #[test]
    fn missing_base_number_is_unparseable() {
        assert_eq!(convert("5."), None);
        assert_eq!(convert("5.X"), None);
    }

    #[test]
    fn detect_claims_the_five_dot_prefix() {
        let scale = Yds::new();
        assert!(scale.detect("5.10A"));
        assert!(scale.detect("5.X"));
        assert!(!scale.detect("V5"));
        assert!(!scale.detect("15.2"));
    }
}
