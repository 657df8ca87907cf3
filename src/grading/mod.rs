use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::constants::BOULDERING_HINT;

pub mod audit;
pub mod scales;

use scales::{Ewbank, French, GradeScale, VScale, Yds};

/// The grading notations the normalizer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradeSystem {
    VScale,
    Yds,
    French,
    Ewbank,
    Unknown,
}

impl GradeSystem {
    pub fn name(&self) -> &'static str {
        match self {
            GradeSystem::VScale => "V-scale",
            GradeSystem::Yds => "YDS",
            GradeSystem::French => "French/Fontainebleau",
            GradeSystem::Ewbank => "Ewbank",
            GradeSystem::Unknown => "unknown",
        }
    }
}

/// Sentinel value returned for labels no notation could value. Callers decide
/// whether to hide these entries or surface them as explicitly unrated.
pub const UNPARSEABLE: f64 = 0.0;

/// A grade label converted onto the unified difficulty scale, retaining the
/// canonical label and the notation that claimed it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedGrade {
    /// Canonical form of the label (trimmed, uppercased).
    pub label: String,
    /// The notation that claimed the label.
    pub system: GradeSystem,
    /// Unified difficulty value, anchored at the YDS number (5.10a -> 10.0).
    pub value: f64,
}

/// Context derived from the free-form discipline hint. Only the presence of
/// the bouldering substring is meaningful; it switches ambiguous French-style
/// labels from the sport table to the Fontainebleau table.
#[derive(Debug, Clone, Copy, Default)]
pub struct HintContext {
    pub bouldering: bool,
}

impl HintContext {
    pub fn from_hint(hint: &str) -> Self {
        Self {
            bouldering: hint.to_lowercase().contains(BOULDERING_HINT),
        }
    }
}

/// Ordered registry of grading-system scales.
///
/// Scales are consulted in a fixed priority order and the first scale whose
/// `detect` claims a label owns it outright: if its conversion then fails,
/// the label is unparseable and later scales are never consulted.
pub struct ScaleRegistry {
    scales: Vec<Box<dyn GradeScale>>,
}

impl ScaleRegistry {
    /// Create a registry with the built-in scales in priority order.
    pub fn new() -> Self {
        let scales: Vec<Box<dyn GradeScale>> = vec![
            Box::new(VScale::new()),
            Box::new(Yds::new()),
            Box::new(French::new()),
            Box::new(Ewbank::new()),
        ];

        Self { scales }
    }

    /// Identify which notation claims a label, without valuing it.
    pub fn classify(&self, grade: &str) -> GradeSystem {
        let label = canonical(grade);
        self.scales
            .iter()
            .find(|scale| scale.detect(&label))
            .map(|scale| scale.system())
            .unwrap_or(GradeSystem::Unknown)
    }

    /// Normalize a label using the first scale that claims it.
    pub fn normalize(&self, grade: &str, ctx: HintContext) -> Option<NormalizedGrade> {
        let label = canonical(grade);
        for scale in &self.scales {
            if scale.detect(&label) {
                return scale.convert(&label, ctx).map(|value| NormalizedGrade {
                    label,
                    system: scale.system(),
                    value,
                });
            }
        }
        None
    }

    /// List the registered scale names, in priority order.
    pub fn list_scales(&self) -> Vec<&str> {
        self.scales.iter().map(|scale| scale.name()).collect()
    }
}

impl Default for ScaleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: Lazy<ScaleRegistry> = Lazy::new(ScaleRegistry::new);

fn canonical(grade: &str) -> String {
    grade.trim().to_uppercase()
}

/// Convert a grade label plus a discipline hint to the unified difficulty
/// value. Pure and infallible: any label no notation can value maps to
/// [`UNPARSEABLE`].
pub fn grade_value(grade: &str, discipline_hint: &str) -> f64 {
    let ctx = HintContext::from_hint(discipline_hint);
    REGISTRY
        .normalize(grade, ctx)
        .map(|g| g.value)
        .unwrap_or(UNPARSEABLE)
}

/// Normalize a grade label, keeping the claimed notation alongside the value.
pub fn normalize(grade: &str, discipline_hint: &str) -> Option<NormalizedGrade> {
    let ctx = HintContext::from_hint(discipline_hint);
    REGISTRY.normalize(grade, ctx)
}

/// Identify which notation claims a label.
pub fn classify(grade: &str) -> GradeSystem {
    REGISTRY.classify(grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_built_in_scales_in_priority_order() {
        let registry = ScaleRegistry::new();
        assert_eq!(
            registry.list_scales(),
            vec!["V-scale", "YDS", "French/Fontainebleau", "Ewbank"]
        );
    }

    #[test]
    fn cross_system_scenarios() {
        let cases = [
            ("5.10a", "", 10.0),
            ("5.10d", "", 10.75),
            ("V8", "Outdoor Bouldering", 18.0),
            ("VB", "", 9.0),
            ("6A+", "Indoor Bouldering", 13.5),
            ("6A+", "Outdoor Sport", 10.25),
            ("22", "", 11.0),
            ("gibberish", "", 0.0),
        ];

        for (grade, hint, expected) in cases {
            assert_eq!(
                grade_value(grade, hint),
                expected,
                "grade {:?} with hint {:?}",
                grade,
                hint
            );
        }
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        for _ in 0..3 {
            assert_eq!(grade_value("7B+", "Indoor Bouldering"), 19.0);
            assert_eq!(grade_value("7B+", "Outdoor Sport"), 12.5);
        }
    }

    #[test]
    fn casing_and_whitespace_do_not_matter() {
        let reference = grade_value("5.10a", "");
        assert_eq!(grade_value("5.10A", ""), reference);
        assert_eq!(grade_value(" 5.10a ", ""), reference);
        assert_eq!(grade_value("\t5.10a\n", ""), reference);

        assert_eq!(grade_value("v5", ""), grade_value("V5", ""));
        assert_eq!(grade_value("7a", "Bouldering"), grade_value("7A", "bouldering"));
    }

    #[test]
    fn bouldering_hint_reads_french_labels_harder() {
        for label in ["6A", "6C+", "7A", "8B+"] {
            let font = grade_value(label, "Outdoor Bouldering");
            let sport = grade_value(label, "Outdoor Sport");
            assert!(
                font > sport,
                "{} should read harder as a boulder ({} vs {})",
                label,
                font,
                sport
            );
        }
    }

    #[test]
    fn hint_is_matched_case_insensitively() {
        assert_eq!(grade_value("7A", "BOULDERING"), 16.0);
        assert_eq!(grade_value("7A", "Indoor bOuLdErInG"), 16.0);
        assert_eq!(grade_value("7A", "Indoor Lead"), 11.75);
        assert_eq!(grade_value("7A", ""), 11.75);
    }

    #[test]
    fn yds_values_grow_with_base_and_letter() {
        let mut previous = f64::MIN;
        for base in 5..=15 {
            for letter in ["a", "b", "c", "d"] {
                let value = grade_value(&format!("5.{}{}", base, letter), "");
                assert!(value > previous, "5.{}{} did not increase", base, letter);
                previous = value;
            }
        }
    }

    #[test]
    fn garbage_maps_to_the_sentinel() {
        for garbage in ["", "   ", "not-a-grade", "5.", "grade 7", "V", "A7", "10A"] {
            assert_eq!(grade_value(garbage, ""), UNPARSEABLE, "{:?}", garbage);
        }
    }

    #[test]
    fn first_claiming_scale_wins_even_when_conversion_fails() {
        // A "5."-prefixed label is owned by YDS; a malformed remainder must
        // not fall through to any later scale.
        assert_eq!(classify("5.xyz"), GradeSystem::Yds);
        assert_eq!(grade_value("5.xyz", ""), UNPARSEABLE);

        // Pure digits outside the Ewbank window are still Ewbank territory.
        assert_eq!(classify("42"), GradeSystem::Ewbank);
        assert_eq!(grade_value("42", ""), UNPARSEABLE);
    }

    #[test]
    fn classify_reports_the_claiming_notation() {
        assert_eq!(classify("V4"), GradeSystem::VScale);
        assert_eq!(classify("5.11c"), GradeSystem::Yds);
        assert_eq!(classify("8a+"), GradeSystem::French);
        assert_eq!(classify("18"), GradeSystem::Ewbank);
        assert_eq!(classify("moss slab"), GradeSystem::Unknown);
    }

    #[test]
    fn normalize_returns_canonical_label_and_system() {
        let normalized = normalize(" 7b+ ", "Indoor Bouldering").unwrap();
        assert_eq!(normalized.label, "7B+");
        assert_eq!(normalized.system, GradeSystem::French);
        assert_eq!(normalized.value, 19.0);

        assert!(normalize("nope", "").is_none());
    }
}
