use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use super::GradeScale;
use crate::grading::{GradeSystem, HintContext};

/// French sport and Fontainebleau bouldering grades ("6A", "7B+").
///
/// The two conventions share the same label syntax but denote different
/// physical difficulty, so the discipline hint picks the table: bouldering
/// reads the Fontainebleau table, everything else the sport table. Labels
/// missing from a table fall back to a per-digit heuristic so an exotic
/// grade still lands in roughly the right region of the scale.
pub struct French;

// Exactly one digit, one of A/B/C, optional "+". Nothing else qualifies.
static LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9])([ABC])(\+?)$").unwrap());

// Fontainebleau problems read harder than same-named sport routes:
// 6A sits at V3 (13), 7A at V6 (16), 8A at V11 (21).
static FONT_TABLE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("4A", 9.0),
        ("4B", 9.5),
        ("4C", 10.0),
        ("5A", 10.5),
        ("5B", 11.0),
        ("5C", 11.5),
        ("6A", 13.0),
        ("6A+", 13.5),
        ("6B", 14.0),
        ("6B+", 14.5),
        ("6C", 15.0),
        ("6C+", 15.5),
        ("7A", 16.0),
        ("7A+", 17.0),
        ("7B", 18.0),
        ("7B+", 19.0),
        ("7C", 20.0),
        ("7C+", 21.0),
        ("8A", 22.0),
        ("8A+", 23.0),
        ("8B", 24.0),
        ("8B+", 25.0),
        ("8C", 26.0),
        ("8C+", 27.0),
    ])
});

// Sport routes: 6A is 5.10a (10), 7A is 5.11d (11.75).
static SPORT_TABLE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("4A", 4.0),
        ("4B", 5.0),
        ("4C", 6.0),
        ("5A", 7.0),
        ("5B", 8.0),
        ("5C", 9.0),
        ("6A", 10.0),
        ("6A+", 10.25),
        ("6B", 10.5),
        ("6B+", 10.75),
        ("6C", 11.0),
        ("6C+", 11.25),
        ("7A", 11.75),
        ("7A+", 12.0),
        ("7B", 12.25),
        ("7B+", 12.5),
        ("7C", 12.75),
        ("7C+", 13.0),
        ("8A", 13.25),
        ("8A+", 13.5),
        ("8B", 13.75),
        ("8B+", 14.0),
        ("8C", 14.25),
        ("8C+", 14.5),
        ("9A", 14.75),
        ("9A+", 15.0),
        ("9B", 15.25),
        ("9B+", 15.5),
    ])
});

impl French {
    pub fn new() -> Self {
        Self
    }
}

impl Default for French {
    fn default() -> Self {
        Self::new()
    }
}

impl GradeScale for French {
    fn detect(&self, label: &str) -> bool {
        LABEL_RE.is_match(label)
    }

    fn convert(&self, label: &str, ctx: HintContext) -> Option<f64> {
        let caps = LABEL_RE.captures(label)?;

        let digit: f64 = caps[1].parse().ok()?;
        let key = format!("{}{}{}", &caps[1], &caps[2], &caps[3]);

        let value = if ctx.bouldering {
            FONT_TABLE
                .get(key.as_str())
                .copied()
                .unwrap_or(digit * 2.5)
        } else {
            SPORT_TABLE
                .get(key.as_str())
                .copied()
                .unwrap_or(digit + 4.0)
        };

        Some(value)
    }

    fn system(&self) -> GradeSystem {
        GradeSystem::French
    }

    fn name(&self) -> &str {
        "French/Fontainebleau"
    }
}
