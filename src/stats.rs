use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::{
    ALL_FILTER, BOULDERING_HINT, FAVORITES_FILTER, INDOOR_FILTER, OUTDOOR_FILTER,
};
use crate::domain::{ClimbEntry, Discipline};
use crate::error::CragError;
use crate::grading;

/// A single point on the progress chart: one logged climb valued on the
/// unified difficulty scale, with the raw label kept for tooltips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub grade: String,
    pub value: f64,
    pub name: String,
}

/// Build the progress chart series for a logbook: entries sorted by date,
/// each valued with its own discipline as the normalization hint.
pub fn chart_series(climbs: &[ClimbEntry]) -> Vec<ChartPoint> {
    let mut sorted: Vec<&ClimbEntry> = climbs.iter().collect();
    sorted.sort_by_key(|c| c.date);

    sorted
        .into_iter()
        .map(|c| ChartPoint {
            date: c.date,
            grade: c.grade.clone(),
            value: grading::grade_value(&c.grade, c.discipline.as_str()),
            name: c.name.clone(),
        })
        .collect()
}

/// Log-view type filter: everything, favorites only, indoor/outdoor, or a
/// single discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    Favorites,
    Indoor,
    Outdoor,
    Only(Discipline),
}

impl TypeFilter {
    pub fn matches(&self, climb: &ClimbEntry) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Favorites => climb.favorite,
            TypeFilter::Indoor => climb.discipline.is_indoor(),
            TypeFilter::Outdoor => !climb.discipline.is_indoor(),
            TypeFilter::Only(discipline) => climb.discipline == *discipline,
        }
    }

    /// The hint used to value grade-range bounds: bounds are read as
    /// bouldering grades only when the view is filtered to a bouldering
    /// discipline.
    pub fn range_hint(&self) -> &'static str {
        match self {
            TypeFilter::Only(d) if d.is_bouldering() => BOULDERING_HINT,
            _ => "",
        }
    }
}

impl FromStr for TypeFilter {
    type Err = CragError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case(ALL_FILTER) {
            return Ok(TypeFilter::All);
        }
        if wanted.eq_ignore_ascii_case(FAVORITES_FILTER) {
            return Ok(TypeFilter::Favorites);
        }
        if wanted.eq_ignore_ascii_case(INDOOR_FILTER) {
            return Ok(TypeFilter::Indoor);
        }
        if wanted.eq_ignore_ascii_case(OUTDOOR_FILTER) {
            return Ok(TypeFilter::Outdoor);
        }
        Discipline::from_str(wanted)
            .map(TypeFilter::Only)
            .map_err(|_| CragError::UnknownFilter(wanted.to_string()))
    }
}

/// An inclusive grade-range filter expressed as raw labels ("5.10a", "V4").
/// A bound whose label cannot be valued becomes inert rather than excluding
/// everything.
#[derive(Debug, Clone, Default)]
pub struct GradeRange {
    pub min: Option<String>,
    pub max: Option<String>,
}

impl GradeRange {
    pub fn is_empty(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    /// Whether a climb's value falls inside the range. The climb is valued
    /// with its own discipline; the bounds are valued with the view's
    /// context hint.
    pub fn contains(&self, climb: &ClimbEntry, context_hint: &str) -> bool {
        if self.is_empty() {
            return true;
        }

        let value = grading::grade_value(&climb.grade, climb.discipline.as_str());

        if let Some(min) = &self.min {
            let min_value = grading::grade_value(min, context_hint);
            if value < min_value {
                return false;
            }
        }
        if let Some(max) = &self.max {
            let max_value = grading::grade_value(max, context_hint);
            if value > max_value {
                return false;
            }
        }

        true
    }
}

/// Apply the type filter and grade range to a logbook, preserving order.
pub fn filter_climbs<'a>(
    climbs: &'a [ClimbEntry],
    filter: &TypeFilter,
    range: &GradeRange,
) -> Vec<&'a ClimbEntry> {
    let hint = filter.range_hint();
    climbs
        .iter()
        .filter(|c| filter.matches(c) && range.contains(c, hint))
        .collect()
}
