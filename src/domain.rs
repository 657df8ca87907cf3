use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::CragError;

/// The discipline a climb was logged under. The serialized form matches the
/// human-readable labels used throughout the logbook ("Indoor Bouldering",
/// "Outdoor Sport", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    #[serde(rename = "Indoor Bouldering")]
    IndoorBouldering,
    #[serde(rename = "Indoor Top Rope")]
    IndoorTopRope,
    #[serde(rename = "Indoor Lead")]
    IndoorLead,
    #[serde(rename = "Outdoor Bouldering")]
    OutdoorBouldering,
    #[serde(rename = "Outdoor Sport")]
    OutdoorSport,
    #[serde(rename = "Outdoor Trad")]
    OutdoorTrad,
}

impl Discipline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::IndoorBouldering => "Indoor Bouldering",
            Discipline::IndoorTopRope => "Indoor Top Rope",
            Discipline::IndoorLead => "Indoor Lead",
            Discipline::OutdoorBouldering => "Outdoor Bouldering",
            Discipline::OutdoorSport => "Outdoor Sport",
            Discipline::OutdoorTrad => "Outdoor Trad",
        }
    }

    /// Bouldering disciplines read ambiguous French-style labels on the
    /// Fontainebleau table rather than the sport table.
    pub fn is_bouldering(&self) -> bool {
        matches!(
            self,
            Discipline::IndoorBouldering | Discipline::OutdoorBouldering
        )
    }

    pub fn is_indoor(&self) -> bool {
        matches!(
            self,
            Discipline::IndoorBouldering | Discipline::IndoorTopRope | Discipline::IndoorLead
        )
    }

    /// All disciplines, in display order.
    pub fn all() -> [Discipline; 6] {
        [
            Discipline::IndoorBouldering,
            Discipline::IndoorTopRope,
            Discipline::IndoorLead,
            Discipline::OutdoorBouldering,
            Discipline::OutdoorSport,
            Discipline::OutdoorTrad,
        ]
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = CragError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Discipline::all()
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CragError::UnknownDiscipline(wanted.to_string()))
    }
}

/// A named geocoordinate attached to a logged climb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

/// A single logged ascent (or attempt).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClimbEntry {
    pub id: Uuid,
    pub name: String,
    pub date: NaiveDate,
    /// Raw grade label exactly as the climber entered it (any notation).
    pub grade: String,
    #[serde(rename = "type")]
    pub discipline: Discipline,
    pub location: Location,
    #[serde(default)]
    pub notes: String,
    /// Whether the climb was completed rather than just attempted.
    pub sent: bool,
    #[serde(default)]
    pub favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discipline_round_trips_through_display_labels() {
        for discipline in Discipline::all() {
            let parsed: Discipline = discipline.as_str().parse().unwrap();
            assert_eq!(parsed, discipline);
        }
    }

    #[test]
    fn discipline_parsing_is_case_insensitive() {
        let parsed: Discipline = "outdoor bouldering".parse().unwrap();
        assert_eq!(parsed, Discipline::OutdoorBouldering);
    }

    #[test]
    fn unknown_discipline_is_rejected() {
        assert!("Deep Water Solo".parse::<Discipline>().is_err());
    }

    #[test]
    fn climb_entry_deserializes_from_logbook_json() {
        let json = r#"{
            "id": "4b6f9f26-7d1e-4f6a-a6a2-3de3a0b5c6f1",
            "name": "Moss Slab",
            "date": "2026-05-14",
            "grade": "V4",
            "type": "Outdoor Bouldering",
            "location": { "lat": 47.55, "lng": -121.93, "name": "Exit 38" },
            "sent": true
        }"#;

        let climb: ClimbEntry = serde_json::from_str(json).unwrap();
        assert_eq!(climb.grade, "V4");
        assert_eq!(climb.discipline, Discipline::OutdoorBouldering);
        assert!(climb.notes.is_empty());
        assert!(!climb.favorite);
    }
}
