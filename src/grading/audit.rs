use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::ClimbEntry;
use crate::grading::{self, GradeSystem, UNPARSEABLE};

/// A logbook entry whose grade has passed through the audit checkpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditedGrade {
    /// The climb this assessment belongs to
    pub climb_id: Uuid,
    /// The raw grade label that was assessed
    pub grade: String,
    /// The notation that claimed the label
    pub system: GradeSystem,
    /// The unified difficulty value (sentinel for unrated entries)
    pub value: f64,
    /// The audit decision
    pub decision: AuditDecision,
    /// Specific issues found
    pub issues: Vec<AuditIssue>,
    /// When this assessment was performed
    pub assessed_at: DateTime<Utc>,
}

/// Audit decision for a logged grade
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuditDecision {
    /// Grade normalized cleanly
    Accept,
    /// Grade normalized but carries warnings
    AcceptWithWarnings,
    /// Grade could not be valued; downstream consumers should treat the
    /// entry as unrated rather than trivially easy
    Unrated,
}

/// Individual issue found during grade assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditIssue {
    pub issue_type: AuditIssueType,
    pub severity: AuditSeverity,
    /// Human-readable description of the issue
    pub description: String,
}

/// Types of issues that can be detected
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AuditIssueType {
    /// No known notation matches the label
    UnknownNotation,
    /// The label matched a notation but sits outside its accepted range
    OutOfRange,
    /// The value is implausibly high for a real climb
    SuspiciousValue,
}

/// Severity levels for audit issues
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum AuditSeverity {
    Info,
    Warning,
    Error,
}

/// Aggregate audit results for a whole logbook
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub accepted: usize,
    pub warned: usize,
    pub unrated: usize,
    pub grades: Vec<AuditedGrade>,
}

/// Assesses logged grades so callers can tell genuinely unrated entries
/// apart from the sentinel value, and spot suspicious outliers.
pub struct GradeAuditor {
    /// Values above this ceiling are flagged as suspicious
    suspicious_ceiling: f64,
}

impl GradeAuditor {
    pub fn new(suspicious_ceiling: f64) -> Self {
        Self { suspicious_ceiling }
    }

    /// Assess a single logbook entry, using the entry's own discipline as
    /// the normalization hint.
    pub fn assess(&self, climb: &ClimbEntry) -> AuditedGrade {
        let system = grading::classify(&climb.grade);
        let value = grading::grade_value(&climb.grade, climb.discipline.as_str());

        let mut issues = Vec::new();
        let decision = if value == UNPARSEABLE {
            issues.push(self.unrated_issue(&climb.grade, system));
            AuditDecision::Unrated
        } else {
            if value > self.suspicious_ceiling {
                issues.push(AuditIssue {
                    issue_type: AuditIssueType::SuspiciousValue,
                    severity: AuditSeverity::Warning,
                    description: format!(
                        "'{}' values at {}, above the plausibility ceiling of {}",
                        climb.grade.trim(),
                        value,
                        self.suspicious_ceiling
                    ),
                });
            }
            if issues.is_empty() {
                AuditDecision::Accept
            } else {
                AuditDecision::AcceptWithWarnings
            }
        };

        AuditedGrade {
            climb_id: climb.id,
            grade: climb.grade.clone(),
            system,
            value,
            decision,
            issues,
            assessed_at: Utc::now(),
        }
    }

    /// Assess every entry in a logbook and summarize the outcomes.
    pub fn assess_log(&self, climbs: &[ClimbEntry]) -> AuditReport {
        let grades: Vec<AuditedGrade> = climbs.iter().map(|c| self.assess(c)).collect();

        let accepted = grades
            .iter()
            .filter(|g| g.decision == AuditDecision::Accept)
            .count();
        let warned = grades
            .iter()
            .filter(|g| g.decision == AuditDecision::AcceptWithWarnings)
            .count();
        let unrated = grades
            .iter()
            .filter(|g| g.decision == AuditDecision::Unrated)
            .count();

        AuditReport {
            accepted,
            warned,
            unrated,
            grades,
        }
    }

    fn unrated_issue(&self, grade: &str, system: GradeSystem) -> AuditIssue {
        match system {
            GradeSystem::Unknown => AuditIssue {
                issue_type: AuditIssueType::UnknownNotation,
                severity: AuditSeverity::Error,
                description: format!("'{}' matches no known grading notation", grade.trim()),
            },
            GradeSystem::Ewbank => AuditIssue {
                issue_type: AuditIssueType::OutOfRange,
                severity: AuditSeverity::Warning,
                description: format!(
                    "'{}' is numeric but outside the Ewbank 10..39 window",
                    grade.trim()
                ),
            },
            other => AuditIssue {
                issue_type: AuditIssueType::UnknownNotation,
                severity: AuditSeverity::Error,
                description: format!(
                    "'{}' looks like {} but does not parse",
                    grade.trim(),
                    other.name()
                ),
            },
        }
    }
}

impl Default for GradeAuditor {
    fn default() -> Self {
        // The stock tables top out at 27 (Fontainebleau 8C+)
        Self::new(27.0)
    }
}
