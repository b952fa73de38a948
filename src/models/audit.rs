//! Audit, project and organization records
//!
//! These arrive fully populated from the persistence layer; the report
//! pipeline only reads them.

use super::finding::{Finding, Severity, Status};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organization {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub organization: Organization,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Audit {
    pub id: i64,
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Display value of the audit standard, e.g. "ISO 27001"
    #[serde(default)]
    pub standard: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_date: Option<NaiveDate>,

    /// Stored report language; resolved through `Language::resolve`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,

    pub project: Project,

    #[serde(default)]
    pub findings: Vec<Finding>,
}

/// Finding counts per recognized severity, in report order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub info: usize,
}

impl SeverityCounts {
    pub fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Critical => self.critical,
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
            Severity::Info => self.info,
            Severity::Unrecognized => 0,
        }
    }

    /// Non-zero counts in descending severity order
    pub fn non_zero(&self) -> Vec<(Severity, usize)> {
        Severity::ORDERED
            .iter()
            .map(|s| (*s, self.get(*s)))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}

impl Audit {
    pub fn organization(&self) -> &Organization {
        &self.project.organization
    }

    pub fn has_description(&self) -> bool {
        self.description
            .as_deref()
            .map(|d| !d.trim().is_empty())
            .unwrap_or(false)
    }

    /// Frequency of each recognized severity among the findings
    pub fn severity_counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();

        for finding in &self.findings {
            match finding.severity {
                Severity::Critical => counts.critical += 1,
                Severity::High => counts.high += 1,
                Severity::Medium => counts.medium += 1,
                Severity::Low => counts.low += 1,
                Severity::Info => counts.info += 1,
                Severity::Unrecognized => {}
            }
        }

        counts
    }

    pub fn count_by_status(&self, status: Status) -> usize {
        self.findings.iter().filter(|f| f.status == status).count()
    }

    pub fn evidence_count(&self) -> usize {
        self.findings.iter().map(|f| f.evidences.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(severity: Severity) -> Finding {
        Finding::new("x", severity, Status::Open)
    }

    fn audit_with(findings: Vec<Finding>) -> Audit {
        Audit {
            id: 1,
            name: "Audit".to_string(),
            description: None,
            standard: "ISO 27001".to_string(),
            audit_date: None,
            language: None,
            created_at: None,
            updated_at: None,
            project: Project {
                name: "P".to_string(),
                organization: Organization { name: "O".to_string() },
            },
            findings,
        }
    }

    #[test]
    fn test_severity_counts_skip_zero_and_unrecognized() {
        let audit = audit_with(vec![
            finding(Severity::Low),
            finding(Severity::Critical),
            finding(Severity::Low),
            finding(Severity::Unrecognized),
        ]);

        let counts = audit.severity_counts();
        assert_eq!(
            counts.non_zero(),
            vec![(Severity::Critical, 1), (Severity::Low, 2)]
        );
    }

    #[test]
    fn test_blank_description_is_absent() {
        let mut audit = audit_with(vec![]);
        assert!(!audit.has_description());

        audit.description = Some("   ".to_string());
        assert!(!audit.has_description());

        audit.description = Some("Scope covers HQ".to_string());
        assert!(audit.has_description());
    }
}
