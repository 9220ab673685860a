//! Compliance control classification.

use auditview_types::{ComplianceAssessment, ComplianceControl, ids};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    Partial,
    NotApplicable,
    Unknown,
}

impl ComplianceStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            ids::COMPLIANCE_COMPLIANT => ComplianceStatus::Compliant,
            ids::COMPLIANCE_NON_COMPLIANT => ComplianceStatus::NonCompliant,
            ids::COMPLIANCE_PARTIAL => ComplianceStatus::Partial,
            ids::COMPLIANCE_NOT_APPLICABLE => ComplianceStatus::NotApplicable,
            _ => ComplianceStatus::Unknown,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ComplianceStatus::Compliant => "slds-badge badge-pass",
            ComplianceStatus::NonCompliant => "slds-badge slds-badge_inverse badge-critical",
            ComplianceStatus::Partial => "slds-badge badge-warning",
            ComplianceStatus::NotApplicable => "slds-badge badge-info",
            ComplianceStatus::Unknown => "slds-badge",
        }
    }

    /// Failing controls first.
    pub fn rank(self) -> u8 {
        match self {
            ComplianceStatus::NonCompliant => 1,
            ComplianceStatus::Partial => 2,
            ComplianceStatus::Compliant => 3,
            ComplianceStatus::NotApplicable => 4,
            ComplianceStatus::Unknown => 5,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlRow {
    pub id: String,
    pub control_id: String,
    pub control_name: String,
    pub status: ComplianceStatus,
    pub status_label: String,
    pub status_class: &'static str,
    pub rank: u8,
    pub findings: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentView {
    pub template_id: String,
    /// Clamped to 0..=100.
    pub compliance_score: f64,
    pub total_controls: u32,
    pub passed_controls: u32,
    pub failed_controls: u32,
    pub not_applicable_controls: u32,
    pub controls: Vec<ControlRow>,
}

pub fn normalize_assessment(template_id: &str, raw: &ComplianceAssessment) -> AssessmentView {
    let mut controls: Vec<ControlRow> = raw
        .controls
        .iter()
        .enumerate()
        .map(|(i, c)| control_row(i, c))
        .collect();
    controls.sort_by_key(|c| c.rank);

    AssessmentView {
        template_id: template_id.to_string(),
        compliance_score: crate::gauge::clamp_score(raw.compliance_score.unwrap_or(0.0)),
        total_controls: raw.total_controls.unwrap_or(controls.len() as u32),
        passed_controls: raw.passed_controls.unwrap_or(0),
        failed_controls: raw.failed_controls.unwrap_or(0),
        not_applicable_controls: raw.not_applicable_controls.unwrap_or(0),
        controls,
    }
}

fn control_row(index: usize, control: &ComplianceControl) -> ControlRow {
    let label = control.status.clone().unwrap_or_default();
    let status = ComplianceStatus::parse(&label);
    ControlRow {
        id: format!("control-{index}"),
        control_id: control.control_id.clone().unwrap_or_default(),
        control_name: control.control_name.clone().unwrap_or_default(),
        status,
        status_label: label,
        status_class: status.css_class(),
        rank: status.rank(),
        findings: control.findings.clone().unwrap_or_default(),
    }
}
