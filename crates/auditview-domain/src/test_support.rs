use crate::model::DisplayRow;
use crate::normalize::display_row;
use auditview_types::{AuditResult, AuditSummaryPayload};

pub fn result(name: &str, status: &str, message: &str, remediation: &str) -> AuditResult {
    AuditResult {
        test_name: Some(name.to_string()),
        status: Some(status.to_string()),
        message: Some(message.to_string()),
        remediation_steps: Some(remediation.to_string()),
    }
}

pub fn payload(results: Vec<AuditResult>) -> AuditSummaryPayload {
    AuditSummaryPayload {
        results,
        ..AuditSummaryPayload::default()
    }
}

/// Rows built from `(name, status)` pairs, in the given order.
pub fn rows(specs: &[(&str, &str)]) -> Vec<DisplayRow> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (name, status))| display_row(i, &result(name, status, "", "")))
        .collect()
}
