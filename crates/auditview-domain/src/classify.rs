//! Status classification: severity to CSS class token and display rank.

use auditview_types::Severity;
use serde::Serialize;

/// Styling and ordering derived from a severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusClass {
    pub css_class: &'static str,
    /// Lower sorts first when ascending.
    pub severity_rank: u8,
}

pub const CSS_CRITICAL: &str = "slds-badge slds-badge_inverse badge-critical";
pub const CSS_WARNING: &str = "slds-badge badge-warning";
pub const CSS_PASS: &str = "slds-badge badge-pass";
pub const CSS_INFO: &str = "slds-badge badge-info";
pub const CSS_NEUTRAL: &str = "slds-badge";

// SKIPPED and INFO share a style but not a rank.
const TABLE: [(Severity, StatusClass); 6] = [
    (Severity::Critical, class(CSS_CRITICAL, 1)),
    (Severity::Warning, class(CSS_WARNING, 2)),
    (Severity::Pass, class(CSS_PASS, 3)),
    (Severity::Skipped, class(CSS_INFO, 4)),
    (Severity::Info, class(CSS_INFO, 5)),
    (Severity::Unknown, class(CSS_NEUTRAL, 6)),
];

const fn class(css_class: &'static str, severity_rank: u8) -> StatusClass {
    StatusClass {
        css_class,
        severity_rank,
    }
}

/// Classify a raw status literal. Total: anything outside the five engine literals is `UNKNOWN`.
pub fn classify(status: &str) -> StatusClass {
    classify_severity(Severity::parse(status))
}

pub fn classify_severity(severity: Severity) -> StatusClass {
    TABLE
        .iter()
        .find(|(sev, _)| *sev == severity)
        .map(|(_, c)| *c)
        .unwrap_or(class(CSS_NEUTRAL, 6))
}
