use auditview_types::Severity;
use serde::Serialize;

/// Headline numbers of an audit, with grade defaults applied.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCounts {
    pub score: f64,
    pub grade: String,
    pub grade_color: String,
    pub grade_label: String,
    pub critical_count: u32,
    pub warning_count: u32,
    pub pass_count: u32,
    pub skipped_count: u32,
    pub total_tests: u32,
}

/// Render-ready table row.
///
/// Every field is derived from one `AuditResult` plus the static classification tables. Rows are
/// rebuilt from the payload on each refresh, never patched in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    /// `result-<index>`; unique within one payload, not stable across refreshes.
    pub id: String,
    pub test_name: String,
    pub status: Severity,
    /// Status as shown to the user: the engine literal, or `INFO` when blank.
    pub status_label: String,
    pub message: String,
    pub remediation_steps: String,
    pub status_class: &'static str,
    pub severity_rank: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_url: Option<&'static str>,
    pub has_setup_link: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NormalizedSummary {
    pub summary: SummaryCounts,
    pub rows: Vec<DisplayRow>,
}
