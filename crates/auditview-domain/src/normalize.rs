//! Result normalization: engine summary payload to summary counts and display rows.

use crate::classify::classify_severity;
use crate::model::{DisplayRow, NormalizedSummary, SummaryCounts};
use crate::setup_url::resolve_setup_url;
use auditview_types::{AuditResult, AuditSummaryPayload, Severity, ids};

pub const DEFAULT_GRADE: &str = "A";
pub const DEFAULT_GRADE_COLOR: &str = "green";
pub const DEFAULT_GRADE_LABEL: &str = "Excellent security posture";
pub const DEFAULT_TEST_NAME: &str = "Unknown Test";
pub const DEFAULT_REMEDIATION: &str = "-";

/// Normalize a summary payload. Never fails: absent or empty fields fall back to defaults.
pub fn normalize(raw: &AuditSummaryPayload) -> NormalizedSummary {
    NormalizedSummary {
        summary: summarize(raw),
        rows: raw
            .results
            .iter()
            .enumerate()
            .map(|(index, result)| display_row(index, result))
            .collect(),
    }
}

pub fn summarize(raw: &AuditSummaryPayload) -> SummaryCounts {
    SummaryCounts {
        score: raw.score.unwrap_or(0.0),
        grade: or_default(raw.grade.as_deref(), DEFAULT_GRADE),
        grade_color: or_default(raw.grade_color.as_deref(), DEFAULT_GRADE_COLOR),
        grade_label: or_default(raw.grade_label.as_deref(), DEFAULT_GRADE_LABEL),
        critical_count: raw.critical_count.unwrap_or(0),
        warning_count: raw.warning_count.unwrap_or(0),
        pass_count: raw.pass_count.unwrap_or(0),
        skipped_count: raw.skipped_count.unwrap_or(0),
        total_tests: raw.total_tests.unwrap_or(0),
    }
}

pub fn display_row(index: usize, result: &AuditResult) -> DisplayRow {
    let status_label = or_default(result.status.as_deref(), ids::STATUS_INFO);
    let status = Severity::parse(&status_label);
    let class = classify_severity(status);

    // Resolve against the original text, not the "-" placeholder.
    let setup_url = resolve_setup_url(result.remediation_steps.as_deref());

    DisplayRow {
        id: format!("result-{index}"),
        test_name: or_default(result.test_name.as_deref(), DEFAULT_TEST_NAME),
        status,
        status_label,
        message: result.message.clone().unwrap_or_default(),
        remediation_steps: or_default(result.remediation_steps.as_deref(), DEFAULT_REMEDIATION),
        status_class: class.css_class,
        severity_rank: class.severity_rank,
        setup_url,
        has_setup_link: setup_url.is_some(),
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{payload, result};

    #[test]
    fn fills_defaults_for_blank_fields() {
        let raw = payload(vec![AuditResult::default()]);
        let out = normalize(&raw);
        let row = &out.rows[0];

        assert_eq!(row.id, "result-0");
        assert_eq!(row.test_name, DEFAULT_TEST_NAME);
        assert_eq!(row.status, Severity::Info);
        assert_eq!(row.status_label, "INFO");
        assert_eq!(row.severity_rank, 5);
        assert_eq!(row.message, "");
        assert_eq!(row.remediation_steps, "-");
        assert_eq!(row.setup_url, None);
        assert!(!row.has_setup_link);
    }

    #[test]
    fn empty_strings_count_as_blank() {
        let raw = payload(vec![result("", "", "", "")]);
        let row = &normalize(&raw).rows[0];
        assert_eq!(row.test_name, DEFAULT_TEST_NAME);
        assert_eq!(row.status_label, "INFO");
        assert_eq!(row.remediation_steps, "-");
    }

    #[test]
    fn unrecognized_status_keeps_label_and_ranks_last() {
        let raw = payload(vec![result("Odd", "MAYBE", "?", "")]);
        let row = &normalize(&raw).rows[0];
        assert_eq!(row.status, Severity::Unknown);
        assert_eq!(row.status_label, "MAYBE");
        assert_eq!(row.severity_rank, 6);
        assert_eq!(row.status_class, "slds-badge");
    }

    #[test]
    fn ids_are_positional() {
        let raw = payload(vec![
            result("a", "PASS", "", ""),
            result("b", "PASS", "", ""),
            result("c", "PASS", "", ""),
        ]);
        let ids: Vec<_> = normalize(&raw).rows.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["result-0", "result-1", "result-2"]);
    }

    #[test]
    fn setup_link_is_resolved_from_remediation() {
        let raw = payload(vec![result(
            "Permission sets with Modify All Data",
            "CRITICAL",
            "3 permission sets grant Modify All Data",
            "Review in Setup > Users > Permission Sets.",
        )]);
        let row = &normalize(&raw).rows[0];
        assert_eq!(row.setup_url, Some("/lightning/setup/PermSets/home"));
        assert!(row.has_setup_link);
        assert_eq!(row.status_class, crate::classify::CSS_CRITICAL);
    }

    #[test]
    fn grade_defaults_apply_when_absent() {
        let raw = AuditSummaryPayload::default();
        let summary = normalize(&raw).summary;
        assert_eq!(summary.grade, "A");
        assert_eq!(summary.grade_color, "green");
        assert_eq!(summary.grade_label, "Excellent security posture");
        assert_eq!(summary.score, 0.0);
        assert_eq!(summary.total_tests, 0);
    }

    #[test]
    fn counts_are_copied_through() {
        let raw = AuditSummaryPayload {
            score: Some(64.5),
            grade: Some("C".to_string()),
            critical_count: Some(2),
            warning_count: Some(3),
            pass_count: Some(10),
            skipped_count: Some(1),
            total_tests: Some(16),
            ..AuditSummaryPayload::default()
        };
        let summary = summarize(&raw);
        assert_eq!(summary.score, 64.5);
        assert_eq!(summary.grade, "C");
        assert_eq!(summary.critical_count, 2);
        assert_eq!(summary.total_tests, 16);
    }

    #[test]
    fn normalizing_twice_is_identical() {
        let raw = payload(vec![
            result("x", "WARNING", "m", "Setup > Session Settings."),
            result("y", "PASS", "", ""),
        ]);
        assert_eq!(normalize(&raw), normalize(&raw));
    }
}
