use crate::{RenderableAssessment, RenderableDashboard, RenderableTable};

pub fn render_dashboard_markdown(dashboard: &RenderableDashboard) -> String {
    let mut out = String::new();
    let s = &dashboard.summary;

    out.push_str("# Security audit\n\n");
    out.push_str(&format!("- Score: **{}** ({})\n", s.score, s.band));
    out.push_str(&format!("- Grade: **{}** ({})\n", s.grade, s.grade_label));
    out.push_str(&format!(
        "- Findings: {} critical / {} warning / {} pass / {} skipped ({} tests)\n\n",
        s.critical_count, s.warning_count, s.pass_count, s.skipped_count, s.total_tests
    ));

    if let Some(t) = &dashboard.trend {
        out.push_str(&format!("## Trend ({})\n\n", t.window_label));
        out.push_str(&format!(
            "- Current: {} / Average: {} / Highest: {} / Snapshots: {}\n",
            t.current_score, t.average_score, t.highest_score, t.snapshot_count
        ));
        out.push_str(&format!(
            "- Direction: {} {} ({})\n\n",
            t.direction, t.arrow, t.change_label
        ));
    }

    out.push_str(&render_results_markdown(&dashboard.table));
    out
}

pub fn render_results_markdown(table: &RenderableTable) -> String {
    let mut out = String::new();
    out.push_str("## Results\n\n");

    if let Some(r) = &table.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if table.rows.is_empty() {
        out.push_str("No results.\n");
        return out;
    }

    out.push_str("| Impact | Test Name | Message | Remediation Steps |\n");
    out.push_str("|---|---|---|---|\n");
    for row in &table.rows {
        let mut steps = cell(&row.remediation_steps);
        if let Some(url) = &row.setup_url {
            steps.push_str(&format!(" ([Open Setup]({}))", url));
        }
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            cell(&row.status_label),
            cell(&row.test_name),
            cell(&row.message),
            steps
        ));
    }

    out
}

pub fn render_assessment_markdown(assessment: &RenderableAssessment) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Compliance: {}\n\n", assessment.template_id));
    out.push_str(&format!(
        "- Compliance score: **{}%**\n",
        assessment.compliance_score
    ));
    out.push_str(&format!(
        "- Controls: {} passed / {} failed / {} not applicable ({} total)\n\n",
        assessment.passed_controls,
        assessment.failed_controls,
        assessment.not_applicable_controls,
        assessment.total_controls
    ));

    if assessment.controls.is_empty() {
        out.push_str("No controls.\n");
        return out;
    }

    out.push_str("| Status | Control | Name | Findings |\n");
    out.push_str("|---|---|---|---|\n");
    for c in &assessment.controls {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            cell(&c.status_label),
            cell(&c.control_id),
            cell(&c.control_name),
            cell(&c.findings)
        ));
    }
    out
}

/// Keep a value inside one table cell.
fn cell(value: &str) -> String {
    value
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RenderableControl, RenderableRow, RenderableSummary, RenderableTrend,
    };
    use auditview_types::Severity;

    fn row(name: &str, sev: Severity, url: Option<&str>) -> RenderableRow {
        RenderableRow {
            test_name: name.to_string(),
            severity: sev,
            status_label: sev.as_str().to_string(),
            message: "msg".to_string(),
            remediation_steps: "-".to_string(),
            setup_url: url.map(str::to_string),
        }
    }

    fn summary() -> RenderableSummary {
        RenderableSummary {
            score: 72.0,
            band: "warning",
            grade: "C".to_string(),
            grade_label: "Needs attention".to_string(),
            critical_count: 1,
            warning_count: 2,
            pass_count: 3,
            skipped_count: 0,
            total_tests: 6,
        }
    }

    #[test]
    fn renders_empty_table() {
        let table = RenderableTable {
            rows: Vec::new(),
            total_rows: 0,
            truncated_reason: None,
        };
        let md = render_results_markdown(&table);
        assert!(md.contains("No results."));
        assert!(!md.contains("| Impact |"));
    }

    #[test]
    fn renders_rows_links_and_truncation() {
        let table = RenderableTable {
            rows: vec![
                row("MFA | SSO", Severity::Critical, Some("/lightning/setup/ManageUsers/home")),
                row("Session", Severity::Pass, None),
            ],
            total_rows: 3,
            truncated_reason: Some("showing 2 of 3 results".to_string()),
        };
        let md = render_results_markdown(&table);
        assert!(md.contains("> Note: showing 2 of 3 results"));
        assert!(md.contains("| CRITICAL | MFA \\| SSO | msg | - ([Open Setup](/lightning/setup/ManageUsers/home)) |"));
        assert!(md.contains("| PASS | Session | msg | - |"));
    }

    #[test]
    fn dashboard_includes_summary_and_trend() {
        let dashboard = RenderableDashboard {
            summary: summary(),
            trend: Some(RenderableTrend {
                window_label: "Last 30 days",
                current_score: 72.0,
                average_score: 70.5,
                highest_score: 80.0,
                snapshot_count: 4,
                direction: "improving",
                arrow: "↑",
                change_label: "+2".to_string(),
            }),
            table: RenderableTable {
                rows: vec![row("x", Severity::Warning, None)],
                total_rows: 1,
                truncated_reason: None,
            },
        };
        let md = render_dashboard_markdown(&dashboard);
        assert!(md.starts_with("# Security audit"));
        assert!(md.contains("- Score: **72** (warning)"));
        assert!(md.contains("- Grade: **C** (Needs attention)"));
        assert!(md.contains("1 critical / 2 warning / 3 pass / 0 skipped (6 tests)"));
        assert!(md.contains("## Trend (Last 30 days)"));
        assert!(md.contains("Average: 70.5"));
        assert!(md.contains("- Direction: improving ↑ (+2)"));
        assert!(md.contains("| WARNING | x |"));
    }

    #[test]
    fn dashboard_without_trend_skips_section() {
        let dashboard = RenderableDashboard {
            summary: summary(),
            trend: None,
            table: RenderableTable {
                rows: Vec::new(),
                total_rows: 0,
                truncated_reason: None,
            },
        };
        assert!(!render_dashboard_markdown(&dashboard).contains("## Trend"));
    }

    #[test]
    fn renders_assessment() {
        let a = RenderableAssessment {
            template_id: "soc2".to_string(),
            compliance_score: 75.0,
            total_controls: 2,
            passed_controls: 1,
            failed_controls: 1,
            not_applicable_controls: 0,
            controls: vec![RenderableControl {
                control_id: "CC6.1".to_string(),
                control_name: "Logical access".to_string(),
                status_label: "Non-Compliant".to_string(),
                findings: "line one\nline two".to_string(),
            }],
        };
        let md = render_assessment_markdown(&a);
        assert!(md.contains("# Compliance: soc2"));
        assert!(md.contains("**75%**"));
        assert!(md.contains("| Non-Compliant | CC6.1 | Logical access | line one<br>line two |"));
    }
}
