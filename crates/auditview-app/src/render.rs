//! Render use cases: convert domain views into renderables, then to text.

use crate::dashboard::DashboardState;
use anyhow::Context;
use auditview_domain::compliance::AssessmentView;
use auditview_domain::gauge::score_band;
use auditview_domain::model::{DisplayRow, SummaryCounts};
use auditview_domain::trend::TrendView;
use auditview_render::{
    RenderableAssessment, RenderableControl, RenderableDashboard, RenderableRow,
    RenderableSummary, RenderableTable, RenderableTrend, RenderableTrendPoint,
};
use auditview_types::TrendSummary;

/// Text format for the results table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TableFormat {
    #[default]
    Markdown,
    Csv,
}

pub fn renderable_rows(rows: &[DisplayRow]) -> Vec<RenderableRow> {
    rows.iter()
        .map(|r| RenderableRow {
            test_name: r.test_name.clone(),
            severity: r.status,
            status_label: r.status_label.clone(),
            message: r.message.clone(),
            remediation_steps: r.remediation_steps.clone(),
            setup_url: r.setup_url.map(str::to_string),
        })
        .collect()
}

/// Keep at most `max_rows` rows; the caller's order is preserved.
pub fn renderable_table(rows: &[DisplayRow], max_rows: usize) -> RenderableTable {
    let total_rows = rows.len();
    let kept = &rows[..total_rows.min(max_rows)];
    let truncated_reason = (kept.len() < total_rows)
        .then(|| format!("showing {} of {} results", kept.len(), total_rows));

    RenderableTable {
        rows: renderable_rows(kept),
        total_rows,
        truncated_reason,
    }
}

fn renderable_summary(summary: &SummaryCounts) -> RenderableSummary {
    RenderableSummary {
        score: summary.score,
        band: score_band(summary.score).as_str(),
        grade: summary.grade.clone(),
        grade_label: summary.grade_label.clone(),
        critical_count: summary.critical_count,
        warning_count: summary.warning_count,
        pass_count: summary.pass_count,
        skipped_count: summary.skipped_count,
        total_tests: summary.total_tests,
    }
}

fn renderable_trend(view: &TrendView) -> RenderableTrend {
    RenderableTrend {
        window_label: view.window.label(),
        current_score: view.current_score,
        average_score: view.average_score,
        highest_score: view.highest_score,
        snapshot_count: view.snapshot_count,
        direction: view.direction.as_str(),
        arrow: view.direction.arrow(),
        change_label: view.score_trend_label.clone(),
    }
}

pub fn renderable_dashboard(state: &DashboardState, max_rows: usize) -> RenderableDashboard {
    RenderableDashboard {
        summary: renderable_summary(&state.summary),
        trend: state.trend.as_ref().map(renderable_trend),
        table: renderable_table(&state.rows, max_rows),
    }
}

pub fn renderable_assessment(view: &AssessmentView) -> RenderableAssessment {
    RenderableAssessment {
        template_id: view.template_id.clone(),
        compliance_score: view.compliance_score,
        total_controls: view.total_controls,
        passed_controls: view.passed_controls,
        failed_controls: view.failed_controls,
        not_applicable_controls: view.not_applicable_controls,
        controls: view
            .controls
            .iter()
            .map(|c| RenderableControl {
                control_id: c.control_id.clone(),
                control_name: c.control_name.clone(),
                status_label: c.status_label.clone(),
                findings: c.findings.clone(),
            })
            .collect(),
    }
}

pub fn trend_points(raw: &TrendSummary) -> Vec<RenderableTrendPoint> {
    raw.data_points
        .iter()
        .map(|p| RenderableTrendPoint {
            snapshot_date: p.snapshot_date.clone().unwrap_or_default(),
            health_score: p.health_score.unwrap_or(0.0),
            critical_count: p.critical_count.unwrap_or(0),
            warning_count: p.warning_count.unwrap_or(0),
        })
        .collect()
}

pub fn render_table(
    rows: &[DisplayRow],
    format: TableFormat,
    max_rows: usize,
) -> anyhow::Result<String> {
    let table = renderable_table(rows, max_rows);
    Ok(match format {
        TableFormat::Markdown => auditview_render::render_results_markdown(&table),
        TableFormat::Csv => {
            auditview_render::render_results_csv(&table.rows).context("render results csv")?
        }
    })
}

pub fn render_dashboard(state: &DashboardState, max_rows: usize) -> String {
    auditview_render::render_dashboard_markdown(&renderable_dashboard(state, max_rows))
}

pub fn render_assessment(view: &AssessmentView) -> String {
    auditview_render::render_assessment_markdown(&renderable_assessment(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditview_domain::normalize;
    use auditview_types::{AuditResult, AuditSummaryPayload, TrendPoint};

    fn rows() -> Vec<DisplayRow> {
        let payload = AuditSummaryPayload {
            results: vec![
                AuditResult {
                    test_name: Some("Session timeout".to_string()),
                    status: Some("CRITICAL".to_string()),
                    message: Some("Timeout too long".to_string()),
                    remediation_steps: Some("Setup > Session Settings".to_string()),
                    ..AuditResult::default()
                },
                AuditResult {
                    test_name: Some("MFA".to_string()),
                    status: Some("PASS".to_string()),
                    ..AuditResult::default()
                },
            ],
            ..AuditSummaryPayload::default()
        };
        normalize(&payload).rows
    }

    #[test]
    fn table_truncation_reports_totals() {
        let table = renderable_table(&rows(), 1);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.total_rows, 2);
        assert_eq!(
            table.truncated_reason.as_deref(),
            Some("showing 1 of 2 results")
        );

        let table = renderable_table(&rows(), 10);
        assert_eq!(table.truncated_reason, None);
    }

    #[test]
    fn setup_links_carry_through() {
        let rendered = renderable_rows(&rows());
        assert_eq!(
            rendered[0].setup_url.as_deref(),
            Some("/lightning/setup/SecuritySession/home")
        );
        assert_eq!(rendered[1].setup_url, None);
    }

    #[test]
    fn csv_format_has_header() {
        let csv = render_table(&rows(), TableFormat::Csv, 10).unwrap();
        assert!(csv.starts_with("Test Name,Impact,Message,Remediation Steps,Setup Link\r\n"));
        assert!(csv.contains("Session timeout"));
    }

    #[test]
    fn markdown_format_links_setup() {
        let md = render_table(&rows(), TableFormat::Markdown, 10).unwrap();
        assert!(md.contains("[Open Setup](/lightning/setup/SecuritySession/home)"));
    }

    #[test]
    fn trend_points_default_missing_fields() {
        let raw = TrendSummary {
            data_points: vec![TrendPoint {
                health_score: Some(72.5),
                ..TrendPoint::default()
            }],
            ..TrendSummary::default()
        };
        let points = trend_points(&raw);
        assert_eq!(points[0].health_score, 72.5);
        assert_eq!(points[0].snapshot_date, "");
        assert_eq!(points[0].critical_count, 0);
    }
}
