use auditview_types::Severity;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRow {
    pub test_name: String,
    pub severity: Severity,
    pub status_label: String,
    pub message: String,
    pub remediation_steps: String,
    pub setup_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableTable {
    pub rows: Vec<RenderableRow>,
    /// Rows before truncation.
    pub total_rows: usize,
    pub truncated_reason: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableSummary {
    pub score: f64,
    /// `success`, `warning`, or `critical`.
    pub band: &'static str,
    pub grade: String,
    pub grade_label: String,
    pub critical_count: u32,
    pub warning_count: u32,
    pub pass_count: u32,
    pub skipped_count: u32,
    pub total_tests: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableTrend {
    pub window_label: &'static str,
    pub current_score: f64,
    pub average_score: f64,
    pub highest_score: f64,
    pub snapshot_count: u32,
    pub direction: &'static str,
    pub arrow: &'static str,
    pub change_label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableDashboard {
    pub summary: RenderableSummary,
    pub trend: Option<RenderableTrend>,
    pub table: RenderableTable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableControl {
    pub control_id: String,
    pub control_name: String,
    pub status_label: String,
    pub findings: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableAssessment {
    pub template_id: String,
    pub compliance_score: f64,
    pub total_controls: u32,
    pub passed_controls: u32,
    pub failed_controls: u32,
    pub not_applicable_controls: u32,
    pub controls: Vec<RenderableControl>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableTrendPoint {
    pub snapshot_date: String,
    pub health_score: f64,
    pub critical_count: u32,
    pub warning_count: u32,
}
