//! The seam to the external audit engine.

use async_trait::async_trait;
use auditview_types::{
    AuditSummaryPayload, ComplianceAssessment, ComplianceTemplate, EngineError, ExportKind,
    ExportResult, TrendSummary,
};

/// Remote capabilities the presentation layer consumes. Implementations own transport and
/// scoring; this crate only shapes their results.
#[async_trait]
pub trait AuditEngine: Send + Sync {
    async fn audit_summary(&self) -> Result<AuditSummaryPayload, EngineError>;

    async fn compliance_templates(&self) -> Result<Vec<ComplianceTemplate>, EngineError>;

    /// `days` is one of the supported trend windows.
    async fn trend_summary(&self, days: u32) -> Result<TrendSummary, EngineError>;

    async fn run_assessment(&self, template_id: &str) -> Result<ComplianceAssessment, EngineError>;

    /// Persist a snapshot of the current audit; returns the snapshot id. `template_name` is the
    /// literal `"None"` when no template is selected.
    async fn save_snapshot(&self, template_name: &str) -> Result<String, EngineError>;

    async fn export(&self, kind: ExportKind, days: u32) -> Result<ExportResult, EngineError>;
}
