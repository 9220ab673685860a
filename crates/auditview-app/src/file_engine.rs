//! An [`AuditEngine`] backed by JSON files in a data directory.
//!
//! Layout:
//!
//! ```text
//! <root>/summary.json
//! <root>/templates.json             (optional)
//! <root>/trend-<days>.json          (falls back to trend.json)
//! <root>/assessments/<template>.json
//! <root>/snapshots/                 (written by save_snapshot)
//! ```

use crate::engine::AuditEngine;
use crate::render::{renderable_rows, trend_points};
use anyhow::{Context, bail};
use async_trait::async_trait;
use auditview_domain::{SortSpec, normalize, sort_rows};
use auditview_types::{
    AuditSummaryPayload, ComplianceAssessment, ComplianceTemplate, EngineError, ExportKind,
    ExportResult, TrendSummary,
};
use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use tracing::{debug, info};

#[derive(Clone, Debug)]
pub struct FileEngine {
    root: Utf8PathBuf,
}

impl FileEngine {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn read_json<T: DeserializeOwned>(&self, path: &Utf8Path) -> anyhow::Result<T> {
        let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
        serde_json::from_str(&text).with_context(|| format!("parse {path}"))
    }

    fn load_summary(&self) -> anyhow::Result<AuditSummaryPayload> {
        self.read_json(&self.root.join("summary.json"))
    }

    fn load_templates(&self) -> anyhow::Result<Vec<ComplianceTemplate>> {
        let path = self.root.join("templates.json");
        if !path.exists() {
            debug!(%path, "no templates file");
            return Ok(Vec::new());
        }
        self.read_json(&path)
    }

    fn load_trend(&self, days: u32) -> anyhow::Result<TrendSummary> {
        let windowed = self.root.join(format!("trend-{days}.json"));
        if windowed.exists() {
            return self.read_json(&windowed);
        }
        self.read_json(&self.root.join("trend.json"))
    }

    fn load_assessment(&self, template_id: &str) -> anyhow::Result<ComplianceAssessment> {
        if template_id.is_empty()
            || template_id.contains(['/', '\\'])
            || template_id.starts_with('.')
        {
            bail!("invalid template id: {template_id:?}");
        }
        self.read_json(
            &self
                .root
                .join("assessments")
                .join(format!("{template_id}.json")),
        )
    }

    fn write_snapshot(&self, template_name: &str) -> anyhow::Result<String> {
        let summary = self.load_summary()?;
        let now = OffsetDateTime::now_utc();
        let taken_at = now.format(&Rfc3339).context("format snapshot timestamp")?;
        let dir = self.root.join("snapshots");
        std::fs::create_dir_all(&dir).with_context(|| format!("create {dir}"))?;

        let millis = now.unix_timestamp_nanos() / 1_000_000;
        let mut id = format!("snapshot-{millis}");
        let mut suffix = 1;
        while dir.join(format!("{id}.json")).exists() {
            id = format!("snapshot-{millis}-{suffix}");
            suffix += 1;
        }

        let doc = serde_json::json!({
            "id": id,
            "templateName": template_name,
            "takenAt": taken_at,
            "summary": summary,
        });
        let path = dir.join(format!("{id}.json"));
        let mut text = serde_json::to_string_pretty(&doc).context("serialize snapshot")?;
        text.push('\n');
        std::fs::write(&path, text).with_context(|| format!("write {path}"))?;
        info!(%path, "snapshot written");
        Ok(id)
    }

    fn render_export(&self, kind: ExportKind, days: u32) -> anyhow::Result<ExportResult> {
        let date = OffsetDateTime::now_utc()
            .date()
            .format(format_description!("[year]-[month]-[day]"))
            .context("format export date")?;

        let (content, file_name, mime_type) = match kind {
            ExportKind::Csv | ExportKind::Spreadsheet => {
                let summary = self.load_summary()?;
                let rows = sort_rows(&normalize(&summary).rows, &SortSpec::default());
                let rows = renderable_rows(&rows);
                if kind == ExportKind::Csv {
                    (
                        auditview_render::render_results_csv(&rows)
                            .context("render results csv")?,
                        format!("security-audit-{date}.csv"),
                        "text/csv",
                    )
                } else {
                    (
                        auditview_render::render_spreadsheet_xml(&rows),
                        format!("security-audit-{date}.xls"),
                        "application/vnd.ms-excel",
                    )
                }
            }
            ExportKind::TrendCsv => {
                let trend = self.load_trend(days)?;
                if trend.data_points.is_empty() {
                    return Ok(ExportResult {
                        success: false,
                        error_message: Some(format!("No snapshots in the last {days} days.")),
                        ..ExportResult::default()
                    });
                }
                (
                    auditview_render::render_trend_csv(&trend_points(&trend))
                        .context("render trend csv")?,
                    format!("security-trend-{days}d-{date}.csv"),
                    "text/csv",
                )
            }
        };

        Ok(ExportResult {
            success: true,
            content,
            file_name,
            mime_type: mime_type.to_string(),
            error_message: None,
        })
    }
}

fn engine_error(err: anyhow::Error) -> EngineError {
    EngineError::new(format!("{err:#}"))
}

#[async_trait]
impl AuditEngine for FileEngine {
    async fn audit_summary(&self) -> Result<AuditSummaryPayload, EngineError> {
        self.load_summary().map_err(engine_error)
    }

    async fn compliance_templates(&self) -> Result<Vec<ComplianceTemplate>, EngineError> {
        self.load_templates().map_err(engine_error)
    }

    async fn trend_summary(&self, days: u32) -> Result<TrendSummary, EngineError> {
        self.load_trend(days).map_err(engine_error)
    }

    async fn run_assessment(&self, template_id: &str) -> Result<ComplianceAssessment, EngineError> {
        self.load_assessment(template_id).map_err(engine_error)
    }

    async fn save_snapshot(&self, template_name: &str) -> Result<String, EngineError> {
        self.write_snapshot(template_name).map_err(engine_error)
    }

    async fn export(&self, kind: ExportKind, days: u32) -> Result<ExportResult, EngineError> {
        self.render_export(kind, days).map_err(engine_error)
    }
}
