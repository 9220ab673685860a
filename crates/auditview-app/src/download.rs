use crate::error::DashboardError;
use auditview_types::{ExportKind, ExportResult};

/// A file ready for client-side download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: String,
    pub mime_type: String,
    /// `data:<mime>;base64,<content>`
    pub data_uri: String,
}

/// Turn an engine export into a download. A result flagged unsuccessful becomes an error
/// carrying the engine's `errorMessage`.
pub fn prepare_download(kind: ExportKind, result: ExportResult) -> Result<Download, DashboardError> {
    if !result.success {
        return Err(DashboardError::ExportFailed(
            result
                .error_message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("{} export failed", kind.as_str())),
        ));
    }

    let mime_type = if result.mime_type.is_empty() {
        default_mime(kind).to_string()
    } else {
        result.mime_type
    };
    let file_name = if result.file_name.is_empty() {
        default_file_name(kind).to_string()
    } else {
        result.file_name
    };

    Ok(Download {
        data_uri: auditview_render::data_uri(&mime_type, &result.content),
        file_name,
        mime_type,
    })
}

fn default_mime(kind: ExportKind) -> &'static str {
    match kind {
        ExportKind::Csv | ExportKind::TrendCsv => "text/csv",
        ExportKind::Spreadsheet => "application/vnd.ms-excel",
    }
}

fn default_file_name(kind: ExportKind) -> &'static str {
    match kind {
        ExportKind::Csv => "security-audit.csv",
        ExportKind::Spreadsheet => "security-audit.xls",
        ExportKind::TrendCsv => "security-trend.csv",
    }
}
