use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which export generator to call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    Csv,
    Spreadsheet,
    TrendCsv,
}

impl ExportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportKind::Csv => "csv",
            ExportKind::Spreadsheet => "spreadsheet",
            ExportKind::TrendCsv => "trend-csv",
        }
    }
}

/// Export payload produced by the engine. `content` is plain text; the presentation layer
/// base64-encodes it into a data URI for download.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
