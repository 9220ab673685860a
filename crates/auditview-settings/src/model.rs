use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `auditview.toml` schema v1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AuditviewConfigV1 {
    /// Optional schema string for tooling (`auditview.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Initial sort column (`status`, `testName`, `message`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,

    /// `asc` (default) or `desc`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_direction: Option<String>,

    /// Trend window in days: 7, 30, 90, 180, or 365.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_days: Option<u32>,

    /// Compliance template used by `assess` and `snapshot` when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    /// How many rows to render before truncating the table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_rows: Option<u32>,
}
