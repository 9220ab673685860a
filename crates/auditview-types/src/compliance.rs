use crate::lenient::null_as_default;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A compliance framework template offered by the engine (e.g. a SOC 2 or CIS profile).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceTemplate {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceControl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_name: Option<String>,
    /// One of `Compliant`, `Non-Compliant`, `Partial Compliance`, `Not Applicable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub findings: Option<String>,
}

/// Result of running a compliance template against the current audit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceAssessment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compliance_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_controls: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passed_controls: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_controls: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_applicable_controls: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub controls: Vec<ComplianceControl>,
}
