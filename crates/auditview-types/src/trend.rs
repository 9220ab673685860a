use crate::lenient::null_as_default;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One persisted snapshot inside a trend window.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_count: Option<u32>,
}

/// Score history over a day window.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_count: Option<u32>,
    /// `improving`, `declining`, or `stable`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend_direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score_trend: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_points: Vec<TrendPoint>,
}
