use crate::ids;
use crate::lenient::null_as_default;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Impact level of an audit finding.
///
/// The five engine literals are matched exactly; any other value is `Unknown`. `Unknown` is never
/// produced by the engine itself, it only exists so classification stays total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Critical,
    Warning,
    Pass,
    Skipped,
    Info,
    Unknown,
}

impl Severity {
    pub const ALL: [Severity; 6] = [
        Severity::Critical,
        Severity::Warning,
        Severity::Pass,
        Severity::Skipped,
        Severity::Info,
        Severity::Unknown,
    ];

    pub fn parse(raw: &str) -> Self {
        match raw {
            ids::STATUS_CRITICAL => Severity::Critical,
            ids::STATUS_WARNING => Severity::Warning,
            ids::STATUS_PASS => Severity::Pass,
            ids::STATUS_SKIPPED => Severity::Skipped,
            ids::STATUS_INFO => Severity::Info,
            _ => Severity::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => ids::STATUS_CRITICAL,
            Severity::Warning => ids::STATUS_WARNING,
            Severity::Pass => ids::STATUS_PASS,
            Severity::Skipped => ids::STATUS_SKIPPED,
            Severity::Info => ids::STATUS_INFO,
            Severity::Unknown => ids::STATUS_UNKNOWN,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Severity::parse(&value)
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One test outcome as reported by the audit engine. Never mutated by the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_name: Option<String>,

    /// Raw status literal; see [`Severity::parse`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Free-text guidance, possibly embedding a `Setup > ...` breadcrumb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation_steps: Option<String>,
}

/// Audit summary returned by the engine's summary fetch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuditSummaryPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tests: Option<u32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<AuditResult>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_matches_engine_literals_exactly() {
        assert_eq!(Severity::parse("CRITICAL"), Severity::Critical);
        assert_eq!(Severity::parse("SKIPPED"), Severity::Skipped);
        assert_eq!(Severity::parse("critical"), Severity::Unknown);
        assert_eq!(Severity::parse(""), Severity::Unknown);
    }

    #[test]
    fn as_str_is_inverse_of_parse_for_known_levels() {
        for sev in Severity::ALL {
            if sev != Severity::Unknown {
                assert_eq!(Severity::parse(sev.as_str()), sev);
            }
        }
    }

    #[test]
    fn severity_serializes_as_uppercase_literal() {
        let json = serde_json::to_string(&Severity::Warning).unwrap();
        assert_eq!(json, "\"WARNING\"");
        let back: Severity = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(back, Severity::Unknown);
    }

    #[test]
    fn summary_tolerates_missing_and_null_fields() {
        let payload: AuditSummaryPayload =
            serde_json::from_str(r#"{"score": 72, "results": null}"#).unwrap();
        assert_eq!(payload.score, Some(72.0));
        assert!(payload.grade.is_none());
        assert!(payload.results.is_empty());

        let payload: AuditSummaryPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload, AuditSummaryPayload::default());
    }

    #[test]
    fn result_uses_camel_case_field_names() {
        let r: AuditResult = serde_json::from_str(
            r#"{"testName":"MFA","status":"PASS","message":"ok","remediationSteps":null}"#,
        )
        .unwrap();
        assert_eq!(r.test_name.as_deref(), Some("MFA"));
        assert_eq!(r.status.as_deref(), Some("PASS"));
        assert!(r.remediation_steps.is_none());
    }
}
