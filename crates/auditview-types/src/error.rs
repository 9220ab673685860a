use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Nested error body, as attached by the engine transport.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Failure reported by an engine call.
///
/// Either message may be missing; use [`EngineError::extract_message`] to pick the most specific
/// one (nested body first, then top level).
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, thiserror::Error,
)]
#[error("{}", describe(.body, .message))]
pub struct EngineError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ErrorBody>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EngineError {
    /// Error with only a top-level message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            body: None,
            message: Some(message.into()),
        }
    }

    /// Error with only a nested body message.
    pub fn with_body(message: impl Into<String>) -> Self {
        Self {
            body: Some(ErrorBody {
                message: Some(message.into()),
            }),
            message: None,
        }
    }

    pub fn extract_message(&self) -> Option<&str> {
        let nested = self.body.as_ref().and_then(|b| b.message.as_deref());
        nested
            .filter(|m| !m.is_empty())
            .or(self.message.as_deref().filter(|m| !m.is_empty()))
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.extract_message().unwrap_or(fallback).to_string()
    }
}

fn describe(body: &Option<ErrorBody>, message: &Option<String>) -> String {
    let nested = body.as_ref().and_then(|b| b.message.as_deref());
    nested
        .filter(|m| !m.is_empty())
        .or(message.as_deref().filter(|m| !m.is_empty()))
        .unwrap_or("engine error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_message_wins_over_top_level() {
        let err = EngineError {
            body: Some(ErrorBody {
                message: Some("Insufficient privileges".to_string()),
            }),
            message: Some("Request failed".to_string()),
        };
        assert_eq!(err.extract_message(), Some("Insufficient privileges"));
        assert_eq!(err.to_string(), "Insufficient privileges");
    }

    #[test]
    fn falls_back_to_top_level_then_default() {
        assert_eq!(EngineError::new("boom").extract_message(), Some("boom"));

        let empty_body = EngineError {
            body: Some(ErrorBody { message: None }),
            message: None,
        };
        assert_eq!(empty_body.extract_message(), None);
        assert_eq!(empty_body.message_or("fallback"), "fallback");
        assert_eq!(empty_body.to_string(), "engine error");
    }

    #[test]
    fn decodes_transport_shape() {
        let err: EngineError =
            serde_json::from_str(r#"{"body":{"message":"Script-thrown exception"}}"#).unwrap();
        assert_eq!(err, EngineError::with_body("Script-thrown exception"));
    }
}
