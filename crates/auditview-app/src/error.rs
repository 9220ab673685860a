use auditview_domain::trend::TrendWindowError;
use auditview_types::EngineError;

/// Shown in the error panel when the initial summary fetch fails without a message.
pub const GENERIC_LOAD_ERROR: &str =
    "An unexpected error occurred while running the security audit.";

/// Shown in a notice when a user action fails without a message.
pub const GENERIC_ACTION_ERROR: &str = "An unexpected error occurred.";

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("{0}")]
    ExportFailed(String),

    #[error(transparent)]
    TrendWindow(#[from] TrendWindowError),

    #[error("no compliance template selected")]
    NoTemplate,
}

impl DashboardError {
    /// Best-effort message for a notice: nested engine message, then top-level, then generic.
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::Engine(e) => e.message_or(GENERIC_ACTION_ERROR),
            DashboardError::ExportFailed(m) if m.is_empty() => GENERIC_ACTION_ERROR.to_string(),
            other => other.to_string(),
        }
    }
}
