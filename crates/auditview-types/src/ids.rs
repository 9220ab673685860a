//! Stable identifiers shared between the engine payloads, the renderers, and the CLI.

// Schemas
pub const SCHEMA_CONFIG_V1: &str = "auditview.config.v1";

// Sortable table columns (camelCase, matching the engine field names)
pub const COLUMN_ID: &str = "id";
pub const COLUMN_TEST_NAME: &str = "testName";
pub const COLUMN_STATUS: &str = "status";
pub const COLUMN_MESSAGE: &str = "message";
pub const COLUMN_REMEDIATION_STEPS: &str = "remediationSteps";

// Severity literals as emitted by the engine
pub const STATUS_CRITICAL: &str = "CRITICAL";
pub const STATUS_WARNING: &str = "WARNING";
pub const STATUS_PASS: &str = "PASS";
pub const STATUS_SKIPPED: &str = "SKIPPED";
pub const STATUS_INFO: &str = "INFO";
pub const STATUS_UNKNOWN: &str = "UNKNOWN";

// Compliance status literals
pub const COMPLIANCE_COMPLIANT: &str = "Compliant";
pub const COMPLIANCE_NON_COMPLIANT: &str = "Non-Compliant";
pub const COMPLIANCE_PARTIAL: &str = "Partial Compliance";
pub const COMPLIANCE_NOT_APPLICABLE: &str = "Not Applicable";

/// Template argument sent to `save_snapshot` when no compliance template is selected.
pub const SNAPSHOT_TEMPLATE_NONE: &str = "None";
