//! Stable DTOs and IDs used across the auditview workspace.
//!
//! Everything here mirrors the shapes produced by the external audit engine. Decoding is lenient:
//! absent or `null` fields become `None` (or an empty list) so a partially populated payload can
//! still be rendered.

#![forbid(unsafe_code)]

pub mod ids;

mod compliance;
mod error;
mod export;
mod lenient;
mod summary;
mod trend;

pub use compliance::{ComplianceAssessment, ComplianceControl, ComplianceTemplate};
pub use error::{EngineError, ErrorBody};
pub use export::{ExportKind, ExportResult};
pub use summary::{AuditResult, AuditSummaryPayload, Severity};
pub use trend::{TrendPoint, TrendSummary};
