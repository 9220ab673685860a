//! Use case orchestration for auditview.
//!
//! This crate provides the application layer: the [`AuditEngine`] seam to the external audit
//! engine, the [`Dashboard`] state machine that replaces reactive UI bindings with explicit
//! update-then-notify, and the render/export use cases. Heavy lifting stays in the domain and
//! render crates.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod dashboard;
mod download;
mod engine;
mod error;
mod file_engine;
mod render;

pub use dashboard::{Dashboard, DashboardState, Notice, NoticeKind, TrendTicket};
pub use download::{Download, prepare_download};
pub use engine::AuditEngine;
pub use error::{DashboardError, GENERIC_ACTION_ERROR, GENERIC_LOAD_ERROR};
pub use file_engine::FileEngine;
pub use render::{
    TableFormat, render_assessment, render_dashboard, render_table, renderable_assessment,
    renderable_dashboard, renderable_rows, renderable_table, trend_points,
};
