//! Rendering utilities for audit results (Markdown, CSV, spreadsheet XML, badges, downloads).

#![forbid(unsafe_code)]

mod badge;
mod csv_export;
mod download;
mod markdown;
mod model;
mod spreadsheet;

pub use badge::{impact_badge_class, score_badge_svg};
pub use csv_export::{render_results_csv, render_trend_csv};
pub use download::{data_uri, decode_data_uri};
pub use markdown::{render_assessment_markdown, render_dashboard_markdown, render_results_markdown};
pub use model::{
    RenderableAssessment, RenderableControl, RenderableDashboard, RenderableRow,
    RenderableSummary, RenderableTable, RenderableTrend, RenderableTrendPoint,
};
pub use spreadsheet::render_spreadsheet_xml;
