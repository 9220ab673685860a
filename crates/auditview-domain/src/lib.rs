//! Pure audit presentation logic (no IO).
//!
//! Input: engine payloads decoded elsewhere.
//! Output: render-ready rows, summaries, and classifications.
//!
//! Dependency order, leaves first: `setup_url` -> `classify` -> `normalize` -> `sort`.

#![forbid(unsafe_code)]

pub mod classify;
pub mod compliance;
pub mod gauge;
pub mod model;
pub mod normalize;
pub mod policy;
pub mod setup_url;
pub mod sort;
pub mod trend;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use classify::{StatusClass, classify, classify_severity};
pub use normalize::normalize;
pub use setup_url::resolve_setup_url;
pub use sort::{SortColumn, SortDirection, SortSpec, sort_rows};
