//! Row sorting for the results table.
//!
//! The `status` column sorts on severity rank rather than on the label, so CRITICAL comes first
//! when ascending; `severityRank` is the same key under its own name. `hasSetupLink` sorts
//! unlinked rows first. Every other column sorts on its text with a locale-style comparison. The
//! sort is stable: rows with equal keys keep their relative order in both directions.

use crate::model::DisplayRow;
use auditview_types::ids;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SortColumn {
    Id,
    TestName,
    Status,
    StatusLabel,
    StatusClass,
    SeverityRank,
    Message,
    RemediationSteps,
    SetupUrl,
    HasSetupLink,
    /// A column the rows do not carry; every row sorts on an empty key.
    Other(String),
}

impl SortColumn {
    pub fn parse(key: &str) -> Self {
        match key {
            ids::COLUMN_ID => SortColumn::Id,
            ids::COLUMN_TEST_NAME => SortColumn::TestName,
            ids::COLUMN_STATUS => SortColumn::Status,
            "statusLabel" => SortColumn::StatusLabel,
            "statusClass" => SortColumn::StatusClass,
            "severityRank" => SortColumn::SeverityRank,
            ids::COLUMN_MESSAGE => SortColumn::Message,
            ids::COLUMN_REMEDIATION_STEPS => SortColumn::RemediationSteps,
            "setupUrl" => SortColumn::SetupUrl,
            "hasSetupLink" => SortColumn::HasSetupLink,
            other => SortColumn::Other(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            SortColumn::Id => ids::COLUMN_ID,
            SortColumn::TestName => ids::COLUMN_TEST_NAME,
            SortColumn::Status => ids::COLUMN_STATUS,
            SortColumn::StatusLabel => "statusLabel",
            SortColumn::StatusClass => "statusClass",
            SortColumn::SeverityRank => "severityRank",
            SortColumn::Message => ids::COLUMN_MESSAGE,
            SortColumn::RemediationSteps => ids::COLUMN_REMEDIATION_STEPS,
            SortColumn::SetupUrl => "setupUrl",
            SortColumn::HasSetupLink => "hasSetupLink",
            SortColumn::Other(key) => key,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown sort direction: {0} (expected asc or desc)")]
pub struct SortParseError(pub String);

impl SortDirection {
    pub fn parse(v: &str) -> Result<Self, SortParseError> {
        match v {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(SortParseError(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Column plus direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    /// Initial table order: most severe first.
    fn default() -> Self {
        Self {
            column: SortColumn::Status,
            direction: SortDirection::Asc,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum SortKey<'a> {
    Number(i64),
    Text(&'a str),
}

fn sort_key<'a>(row: &'a DisplayRow, column: &SortColumn) -> SortKey<'a> {
    match column {
        SortColumn::Status | SortColumn::SeverityRank => {
            SortKey::Number(i64::from(row.severity_rank))
        }
        SortColumn::HasSetupLink => SortKey::Number(i64::from(row.has_setup_link)),
        SortColumn::StatusClass => SortKey::Text(row.status_class),
        SortColumn::Id => SortKey::Text(&row.id),
        SortColumn::TestName => SortKey::Text(&row.test_name),
        SortColumn::StatusLabel => SortKey::Text(&row.status_label),
        SortColumn::Message => SortKey::Text(&row.message),
        SortColumn::RemediationSteps => SortKey::Text(&row.remediation_steps),
        SortColumn::SetupUrl => SortKey::Text(row.setup_url.unwrap_or("")),
        SortColumn::Other(_) => SortKey::Text(""),
    }
}

fn compare_keys(a: &SortKey<'_>, b: &SortKey<'_>) -> Ordering {
    match (a, b) {
        (SortKey::Number(x), SortKey::Number(y)) => x.cmp(y),
        _ => locale_compare(&key_text(a), &key_text(b)),
    }
}

fn key_text(key: &SortKey<'_>) -> String {
    match key {
        SortKey::Number(n) => n.to_string(),
        SortKey::Text(s) => (*s).to_string(),
    }
}

/// Case-insensitive comparison first; on a tie, lower case sorts before upper case, then raw
/// code-point order.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Return a sorted copy of `rows`; the input is left untouched.
pub fn sort_rows(rows: &[DisplayRow], spec: &SortSpec) -> Vec<DisplayRow> {
    let mut out = rows.to_vec();
    out.sort_by(|a, b| {
        spec.direction.apply(compare_keys(
            &sort_key(a, &spec.column),
            &sort_key(b, &spec.column),
        ))
    });
    out
}
