//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Classification totality and consistency
//! - Normalization never failing and always filling defaults
//! - Sort ordering, idempotence, and non-mutation

use crate::classify::classify;
use crate::model::DisplayRow;
use crate::normalize::normalize;
use crate::setup_url::{SETUP_HOME_URL, SETUP_URLS, resolve_setup_url};
use crate::sort::{SortColumn, SortDirection, SortSpec, sort_rows};
use auditview_types::{AuditResult, AuditSummaryPayload};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_status() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        Just(Some("CRITICAL".to_string())),
        Just(Some("WARNING".to_string())),
        Just(Some("PASS".to_string())),
        Just(Some("SKIPPED".to_string())),
        Just(Some("INFO".to_string())),
        "[a-zA-Z]{1,10}".prop_map(Some),
    ]
}

fn arb_text() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some(String::new())),
        "[ -~]{0,40}".prop_map(Some),
    ]
}

fn arb_remediation() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        arb_text(),
        "[A-Za-z ]{0,20}".prop_map(|s| Some(format!("Go to Setup > {s}."))),
        (0..SETUP_URLS.len()).prop_map(|i| Some(format!("Setup > {}", SETUP_URLS[i].0))),
    ]
}

fn arb_result() -> impl Strategy<Value = AuditResult> {
    (arb_text(), arb_status(), arb_text(), arb_remediation()).prop_map(
        |(test_name, status, message, remediation_steps)| AuditResult {
            test_name,
            status,
            message,
            remediation_steps,
        },
    )
}

fn arb_payload() -> impl Strategy<Value = AuditSummaryPayload> {
    (
        prop::option::of(0.0f64..=100.0),
        prop::collection::vec(arb_result(), 0..24),
    )
        .prop_map(|(score, results)| AuditSummaryPayload {
            score,
            results,
            ..AuditSummaryPayload::default()
        })
}

fn arb_column() -> impl Strategy<Value = SortColumn> {
    prop_oneof![
        Just(SortColumn::Status),
        Just(SortColumn::TestName),
        Just(SortColumn::Message),
        Just(SortColumn::RemediationSteps),
        Just(SortColumn::Id),
        Just(SortColumn::SeverityRank),
        Just(SortColumn::StatusClass),
        Just(SortColumn::HasSetupLink),
    ]
}

fn arb_direction() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
}

fn ids(rows: &[DisplayRow]) -> Vec<String> {
    rows.iter().map(|r| r.id.clone()).collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn classify_is_total_and_consistent(status in ".{0,16}") {
        let first = classify(&status);
        let second = classify(&status);
        prop_assert_eq!(first, second);
        prop_assert!((1..=6).contains(&first.severity_rank));
    }

    #[test]
    fn normalize_never_leaves_blank_defaults(raw in arb_payload()) {
        let out = normalize(&raw);
        prop_assert_eq!(out.rows.len(), raw.results.len());
        for (i, row) in out.rows.iter().enumerate() {
            prop_assert_eq!(&row.id, &format!("result-{i}"));
            prop_assert!(!row.test_name.is_empty());
            prop_assert!(!row.status_label.is_empty());
            prop_assert!(!row.remediation_steps.is_empty());
            prop_assert_eq!(row.has_setup_link, row.setup_url.is_some());
        }
    }

    #[test]
    fn well_formed_breadcrumbs_always_resolve(name in "[A-Za-z ]{1,20}") {
        let text = format!("Open Setup > {name}.");
        let url = resolve_setup_url(Some(&text));
        prop_assert!(url.is_some());
        let url = url.unwrap_or(SETUP_HOME_URL);
        prop_assert!(url.starts_with("/lightning/setup/"));
    }

    #[test]
    fn sort_is_idempotent(raw in arb_payload(), column in arb_column(), direction in arb_direction()) {
        let rows = normalize(&raw).rows;
        let spec = SortSpec { column, direction };
        let once = sort_rows(&rows, &spec);
        let twice = sort_rows(&once, &spec);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn status_sort_orders_by_rank(raw in arb_payload(), direction in arb_direction()) {
        let rows = normalize(&raw).rows;
        let spec = SortSpec { column: SortColumn::Status, direction };
        let sorted = sort_rows(&rows, &spec);
        for pair in sorted.windows(2) {
            match direction {
                SortDirection::Asc => prop_assert!(pair[0].severity_rank <= pair[1].severity_rank),
                SortDirection::Desc => prop_assert!(pair[0].severity_rank >= pair[1].severity_rank),
            }
        }
    }

    #[test]
    fn sort_is_a_permutation_and_leaves_input_alone(raw in arb_payload(), column in arb_column()) {
        let rows = normalize(&raw).rows;
        let before = rows.clone();
        let sorted = sort_rows(&rows, &SortSpec { column, direction: SortDirection::Asc });
        prop_assert_eq!(&rows, &before);

        let mut a = ids(&rows);
        let mut b = ids(&sorted);
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }
}
