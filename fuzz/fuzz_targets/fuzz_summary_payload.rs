//! Fuzz target for summary decoding, normalization, and sorting.
//!
//! Goal: any JSON the decoder accepts normalizes and sorts without panicking, and sorting
//! keeps every row.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_summary_payload
//! ```

#![no_main]

use arbitrary::Arbitrary;
use auditview_domain::{SortColumn, SortDirection, SortSpec, normalize, sort_rows};
use auditview_types::AuditSummaryPayload;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct PayloadInput {
    json: String,
    column: String,
    descending: bool,
}

fuzz_target!(|input: PayloadInput| {
    let Ok(payload) = serde_json::from_str::<AuditSummaryPayload>(&input.json) else {
        return;
    };
    if payload.results.len() > 500 {
        return;
    }

    let normalized = normalize(&payload);
    assert_eq!(normalized.rows.len(), payload.results.len());

    let spec = SortSpec {
        column: SortColumn::parse(&input.column),
        direction: if input.descending {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        },
    };
    let sorted = sort_rows(&normalized.rows, &spec);
    assert_eq!(sorted.len(), normalized.rows.len());
});
