//! Fuzz target for remediation-text to Setup URL resolution.
//!
//! Goal: resolution never panics, and any URL it returns is a Lightning Setup path.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_setup_resolver
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    if let Some(url) = auditview_domain::resolve_setup_url(Some(text)) {
        assert!(url.starts_with("/lightning/setup/"));
        assert!(url.ends_with("/home"));
    }
});
