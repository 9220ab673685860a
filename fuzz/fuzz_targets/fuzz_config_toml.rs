//! Fuzz target for `auditview.toml` parsing and resolution.
//!
//! Goal: malformed config returns an error, never a panic.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_toml
//! ```

#![no_main]

use auditview_settings::{Overrides, load_config};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: &str| {
    let _ = load_config(text, Overrides::default());
});
