//! Fuzz target for policy YAML parsing.
//!
//! Goal: The parser should **never panic** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_yaml_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Only test valid UTF-8 strings (policy files must be UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        // Parsing a policy stream - should never panic
        let _ = rbacguard_policy::fuzz::parse_policy_text(text);
    }
});
