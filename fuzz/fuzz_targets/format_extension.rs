//! Fuzz target for SplitFormat parsing and extension rendering.
//!
//! This target exercises the format-spec parser and the mixed-radix
//! extension generator with arbitrary input. The goal is to find panics
//! in parsing or rendering (e.g. unusual pattern characters, huge
//! indices, multibyte specs).
//!
//! Run with: cargo +nightly fuzz run format_extension

#![no_main]

use libfuzzer_sys::fuzz_target;
use splitout::SplitFormat;

fuzz_target!(|data: &[u8]| {
    // First 8 bytes pick a part index; the rest is the format spec
    if data.len() < 8 {
        return;
    }
    let (index_bytes, spec_bytes) = data.split_at(8);
    let index = u64::from_le_bytes(index_bytes.try_into().unwrap());

    if let Ok(spec) = std::str::from_utf8(spec_bytes) {
        if let Ok(format) = SplitFormat::parse(spec) {
            let max = format.max_parts();
            assert!(max >= 1);

            // Rendering must not panic for any index within the bound
            let ext = format.extension(index % max);
            if let SplitFormat::Pattern(pattern) = &format {
                assert_eq!(ext.chars().count(), pattern.chars().count());
            }
        }
    }
});
