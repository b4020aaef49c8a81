#![no_main]

use libfuzzer_sys::fuzz_target;
use sitegen_core::extract;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let extracted = extract(text);
        // The body is always a suffix of the input
        assert!(text.ends_with(extracted.body));
        for (key, value) in extracted.front_matter.iter() {
            assert!(!key.is_empty());
            assert_eq!(value, value.trim());
        }
    }
});
