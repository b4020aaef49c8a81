#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use sitegen::config;

fuzz_target!(|data: &[u8]| {
    if let Ok(yaml) = std::str::from_utf8(data) {
        // Only panics matter; errors are expected
        if let Ok(site) = config::parse(yaml, Path::new("fuzz.yaml")) {
            let _ = config::validate(&site);
        }
    }
});
