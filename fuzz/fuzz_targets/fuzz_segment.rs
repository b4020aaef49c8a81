#![no_main]

use libfuzzer_sys::fuzz_target;
use sitegen_core::document::to_markdown;
use sitegen_core::{Block, segment};

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        let sections = segment(body);
        for section in &sections {
            for block in &section.blocks {
                if let Block::Speech { speaker, .. } = block {
                    assert!(!speaker.is_empty());
                }
            }
        }

        // Re-segmenting the rendered form is a fixed point
        let once = to_markdown(&sections);
        assert_eq!(segment(&once), segment(&to_markdown(&segment(&once))));
    }
});
