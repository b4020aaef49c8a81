#![no_main]

use libfuzzer_sys::fuzz_target;
use sitegen_render::inline::render_inline;
use sitegen_render::plain::strip_markdown;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let html = render_inline(text);
        assert!(!html.contains("<script"));

        let plain = strip_markdown(text);
        assert_eq!(plain, plain.trim());
        assert!(!plain.contains("  "));
    }
});
