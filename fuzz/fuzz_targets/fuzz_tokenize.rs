#![no_main]

use locwrap_text::{BreakSet, Unit, strip_tags, tokenize, visible_width};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 4096 {
        return;
    }

    let breaks = BreakSet::default();
    let mut rebuilt = String::with_capacity(text.len());
    let mut width = 0usize;
    for unit in tokenize(text, &breaks) {
        assert!(unit.byte_len() > 0, "empty unit");
        if let Unit::Tag(tag) = unit {
            assert!(tag.starts_with('<') && tag.ends_with('>'), "bad tag {tag:?}");
        }
        width += unit.width();
        unit.push_to(&mut rebuilt);
    }
    assert_eq!(rebuilt, text);
    assert_eq!(width, visible_width(text));
    assert!(strip_tags(text).chars().count() >= width);
});
