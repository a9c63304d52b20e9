#![no_main]

use locwrap_text::{BreakSet, Script, WrapConfig, try_wrap, wrap, wrap_auto};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap length to keep fuzzing fast.
    if text.len() > 2048 {
        return;
    }

    for max_width in [1, 10, 40, 55, 200] {
        // The self-check must always hold.
        let config = WrapConfig::new(max_width);
        let wrapped = try_wrap(text, &config).expect("wrap self-check failed");

        // Only newlines are ever added; a paragraph's trailing `\r` may be dropped.
        let normalize = |s: &str| s.replace(['\r', '\n'], "");
        assert_eq!(
            normalize(&wrapped),
            normalize(text),
            "wrap at {max_width} changed the text"
        );

        let thai = WrapConfig::for_script(max_width, Script::Thai);
        let _ = wrap(text, &thai);

        let no_breaks = WrapConfig::new(max_width).with_breaks(BreakSet::empty());
        let _ = wrap(text, &no_breaks);

        let _ = wrap_auto(text, max_width);
    }
});
