#![no_main]

use corpus_wire::EntryLayout;
use libfuzzer_sys::fuzz_target;

// Fuzz target: EntryLayout::split with arbitrary bytes.
//
// Catches bugs in:
// - arg_size derivation (floor division, empty input)
// - X/Y slice offsets
// - trailing byte accounting
fuzz_target!(|data: &[u8]| {
    if let Ok(layout) = EntryLayout::split(data) {
        let width = layout.arg_size.bytes();
        assert_eq!(layout.x.len(), width);
        assert_eq!(layout.y.len(), width);
        assert!(layout.trailing <= 1);
        assert_eq!(1 + 2 * width + layout.trailing, data.len());
        assert_eq!(layout.x, &data[1..1 + width]);
    }
});
