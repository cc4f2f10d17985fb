#![no_main]

use corpus_decoder::{DecodeOutcome, DecoderConfig, EntryDecoder, OperatorFilter};
use corpus_types::Operator;
use libfuzzer_sys::fuzz_target;

// Fuzz target: EntryDecoder::decode on arbitrary bytes.
//
// The first input byte picks an operator filter mask; the rest is the
// entry. Checks that decoding never panics, is repeatable, and that a
// decoded case always satisfies the length/selector/filter rules.
fuzz_target!(|data: &[u8]| {
    let Some((&mask, entry)) = data.split_first() else {
        return;
    };
    let filter = OperatorFilter::only(
        Operator::ALL
            .iter()
            .copied()
            .filter(|op| mask & (1 << op.to_wire_byte()) != 0),
    );
    let decoder = EntryDecoder::new(DecoderConfig { filter });

    let first = decoder.decode(entry);
    assert_eq!(first, decoder.decode(entry), "decode is not repeatable");

    if let Ok(DecodeOutcome::Case(case)) = first {
        let arg_size = (entry.len() - 1) / 2;
        assert!(arg_size == 32 || arg_size == 64);
        assert_eq!(case.arg_size().bytes(), arg_size);
        assert!(entry[0] < 4);
        assert!(filter.allows(case.operator));
    }
});
