#![no_main]

use arbitrary::Arbitrary;
use corpus_decoder::{DecodeOutcome, DecoderConfig, EntryDecoder};
use corpus_encoder::{encode_case, CaseEncoder};
use corpus_types::Operator;
use corpus_wire::ArgSize;
use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

#[derive(Debug, Arbitrary)]
struct FuzzCase {
    op_id: u8,
    wide: bool,
    x: Vec<u8>,
    y: Vec<u8>,
}

// Fuzz target: CaseEncoder -> EntryDecoder roundtrip.
//
// Operand bytes are truncated to the chosen width so they always fit.
// The decoded case must reproduce the operator and both values, and
// re-encoding it must give back the same bytes.
fuzz_target!(|input: FuzzCase| {
    let arg_size = if input.wide { ArgSize::Bits512 } else { ArgSize::Bits256 };
    let op = Operator::ALL[usize::from(input.op_id) % Operator::ALL.len()];
    let width = arg_size.bytes();
    let x = BigUint::from_bytes_be(&input.x[..input.x.len().min(width)]);
    let y = BigUint::from_bytes_be(&input.y[..input.y.len().min(width)]);

    let entry = CaseEncoder::new(arg_size)
        .operator(op)
        .x(x.clone())
        .y(y.clone())
        .encode()
        .unwrap();

    let decoder = EntryDecoder::new(DecoderConfig::default());
    let Ok(DecodeOutcome::Case(case)) = decoder.decode(&entry) else {
        panic!("encoded entry did not decode");
    };
    assert_eq!(case.operator, op);
    assert_eq!(case.x.value(), &x);
    assert_eq!(case.y.value(), &y);
    assert_eq!(encode_case(&case), entry);
});
