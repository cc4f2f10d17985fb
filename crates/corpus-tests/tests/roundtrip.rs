//! Roundtrip integration tests: encode `(op, X, Y)`, decode, compare.
//!
//! The encoder and decoder are inverses for every operator and every
//! operand in `0 ..= 2^(8 * arg_size) - 1`. These tests pick the values
//! most likely to expose an off-by-one in offsets or byte order: zero,
//! one, single high bits, all-ones, and asymmetric byte patterns.

use corpus_encoder::{CaseEncoder, encode_case};
use corpus_tests::decode_unfiltered;
use corpus_types::Operator;
use corpus_wire::ArgSize;
use num_bigint::BigUint;

fn interesting_values(arg_size: ArgSize) -> Vec<BigUint> {
    let bits = arg_size.bits();
    let one = BigUint::from(1u8);
    let max = (&one << bits) - &one;
    let ascending: Vec<u8> = (0..arg_size.bytes()).map(|i| i as u8).collect();
    vec![
        BigUint::from(0u8),
        one.clone(),
        BigUint::from(u64::MAX),
        &one << (bits - 1),
        &one << 8,
        max,
        BigUint::from_bytes_be(&ascending),
    ]
}

#[test]
fn encode_then_decode_preserves_operator_and_operands() {
    for arg_size in [ArgSize::Bits256, ArgSize::Bits512] {
        let values = interesting_values(arg_size);
        for &op in Operator::ALL {
            for x in &values {
                for y in values.iter().rev().take(3) {
                    let entry = CaseEncoder::new(arg_size)
                        .operator(op)
                        .x(x.clone())
                        .y(y.clone())
                        .encode()
                        .unwrap();
                    assert_eq!(entry.len(), arg_size.entry_len());

                    let case = decode_unfiltered(&entry).expect("well-formed entry decodes");
                    assert_eq!(case.operator, op);
                    assert_eq!(case.operator.symbol(), op.symbol());
                    assert_eq!(case.x.value(), x);
                    assert_eq!(case.y.value(), y);
                    assert_eq!(case.arg_size(), arg_size);
                }
            }
        }
    }
}

#[test]
fn decode_then_encode_is_byte_identical() {
    let entry = hex::decode(concat!(
        "01",
        "00000000000000000000000000000000000000000000000000000000deadbeef",
        "8000000000000000000000000000000000000000000000000000000000000001",
    ))
    .unwrap();

    let case = decode_unfiltered(&entry).unwrap();
    assert_eq!(case.operator, Operator::Mul);
    assert_eq!(case.x.to_string(), "3735928559");
    assert_eq!(
        case.y.to_hex(),
        "0x8000000000000000000000000000000000000000000000000000000000000001"
    );
    assert_eq!(encode_case(&case), entry);
}

#[test]
fn scenario_shift_one_by_two() {
    let mut entry = vec![2u8];
    entry.extend(hex::decode(format!("{:064x}", 1)).unwrap());
    entry.extend(hex::decode(format!("{:064x}", 2)).unwrap());
    assert_eq!(entry.len(), 65);

    let case = decode_unfiltered(&entry).unwrap();
    assert_eq!(case.operator.symbol(), "<<");
    assert_eq!(case.x.to_string(), "1");
    assert_eq!(case.y.to_string(), "2");
}
