//! Golden fixture generator for the corpus conformance suite.
//!
//! Writes every fixture under `tests/golden/`. Run it after changing the
//! entry layout and commit the resulting binaries.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin generate_golden -p corpus-tests
//! ```
//!
//! # Generated fixtures
//!
//! | Path                              | Contents                                  |
//! |-----------------------------------|-------------------------------------------|
//! | shl_256/entry.bin                 | 1 << 2, 256-bit operands                  |
//! | div_512_zero/entry.bin            | 0 / 0, 512-bit operands (all zero bytes)  |
//! | mul_256_max/entry.bin             | (2^256-1) * (2^256-1)                     |
//! | shr_512_trailing/entry.bin        | 0x0102..40 >> 64, plus one trailing byte  |
//! | reserved_selector/entry.bin       | selector 5, 0xAB operands                 |
//! | malformed/arg_size_31/entry.bin   | 63 bytes                                  |
//! | malformed/arg_size_33/entry.bin   | 67 bytes                                  |
//! | mixed_corpus/well_formed.bin      | 1 << 2                                    |
//! | mixed_corpus/malformed.bin        | 21 bytes (arg_size 10)                    |
//! | mixed_corpus/reserved_selector.bin| selector 4                                |

#![allow(clippy::pedantic)]

use std::path::Path;

use corpus_encoder::CaseEncoder;
use corpus_tests::golden_dir;
use corpus_types::Operator;
use corpus_wire::ArgSize;
use num_bigint::BigUint;

fn main() {
    let dir = golden_dir();

    write(&dir, "shl_256/entry.bin", &shl_one_by_two());
    write(
        &dir,
        "div_512_zero/entry.bin",
        &CaseEncoder::new(ArgSize::Bits512).encode().unwrap(),
    );

    let max = BigUint::from_bytes_be(&[0xFF; 32]);
    write(
        &dir,
        "mul_256_max/entry.bin",
        &CaseEncoder::new(ArgSize::Bits256)
            .operator(Operator::Mul)
            .x(max.clone())
            .y(max)
            .encode()
            .unwrap(),
    );

    let counting: Vec<u8> = (1..=64).collect();
    write(
        &dir,
        "shr_512_trailing/entry.bin",
        &CaseEncoder::new(ArgSize::Bits512)
            .operator(Operator::Shr)
            .x(BigUint::from_bytes_be(&counting))
            .y(64u8)
            .trailing_byte(0xFF)
            .encode()
            .unwrap(),
    );

    let filler = BigUint::from_bytes_be(&[0xAB; 32]);
    write(
        &dir,
        "reserved_selector/entry.bin",
        &CaseEncoder::new(ArgSize::Bits256)
            .selector(5)
            .x(filler.clone())
            .y(filler)
            .encode()
            .unwrap(),
    );

    write(&dir, "malformed/arg_size_31/entry.bin", &[0x01; 63]);
    write(&dir, "malformed/arg_size_33/entry.bin", &[0x01; 67]);

    write(&dir, "mixed_corpus/well_formed.bin", &shl_one_by_two());
    write(&dir, "mixed_corpus/malformed.bin", &[0x00; 21]);
    write(
        &dir,
        "mixed_corpus/reserved_selector.bin",
        &CaseEncoder::new(ArgSize::Bits256)
            .selector(4)
            .x(3u8)
            .y(4u8)
            .encode()
            .unwrap(),
    );

    println!("All golden fixtures written to {}", dir.display());
}

fn shl_one_by_two() -> Vec<u8> {
    CaseEncoder::new(ArgSize::Bits256)
        .operator(Operator::Shl)
        .x(1u8)
        .y(2u8)
        .encode()
        .unwrap()
}

fn write(dir: &Path, subpath: &str, bytes: &[u8]) {
    let path = dir.join(subpath);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, bytes).unwrap();
    println!("  wrote {} ({} bytes)", subpath, bytes.len());
}
