//! Shared helpers for the corpus integration tests and benches.

use std::path::{Path, PathBuf};

use corpus_decoder::{DecodeOutcome, DecoderConfig, EntryDecoder};
use corpus_types::DecodedCase;

/// Directory holding the committed golden corpus entries.
pub fn golden_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/golden")
}

/// Read a golden fixture by its path relative to `tests/golden/`.
///
/// # Panics
///
/// Panics if the fixture is missing; regenerate with
/// `cargo run --bin generate_golden -p corpus-tests`.
pub fn golden(subpath: &str) -> Vec<u8> {
    let path = golden_dir().join(subpath);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read golden fixture {}: {e}", path.display()))
}

/// Decode with no operator filter and return the case, if any.
pub fn decode_unfiltered(data: &[u8]) -> Option<DecodedCase> {
    EntryDecoder::new(DecoderConfig::default())
        .decode(data)
        .ok()
        .and_then(DecodeOutcome::into_case)
}
