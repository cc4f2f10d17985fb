#![warn(clippy::pedantic)]

pub mod decoder;
pub mod error;
pub mod filter;

pub use decoder::{DecodeOutcome, DecoderConfig, EntryDecoder};
pub use error::DecodeError;
pub use filter::OperatorFilter;
