#![warn(clippy::pedantic)]

pub mod encoder;
pub mod error;

pub use encoder::{CaseEncoder, encode_case};
pub use error::EncodeError;
