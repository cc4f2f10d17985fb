#![warn(clippy::pedantic)]

pub mod error;
pub mod layout;

pub use error::WireError;
pub use layout::{ArgSize, EntryLayout, SELECTOR_OFFSET, X_OFFSET};
