#![warn(clippy::pedantic)]

pub mod case;
pub mod enums;
pub mod error;
pub mod operand;

pub use case::DecodedCase;
pub use enums::Operator;
pub use error::TypeError;
pub use operand::Operand;
