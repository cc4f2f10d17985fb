use corpus_types::{DecodedCase, Operand, Operator};
use corpus_wire::ArgSize;
use num_bigint::BigUint;

use crate::error::EncodeError;

/// Corpus entry builder: the inverse of `EntryDecoder::decode`.
///
/// Produces the exact byte layout the fuzz harness consumes: one selector
/// byte followed by X and Y as big-endian unsigned integers, each
/// left-padded to `arg_size` bytes. Handy for writing regression entries
/// by hand and for generating test fixtures.
///
/// Setters return `&mut Self` so a whole entry can be built in one
/// expression. Unset operands default to zero and the selector defaults
/// to [`Operator::Div`].
///
/// # Usage
///
/// ```rust
/// use corpus_encoder::CaseEncoder;
/// use corpus_types::Operator;
/// use corpus_wire::ArgSize;
///
/// let entry = CaseEncoder::new(ArgSize::Bits256)
///     .operator(Operator::Shl)
///     .x(1u8)
///     .y(2u8)
///     .encode()
///     .unwrap();
///
/// assert_eq!(entry.len(), 65);
/// assert_eq!(entry[0], 2);
/// assert_eq!(entry[32], 1);
/// assert_eq!(entry[64], 2);
/// ```
#[derive(Clone, Debug)]
pub struct CaseEncoder {
    arg_size: ArgSize,
    selector: u8,
    x: BigUint,
    y: BigUint,
    trailing: Option<u8>,
}

impl CaseEncoder {
    pub fn new(arg_size: ArgSize) -> Self {
        Self {
            arg_size,
            selector: Operator::Div.to_wire_byte(),
            x: BigUint::default(),
            y: BigUint::default(),
            trailing: None,
        }
    }

    /// Select the operator written to byte 0.
    pub fn operator(&mut self, op: Operator) -> &mut Self {
        self.selector = op.to_wire_byte();
        self
    }

    /// Write a raw selector byte, including reserved values >= 4.
    pub fn selector(&mut self, selector: u8) -> &mut Self {
        self.selector = selector;
        self
    }

    pub fn x(&mut self, value: impl Into<BigUint>) -> &mut Self {
        self.x = value.into();
        self
    }

    pub fn y(&mut self, value: impl Into<BigUint>) -> &mut Self {
        self.y = value.into();
        self
    }

    /// Append one byte after Y.
    ///
    /// The length still floor-divides to the same `arg_size`, so decoders
    /// accept the entry and ignore the byte.
    pub fn trailing_byte(&mut self, byte: u8) -> &mut Self {
        self.trailing = Some(byte);
        self
    }

    /// Serialize the entry.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Operand`] if X or Y does not fit in
    /// `arg_size` bytes.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let x = Operand::new(self.x.clone(), self.arg_size)
            .map_err(|source| EncodeError::Operand { name: "x", source })?;
        let y = Operand::new(self.y.clone(), self.arg_size)
            .map_err(|source| EncodeError::Operand { name: "y", source })?;

        let mut buf = Vec::with_capacity(self.arg_size.entry_len() + 1);
        buf.push(self.selector);
        buf.extend_from_slice(&x.to_be_bytes());
        buf.extend_from_slice(&y.to_be_bytes());
        if let Some(byte) = self.trailing {
            buf.push(byte);
        }
        Ok(buf)
    }
}

/// Serialize an already-decoded case back into its canonical entry.
///
/// Infallible: the operands of a [`DecodedCase`] are width-checked.
pub fn encode_case(case: &DecodedCase) -> Vec<u8> {
    let mut buf = Vec::with_capacity(case.arg_size().entry_len());
    buf.push(case.operator.to_wire_byte());
    buf.extend_from_slice(&case.x.to_be_bytes());
    buf.extend_from_slice(&case.y.to_be_bytes());
    buf
}
