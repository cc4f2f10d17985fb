use std::fmt;

use corpus_wire::ArgSize;
use num_bigint::BigUint;

use crate::error::TypeError;

/// One fixed-width unsigned operand decoded from a corpus entry.
///
/// The value is held as a [`BigUint`] so that 256- and 512-bit operands
/// print exactly in any radix. The width is kept alongside it because
/// the hexadecimal form is always rendered at full width, leading zeros
/// included, to mirror the bytes on disk.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Operand {
  value: BigUint,
  arg_size: ArgSize,
}

impl Operand {
  /// Build an operand, checking that `value` fits in `arg_size`.
  ///
  /// # Errors
  ///
  /// Returns [`TypeError::OperandTooWide`] if `value` needs more bits
  /// than the width holds.
  pub fn new(value: BigUint, arg_size: ArgSize) -> Result<Self, TypeError> {
    let bits = value.bits();
    if bits > arg_size.bits() {
      return Err(TypeError::OperandTooWide {
        bits,
        max_bits: arg_size.bits(),
        arg_size,
      });
    }
    Ok(Self { value, arg_size })
  }

  /// Interpret an operand-width slice as a big-endian unsigned integer.
  ///
  /// # Errors
  ///
  /// Returns [`TypeError::OperandWidth`] unless `bytes` is exactly
  /// `arg_size` bytes long. Slices from [`corpus_wire::EntryLayout`]
  /// always are.
  pub fn from_be_slice(bytes: &[u8], arg_size: ArgSize) -> Result<Self, TypeError> {
    if bytes.len() != arg_size.bytes() {
      return Err(TypeError::OperandWidth {
        len: bytes.len(),
        expected: arg_size.bytes(),
        arg_size,
      });
    }
    Ok(Self {
      value: BigUint::from_bytes_be(bytes),
      arg_size,
    })
  }

  pub fn value(&self) -> &BigUint {
    &self.value
  }

  pub fn arg_size(&self) -> ArgSize {
    self.arg_size
  }

  /// Big-endian bytes, left-padded with zeros to exactly `arg_size` bytes.
  pub fn to_be_bytes(&self) -> Vec<u8> {
    let width = self.arg_size.bytes();
    let raw = self.value.to_bytes_be();
    let mut out = vec![0u8; width];
    // `to_bytes_be` of zero is `[0]`, one byte, which still fits.
    out[width - raw.len()..].copy_from_slice(&raw);
    out
  }

  /// Full-width hexadecimal with a `0x` prefix: `2 * arg_size` digits.
  pub fn to_hex(&self) -> String {
    format!("{self:#x}")
  }
}

/// Decimal, full precision.
impl fmt::Display for Operand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt::Display::fmt(&self.value, f)
  }
}

/// Zero-padded to the operand width; `{:#x}` adds the `0x` prefix.
impl fmt::LowerHex for Operand {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = self.arg_size.bytes() * 2;
    if f.alternate() {
      write!(f, "0x{:0digits$x}", self.value)
    } else {
      write!(f, "{:0digits$x}", self.value)
    }
  }
}
