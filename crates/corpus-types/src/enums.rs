use std::fmt;

use crate::error::TypeError;

// ── Macro for wire-byte enum boilerplate ──────────────────────────────
//
// A wire enum is a closed set of variants, each pinned to one selector
// byte and one printable symbol. The macro generates the byte and symbol
// conversions plus an `ALL` table in wire order, keeping the ordinal
// mapping visible at the call site.

macro_rules! wire_enum {
  (
    $(#[$meta:meta])*
    pub enum $name:ident {
      $( $(#[$vmeta:meta])* $variant:ident = $wire:literal => $symbol:literal / $alias:literal ),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    pub enum $name {
      $( $(#[$vmeta])* $variant ),+
    }

    impl $name {
      /// Every variant, ordered by wire byte.
      pub const ALL: &'static [Self] = &[ $( Self::$variant ),+ ];

      /// Encode this variant as a single wire byte.
      pub fn to_wire_byte(self) -> u8 {
        match self {
          $( Self::$variant => $wire ),+
        }
      }

      /// Decode a wire byte into this enum.
      ///
      /// Returns `Err(TypeError::InvalidEnumValue)` if the byte
      /// doesn't match any known variant.
      pub fn from_wire_byte(value: u8) -> Result<Self, TypeError> {
        match value {
          $( $wire => Ok(Self::$variant), )+
          other => Err(TypeError::InvalidEnumValue {
            enum_name: stringify!($name),
            value: other,
          }),
        }
      }

      /// The printable symbol, as it appears in a rendered expression.
      pub fn symbol(self) -> &'static str {
        match self {
          $( Self::$variant => $symbol ),+
        }
      }

      /// A shell-friendly name for the variant.
      pub fn name(self) -> &'static str {
        match self {
          $( Self::$variant => $alias ),+
        }
      }

      /// Look a variant up by symbol or by name (case-insensitive).
      pub fn from_symbol(s: &str) -> Option<Self> {
        let s = s.trim();
        $(
          if s == $symbol || s.eq_ignore_ascii_case($alias) {
            return Some(Self::$variant);
          }
        )+
        None
      }
    }
  };
}

// ── Operator ──────────────────────────────────────────────────────────

wire_enum! {
  /// Arithmetic operator selected by the first byte of a corpus entry.
  ///
  /// The ordinals are fixed by the fuzz harness and must not be
  /// reordered, or existing corpora decode to the wrong operation.
  ///
  /// ```text
  /// ┌──────┬──────┬────────┐
  /// │ Wire │ Sym  │ Name   │
  /// ├──────┼──────┼────────┤
  /// │ 0x00 │ /    │ div    │
  /// │ 0x01 │ *    │ mul    │
  /// │ 0x02 │ <<   │ shl    │
  /// │ 0x03 │ >>   │ shr    │
  /// └──────┴──────┴────────┘
  /// ```
  ///
  /// Selector bytes 0x04..=0xFF are reserved and never decode.
  #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
  pub enum Operator {
    /// Unsigned division (quotient and remainder).
    Div = 0x00 => "/" / "div",
    /// Multiplication, truncated to the operand width.
    Mul = 0x01 => "*" / "mul",
    /// Left shift of X by Y bits.
    Shl = 0x02 => "<<" / "shl",
    /// Right shift of X by Y bits.
    Shr = 0x03 => ">>" / "shr",
  }
}

impl fmt::Display for Operator {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.symbol())
  }
}
