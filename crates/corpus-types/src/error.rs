use corpus_wire::ArgSize;

/// Errors raised when building or interpreting typed corpus values.
///
/// ```text
/// ┌─────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                              │
/// │   ├── InvalidEnumValue for selector bytes >= 4      │
/// │   ├── OperandTooWide for values exceeding arg_size  │
/// │   └── OperandWidth for slices not arg_size bytes    │
/// └─────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
  /// A wire byte did not map to any variant of the named enum.
  #[error("invalid {enum_name} value: {value:#04X}")]
  InvalidEnumValue { enum_name: &'static str, value: u8 },

  /// An operand needs more bits than the entry's operand width provides.
  #[error("operand needs {bits} bits but {arg_size:?} holds at most {max_bits}")]
  OperandTooWide {
    bits: u64,
    max_bits: u64,
    arg_size: ArgSize,
  },

  /// A big-endian operand slice is not exactly `arg_size` bytes long.
  #[error("operand slice is {len} bytes but {arg_size:?} needs {expected}")]
  OperandWidth {
    len: usize,
    expected: usize,
    arg_size: ArgSize,
  },
}
