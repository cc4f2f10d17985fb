use crate::error::WireError;

/// Offset of the operator selector byte.
pub const SELECTOR_OFFSET: usize = 0;

/// Offset of the first byte of operand X. Operand Y follows X directly.
pub const X_OFFSET: usize = 1;

/// Width of each operand in an entry, in bytes.
///
/// The fuzz harness runs every input against both the 256-bit and the
/// 512-bit integer types and only acts when the length matches one of
/// them, so these are the only two widths a meaningful entry can have.
///
/// ```text
/// ┌──────────┬──────────┬───────────────┬───────────────┐
/// │ ArgSize  │ Bytes    │ Operand bits  │ Entry length  │
/// ├──────────┼──────────┼───────────────┼───────────────┤
/// │ Bits256  │ 32       │ 256           │ 65 (or 66)    │
/// │ Bits512  │ 64       │ 512           │ 129 (or 130)  │
/// └──────────┴──────────┴───────────────┴───────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArgSize {
    Bits256,
    Bits512,
}

impl ArgSize {
    /// Derive the operand width from a total entry length.
    ///
    /// `arg_size = (len - 1) / 2` with floor division, so a single odd
    /// trailing byte is tolerated and never consumed.
    ///
    /// # Errors
    ///
    /// - [`WireError::EmptyEntry`] if `len` is zero.
    /// - [`WireError::InvalidArgSize`] if the derived width is not 32 or 64.
    pub fn from_entry_len(len: usize) -> Result<Self, WireError> {
        if len == 0 {
            return Err(WireError::EmptyEntry);
        }

        let arg_size = (len - 1) / 2;
        Self::from_bytes(arg_size).ok_or(WireError::InvalidArgSize {
            arg_size,
            entry_len: len,
        })
    }

    /// Map a byte width to an [`ArgSize`], if it is one of the two supported.
    pub fn from_bytes(bytes: usize) -> Option<Self> {
        match bytes {
            32 => Some(Self::Bits256),
            64 => Some(Self::Bits512),
            _ => None,
        }
    }

    /// Operand width in bytes.
    pub fn bytes(self) -> usize {
        match self {
            Self::Bits256 => 32,
            Self::Bits512 => 64,
        }
    }

    /// Operand width in bits.
    pub fn bits(self) -> u64 {
        self.bytes() as u64 * 8
    }

    /// Length of a canonical entry with this width: selector + X + Y.
    pub fn entry_len(self) -> usize {
        X_OFFSET + 2 * self.bytes()
    }
}

/// A corpus entry split into its three fields, borrowing from the input.
///
/// ```text
/// ┌──────────────┬────────────┬──────────────────────────────────┐
/// │ Offset       │ Length     │ Field                            │
/// ├──────────────┼────────────┼──────────────────────────────────┤
/// │ 0            │ 1          │ operator selector                │
/// │ 1            │ arg_size   │ operand X, big-endian unsigned   │
/// │ 1 + arg_size │ arg_size   │ operand Y, big-endian unsigned   │
/// │ 1 + 2*arg    │ 0 or 1     │ ignored trailing byte            │
/// └──────────────┴────────────┴──────────────────────────────────┘
/// ```
///
/// Splitting only validates the length. The selector is handed back as a
/// raw byte; whether it names a known operator is the decoder's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EntryLayout<'a> {
    pub selector: u8,
    pub arg_size: ArgSize,
    pub x: &'a [u8],
    pub y: &'a [u8],
    /// Bytes present after Y. Always 0 or 1.
    pub trailing: usize,
}

impl<'a> EntryLayout<'a> {
    /// Split a raw entry into selector, X and Y.
    ///
    /// # Errors
    ///
    /// Returns the [`WireError`] from [`ArgSize::from_entry_len`] when the
    /// entry length does not yield a supported operand width.
    pub fn split(data: &'a [u8]) -> Result<Self, WireError> {
        let arg_size = ArgSize::from_entry_len(data.len())?;
        let width = arg_size.bytes();

        let y_offset = X_OFFSET + width;
        let end = y_offset + width;

        Ok(Self {
            selector: data[SELECTOR_OFFSET],
            arg_size,
            x: &data[X_OFFSET..y_offset],
            y: &data[y_offset..end],
            trailing: data.len() - end,
        })
    }
}
