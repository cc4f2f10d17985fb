use corpus_types::{DecodedCase, Operand, Operator};
use corpus_wire::EntryLayout;

use crate::error::DecodeError;
use crate::filter::OperatorFilter;

/// Per-run decoder configuration.
///
/// Built once from the command line and handed to [`EntryDecoder::new`].
/// Nothing here changes while a corpus is being walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecoderConfig {
    /// Operators to report. Unrestricted by default.
    pub filter: OperatorFilter,
}

/// What a well-sized entry decoded to.
///
/// Only [`Case`](Self::Case) carries something to render. The two skip
/// variants are not errors: reserved selectors are routine in a fuzz
/// corpus, and filtering is requested by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// The entry decoded to `X <op> Y`.
    Case(DecodedCase),

    /// The selector byte is outside the operator table (>= 4).
    UnknownOperator { selector: u8 },

    /// The operator is known but excluded by the configured filter.
    Filtered { operator: Operator },
}

impl DecodeOutcome {
    /// The decoded case, if any.
    pub fn into_case(self) -> Option<DecodedCase> {
        match self {
            Self::Case(case) => Some(case),
            Self::UnknownOperator { .. } | Self::Filtered { .. } => None,
        }
    }
}

/// Decoder for single fuzz corpus entries.
///
/// Decoding is a pure function of the entry bytes and the configured
/// filter, so the same buffer always yields the same outcome. It is also
/// total: every byte sequence, including the empty one, produces either
/// an outcome or a [`DecodeError`], never a panic.
///
/// Checks run in a fixed order, and the first one to fail decides the
/// result:
///
///   1. **Length**: `arg_size = (len - 1) / 2` must be 32 or 64, otherwise
///      the entry is malformed ([`DecodeError::Layout`]).
///   2. **Selector**: byte 0 must index the operator table, otherwise
///      [`DecodeOutcome::UnknownOperator`].
///   3. **Filter**: the operator must pass the filter, otherwise
///      [`DecodeOutcome::Filtered`].
///   4. **Operands**: X and Y are read big-endian, `arg_size` bytes each.
///
/// # Example
///
/// ```rust
/// use corpus_decoder::{DecodeOutcome, DecoderConfig, EntryDecoder};
///
/// let mut entry = vec![0u8; 65];
/// entry[0] = 2; // <<
/// entry[32] = 1; // X = 1
/// entry[64] = 2; // Y = 2
///
/// let decoder = EntryDecoder::new(DecoderConfig::default());
/// let DecodeOutcome::Case(case) = decoder.decode(&entry).unwrap() else {
///     panic!("entry should decode");
/// };
/// assert_eq!(case.operator.symbol(), "<<");
/// assert_eq!(case.x.to_string(), "1");
/// assert_eq!(case.y.to_string(), "2");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EntryDecoder {
    config: DecoderConfig,
}

impl EntryDecoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode one corpus entry.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Layout`] when the entry is empty or its
    /// derived `arg_size` is not 32 or 64. The selector and filter are not
    /// consulted in that case. [`DecodeError::Operand`] cannot occur for
    /// slices produced by [`EntryLayout::split`].
    pub fn decode(&self, data: &[u8]) -> Result<DecodeOutcome, DecodeError> {
        let layout = EntryLayout::split(data)?;

        let Ok(operator) = Operator::from_wire_byte(layout.selector) else {
            return Ok(DecodeOutcome::UnknownOperator {
                selector: layout.selector,
            });
        };

        if !self.config.filter.allows(operator) {
            return Ok(DecodeOutcome::Filtered { operator });
        }

        Ok(DecodeOutcome::Case(DecodedCase {
            operator,
            x: Operand::from_be_slice(layout.x, layout.arg_size)?,
            y: Operand::from_be_slice(layout.y, layout.arg_size)?,
        }))
    }
}
