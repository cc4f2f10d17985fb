use corpus_types::TypeError;
use corpus_wire::WireError;

/// Errors that make a corpus entry malformed.
///
/// Only the entry length can make an entry malformed. Reserved selector
/// bytes and filtered operators are ordinary outcomes, reported through
/// [`DecodeOutcome`](crate::DecodeOutcome) rather than as errors.
///
/// ```text
///   DecodeError
///   ├── Layout(WireError)   ← empty entry, or arg_size not 32/64
///   └── Operand(TypeError)  ← operand slice disagrees with arg_size
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("malformed entry: {0}")]
    Layout(#[from] WireError),

    #[error("malformed operand: {0}")]
    Operand(#[from] TypeError),
}

impl DecodeError {
    /// The rejected operand width, when the entry had a selector at all.
    pub fn arg_size(&self) -> Option<usize> {
        match self {
            Self::Layout(WireError::InvalidArgSize { arg_size, .. }) => Some(*arg_size),
            Self::Layout(WireError::EmptyEntry) | Self::Operand(_) => None,
        }
    }
}
