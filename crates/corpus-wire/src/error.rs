/// Errors raised while splitting a raw corpus entry into its fields.
///
/// Both variants mean the same thing to a caller: the entry is malformed
/// and carries no decodable case. They are kept apart so a diagnostic can
/// say *why* the size was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The entry has no bytes at all, so there is not even a selector.
    #[error("empty corpus entry")]
    EmptyEntry,

    /// The operand width derived from the entry length is not 32 or 64.
    ///
    /// `arg_size` is `(entry_len - 1) / 2`, floor-divided.
    #[error("invalid arg_size {arg_size} (entry length {entry_len}), expected 32 or 64")]
    InvalidArgSize { arg_size: usize, entry_len: usize },
}
