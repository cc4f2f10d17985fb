use corpus_types::TypeError;

/// Errors that can occur while building a corpus entry.
///
/// ```text
///   EncodeError
///   └── Operand { name, source: TypeError }  ← X or Y wider than arg_size
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("operand {name}: {source}")]
    Operand {
        name: &'static str,
        #[source]
        source: TypeError,
    },
}
