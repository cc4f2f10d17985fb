use corpus_types::Operator;

/// Set of operators a decoding run reports.
///
/// Stored as a bitmask with one bit per operator wire byte:
///
/// ```text
///   bit 0 = /    bit 1 = *    bit 2 = <<    bit 3 = >>
///   bits 4-7 unused
/// ```
///
/// The empty set means "no restriction": every known operator passes.
/// This matches how triage is usually run, with a filter only when
/// chasing one particular operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperatorFilter(u8);

impl OperatorFilter {
    /// The unrestricted filter.
    pub fn all() -> Self {
        Self(0)
    }

    /// A filter that lets only the given operators through.
    ///
    /// An empty iterator yields the unrestricted filter.
    pub fn only(ops: impl IntoIterator<Item = Operator>) -> Self {
        ops.into_iter().fold(Self(0), Self::with)
    }

    /// Add one operator to the set.
    #[must_use]
    pub fn with(self, op: Operator) -> Self {
        Self(self.0 | Self::bit(op))
    }

    pub fn is_unrestricted(self) -> bool {
        self.0 == 0
    }

    /// Whether `op` should be reported under this filter.
    pub fn allows(self, op: Operator) -> bool {
        self.is_unrestricted() || self.0 & Self::bit(op) != 0
    }

    /// Operators explicitly listed, in wire order. Empty when unrestricted.
    pub fn operators(self) -> Vec<Operator> {
        Operator::ALL
            .iter()
            .copied()
            .filter(|&op| self.0 & Self::bit(op) != 0)
            .collect()
    }

    fn bit(op: Operator) -> u8 {
        1 << op.to_wire_byte()
    }
}

impl FromIterator<Operator> for OperatorFilter {
    fn from_iter<I: IntoIterator<Item = Operator>>(iter: I) -> Self {
        Self::only(iter)
    }
}
