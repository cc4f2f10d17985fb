use corpus_wire::ArgSize;

use crate::enums::Operator;
use crate::operand::Operand;

/// A fully decoded corpus entry: `X <op> Y`.
///
/// X and Y always share one operand width, derived from the entry length
/// rather than stored independently on disk.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DecodedCase {
  pub operator: Operator,
  pub x: Operand,
  pub y: Operand,
}

impl DecodedCase {
  pub fn arg_size(&self) -> ArgSize {
    self.x.arg_size()
  }
}
