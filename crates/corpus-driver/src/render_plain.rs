use corpus_types::DecodedCase;

/// Plain renderer: the expression on one line, decimal operands.
///
/// ```text
/// 1 << 2
/// 340282366920938463463374607431768211455 * 7
/// ```
pub struct PlainRenderer;

impl PlainRenderer {
    pub fn render(case: &DecodedCase) -> String {
        format!("{} {} {}", case.x, case.operator, case.y)
    }
}

#[cfg(test)]
mod tests {
    use corpus_decoder::{DecoderConfig, EntryDecoder};
    use corpus_encoder::CaseEncoder;
    use corpus_types::Operator;
    use corpus_wire::ArgSize;

    use super::*;

    #[test]
    fn renders_decimal_expression() {
        let entry = CaseEncoder::new(ArgSize::Bits256)
            .operator(Operator::Mul)
            .x(u128::MAX)
            .y(7u8)
            .encode()
            .unwrap();
        let case = EntryDecoder::new(DecoderConfig::default())
            .decode(&entry)
            .unwrap()
            .into_case()
            .unwrap();

        assert_eq!(
            PlainRenderer::render(&case),
            "340282366920938463463374607431768211455 * 7"
        );
    }
}
