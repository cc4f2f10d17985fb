use std::path::Path;

use corpus_types::DecodedCase;
use serde::Serialize;

use crate::error::RenderError;

/// JSON renderer: one compact object per case, for scripting.
///
/// Operand values are strings: a 512-bit integer does not survive a trip
/// through a JSON number in most consumers.
///
/// ```text
/// {"path":"corpus/crash-1","arg_size":32,"op":"<<","x":"1","y":"2","x_hex":"0x00..01","y_hex":"0x00..02"}
/// ```
pub struct JsonRenderer;

#[derive(Serialize)]
struct CaseRecord<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    arg_size: usize,
    op: &'a str,
    x: String,
    y: String,
    x_hex: String,
    y_hex: String,
}

impl JsonRenderer {
    /// # Errors
    ///
    /// Returns [`RenderError::Json`] if serialization fails.
    pub fn render(case: &DecodedCase, path: Option<&Path>) -> Result<String, RenderError> {
        let record = CaseRecord {
            path: path.map(|p| p.display().to_string()),
            arg_size: case.arg_size().bytes(),
            op: case.operator.symbol(),
            x: case.x.to_string(),
            y: case.y.to_string(),
            x_hex: case.x.to_hex(),
            y_hex: case.y.to_hex(),
        };
        Ok(serde_json::to_string(&record)?)
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
    fn fields_round_trip_through_serde_json() {
        let entry = CaseEncoder::new(ArgSize::Bits512)
            .operator(Operator::Shr)
            .x(255u8)
            .y(4u8)
            .encode()
            .unwrap();
        let case = EntryDecoder::new(DecoderConfig::default())
            .decode(&entry)
            .unwrap()
            .into_case()
            .unwrap();

        let line = JsonRenderer::render(&case, Some(Path::new("c/e"))).unwrap();
        assert!(!line.contains('\n'));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["path"], "c/e");
        assert_eq!(value["arg_size"], 64);
        assert_eq!(value["op"], ">>");
        assert_eq!(value["x"], "255");
        assert_eq!(value["y"], "4");
        assert_eq!(value["x_hex"].as_str().unwrap().len(), 2 + 128);
        assert!(value["y_hex"].as_str().unwrap().ends_with("04"));
    }

    #[test]
    fn path_is_omitted_when_absent() {
        let entry = CaseEncoder::new(ArgSize::Bits256).encode().unwrap();
        let case = EntryDecoder::new(DecoderConfig::default())
            .decode(&entry)
            .unwrap()
            .into_case()
            .unwrap();

        let line = JsonRenderer::render(&case, None).unwrap();
        assert!(line.starts_with("{\"arg_size\":32,\"op\":\"/\""));
    }
}
