use std::path::Path;

use corpus_types::DecodedCase;

use crate::config::{OutputMode, RenderConfig};
use crate::error::RenderError;
use crate::render_detailed::DetailedRenderer;
use crate::render_json::JsonRenderer;
use crate::render_plain::PlainRenderer;

/// Turns a decoded case into text for the operator.
///
/// Rendering is presentation only. Implementations must print operands
/// at full precision: no truncation, no scientific notation.
///
/// ```text
/// DecodedCase ──▶ CaseRenderer::render() ──▶ String (no trailing newline)
///                        │
///                  RenderConfig (mode)
/// ```
pub trait CaseRenderer {
    /// Render one case. `path` names the corpus entry it came from, when
    /// known.
    ///
    /// # Errors
    ///
    /// Returns a [`RenderError`] if the chosen format cannot be produced.
    fn render(
        &self,
        case: &DecodedCase,
        path: Option<&Path>,
        config: &RenderConfig,
    ) -> Result<String, RenderError>;
}

/// Dispatches to the renderer for `config.mode`.
///
/// ```text
/// ┌─────────────┐     ┌──────────┐     ┌──────────────────┐
/// │ DecodedCase │────▶│ dispatch │────▶│ PlainRenderer    │
/// │             │     │ on mode  │     │ DetailedRenderer │
/// │             │     │          │     │ JsonRenderer     │
/// └─────────────┘     └──────────┘     └──────────────────┘
/// ```
pub struct DefaultRenderer;

impl CaseRenderer for DefaultRenderer {
    fn render(
        &self,
        case: &DecodedCase,
        path: Option<&Path>,
        config: &RenderConfig,
    ) -> Result<String, RenderError> {
        match config.mode {
            OutputMode::Plain => Ok(PlainRenderer::render(case)),
            OutputMode::Detailed => Ok(DetailedRenderer::render(case, path)),
            OutputMode::Json => JsonRenderer::render(case, path),
        }
    }
}
