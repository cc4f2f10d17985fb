/// Errors that can occur while rendering a decoded case.
///
/// Text modes cannot fail. Only the JSON renderer has a fallible step.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to serialize case as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
