use thiserror::Error;

/// Engine-level error type.
///
/// The validator and analyzers themselves never fail: validation violations
/// are returned as batched `FieldError`s and missing lexicon lookups fall
/// back to defaults. The only hard error is a form payload that does not
/// match the declared data shapes at the JSON boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed resume form: {0}")]
    Shape(#[from] serde_json::Error),
}
