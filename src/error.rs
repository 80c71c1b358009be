use thiserror::Error;

/// Errors that can occur while populating the component metadata store.
#[derive(Error, Debug, Clone)]
pub enum SchemaError {
    #[error("Failed to parse component schema JSON: {0}")]
    JsonParseError(String),

    #[error("Component descriptor at index {index} has no usable name")]
    MissingTypeName { index: usize },
}

/// Errors that can occur during code generation.
///
/// Only genuinely fatal input conditions are represented here. A missing
/// translation, a missing schema entry or malformed property text all
/// degrade to defined fallbacks inside the generator and never surface
/// as errors.
#[derive(Error, Debug, Clone)]
pub enum CodegenError {
    #[error("Failed to parse form descriptor JSON: {0}")]
    JsonParseError(String),

    #[error("Form descriptor has no 'Properties' section")]
    MissingFormProperties,

    #[error("Unrecognized source type '{0}', expected 'Form'")]
    UnknownSourceType(String),

    #[error("No generator is registered for block type '{type_tag}'")]
    UnknownBlockType { type_tag: String },

    #[error("Block type '{type_tag}' does not recognize operator '{operator}'")]
    UnknownOperator { type_tag: String, operator: String },
}
