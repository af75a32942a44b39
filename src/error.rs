use thiserror::Error;

/// Errors that can occur while loading or exporting a flow document.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Failed to parse flow document JSON: {0}")]
    JsonParse(String),

    #[error("Flow document is missing a non-empty 'meta.title'")]
    MissingTitle,

    #[error("Failed to serialize flow document: {0}")]
    Serialize(String),

    #[error("Could not read flow document '{path}': {message}")]
    FileRead { path: String, message: String },
}

/// Errors that can occur when converting a custom host format into a
/// [`FlowGraph`](crate::flow::FlowGraph).
#[derive(Error, Debug, Clone)]
pub enum ConversionError {
    #[error("Invalid flow data: {0}")]
    Validation(String),
}

/// Errors that can occur while persisting or restoring a binary snapshot.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Snapshot encoding failed: {0}")]
    Encode(String),

    #[error("Snapshot decoding failed: {0}")]
    Decode(String),

    #[error("Snapshot I/O failed for '{path}': {message}")]
    Io { path: String, message: String },
}
