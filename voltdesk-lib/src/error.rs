//! Error types

/// Errors raised while turning caller data into records.
///
/// Rendering itself never fails; this covers the conversion step that happens
/// before records reach a table.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The value could not be serialized into JSON.
    #[error("failed to serialize record: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A record was expected but the input held a different kind of value.
    #[error("expected an object, found {0}")]
    NotAnObject(&'static str),
}
