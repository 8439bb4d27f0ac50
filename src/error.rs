use thiserror::Error;

/// Failures talking to the document store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection is not configured")]
    NotConfigured,

    #[error("database error: {0}")]
    Backend(#[from] mongodb::error::Error),

    #[error("payload could not be stored as a document: {0}")]
    InvalidDocument(#[from] mongodb::bson::ser::Error),
}

/// Failures turning a stored document back into its response shape.
///
/// These should not occur when documents were written through
/// [`crate::db::DocumentStore::insert`]; they guard against collections
/// modified out-of-band.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("stored document is missing field `{0}`")]
    MissingField(&'static str),

    #[error("stored document field `{0}` has an unexpected type")]
    InvalidField(&'static str),
}
