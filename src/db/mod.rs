pub mod memory;
pub mod mongo;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

/// Storage-assigned document identifier, carried as an opaque string once it
/// leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Convert a native `_id` value into its wire form. This is the only
    /// point where the storage representation crosses to the string form:
    /// ObjectIds become their hex encoding, strings pass through, anything
    /// else falls back to its display form.
    pub fn from_bson(id: &Bson) -> Self {
        match id {
            Bson::ObjectId(oid) => Self(oid.to_hex()),
            Bson::String(s) => Self(s.clone()),
            other => Self(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Single-field filter accepted by [`DocumentStore::find`].
#[derive(Debug, Clone)]
pub enum DocumentFilter {
    /// Exact match on a string field.
    Eq { field: &'static str, value: String },
    /// Inclusive range on a string field. Comparison is lexicographic, which
    /// is correct for zero-padded ISO dates.
    Range {
        field: &'static str,
        start: String,
        end: String,
    },
}

/// A store of named collections of semi-structured documents.
///
/// One instance is constructed at startup and shared by handle across all
/// handlers. Implementations return matches in storage-default order
/// (insertion order for both backends here); no sort is applied.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one document into the named collection and return its
    /// storage-assigned id.
    async fn insert(&self, collection: &str, document: Document)
        -> Result<DocumentId, StorageError>;

    /// Return up to `limit` documents matching `filter`. No match is an
    /// empty result, not an error.
    async fn find(
        &self,
        collection: &str,
        filter: DocumentFilter,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError>;

    /// Names of the collections currently visible in the store.
    async fn collection_names(&self) -> Result<Vec<String>, StorageError>;
}
