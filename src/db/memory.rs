use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};

use crate::db::{DocumentFilter, DocumentId, DocumentStore};
use crate::error::StorageError;

/// In-memory document store (for testing).
///
/// Documents are kept in insertion order per collection, which doubles as
/// the storage-default order returned by `find`.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(filter: &DocumentFilter, doc: &Document) -> bool {
        match filter {
            DocumentFilter::Eq { field, value } => {
                doc.get_str(field).is_ok_and(|v| v == value)
            }
            DocumentFilter::Range { field, start, end } => doc
                .get_str(field)
                .is_ok_and(|v| start.as_str() <= v && v <= end.as_str()),
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<DocumentId, StorageError> {
        let id = ObjectId::new();
        document.insert("_id", Bson::ObjectId(id));
        self.collections
            .write()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(document);
        Ok(DocumentId::from_bson(&Bson::ObjectId(id)))
    }

    async fn find(
        &self,
        collection: &str,
        filter: DocumentFilter,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        let collections = self.collections.read().unwrap();
        let docs = collections.get(collection).map(Vec::as_slice).unwrap_or(&[]);
        Ok(docs
            .iter()
            .filter(|doc| Self::matches(&filter, doc))
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.collections.read().unwrap().keys().cloned().collect())
    }
}
