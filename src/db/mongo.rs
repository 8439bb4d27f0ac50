use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Database};

use crate::db::{DocumentFilter, DocumentId, DocumentStore};
use crate::error::StorageError;

/// Document store backed by a MongoDB database.
pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Build a store from a connection string and database name.
    ///
    /// The driver connects lazily: an unreachable server is not detected
    /// here but on the first operation, so startup never depends on the
    /// database being up.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, StorageError> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            db: client.database(database),
        })
    }

    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    fn filter_document(filter: &DocumentFilter) -> Document {
        let mut filter_doc = Document::new();
        match filter {
            DocumentFilter::Eq { field, value } => {
                filter_doc.insert(*field, value.as_str());
            }
            DocumentFilter::Range { field, start, end } => {
                filter_doc.insert(*field, doc! { "$gte": start.as_str(), "$lte": end.as_str() });
            }
        }
        filter_doc
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert(
        &self,
        collection: &str,
        document: Document,
    ) -> Result<DocumentId, StorageError> {
        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(document)
            .await?;
        Ok(DocumentId::from_bson(&result.inserted_id))
    }

    async fn find(
        &self,
        collection: &str,
        filter: DocumentFilter,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        let cursor = self
            .db
            .collection::<Document>(collection)
            .find(Self::filter_document(&filter))
            .limit(limit)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.db.list_collection_names().await?)
    }
}
