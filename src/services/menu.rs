use chrono::NaiveDate;
use mongodb::bson::{self, document::ValueAccessError, Document};

use crate::db::{DocumentFilter, DocumentId, DocumentStore};
use crate::error::{SerializationError, StorageError};
use crate::models::menu::{CanteenMenuDay, MenuItem, MenuOut};

/// Cap on the number of documents a single range query returns.
const RANGE_LIMIT: i64 = 100;

pub struct MenuService;

impl MenuService {
    /// Persist one day's menu and return its storage-assigned id.
    pub async fn create(
        store: &dyn DocumentStore,
        day: &CanteenMenuDay,
    ) -> anyhow::Result<DocumentId> {
        let document = bson::to_document(day).map_err(StorageError::from)?;
        Ok(store.insert(CanteenMenuDay::COLLECTION, document).await?)
    }

    /// The menu for one exact date, if any. With duplicate dates the first
    /// match in storage-default order wins, i.e. the earliest inserted.
    pub async fn for_date(
        store: &dyn DocumentStore,
        date: NaiveDate,
    ) -> anyhow::Result<Option<MenuOut>> {
        let filter = DocumentFilter::Eq {
            field: "date",
            value: date.to_string(),
        };
        let docs = store.find(CanteenMenuDay::COLLECTION, filter, 1).await?;
        Ok(docs.first().map(Self::serialize_menu).transpose()?)
    }

    /// All menus between two dates inclusive, up to [`RANGE_LIMIT`]. Results
    /// come back in storage-default order, not sorted by date.
    pub async fn for_range(
        store: &dyn DocumentStore,
        start: NaiveDate,
        end: NaiveDate,
    ) -> anyhow::Result<Vec<MenuOut>> {
        let filter = DocumentFilter::Range {
            field: "date",
            start: start.to_string(),
            end: end.to_string(),
        };
        let docs = store
            .find(CanteenMenuDay::COLLECTION, filter, RANGE_LIMIT)
            .await?;

        let mut days = Vec::with_capacity(docs.len());
        for doc in &docs {
            days.push(Self::serialize_menu(doc)?);
        }
        Ok(days)
    }

    /// Rebuild the response shape from a stored document.
    pub fn serialize_menu(doc: &Document) -> Result<MenuOut, SerializationError> {
        let id = doc
            .get("_id")
            .map(DocumentId::from_bson)
            .ok_or(SerializationError::MissingField("_id"))?;

        let date = doc
            .get_str("date")
            .map_err(|_| SerializationError::MissingField("date"))?
            .parse::<NaiveDate>()
            .map_err(|_| SerializationError::InvalidField("date"))?;

        // A document written without items carries the schema default.
        let items = match doc.get_array("items") {
            Ok(raw) => raw
                .iter()
                .map(|entry| {
                    let item = entry
                        .as_document()
                        .ok_or(SerializationError::InvalidField("items"))?;
                    Ok(MenuItem {
                        dish: item
                            .get_str("dish")
                            .map_err(|_| SerializationError::MissingField("items.dish"))?
                            .to_string(),
                        kind: item
                            .get_str("type")
                            .map_err(|_| SerializationError::MissingField("items.type"))?
                            .to_string(),
                    })
                })
                .collect::<Result<Vec<_>, SerializationError>>()?,
            Err(ValueAccessError::NotPresent) => Vec::new(),
            Err(_) => return Err(SerializationError::InvalidField("items")),
        };

        Ok(MenuOut { id, date, items })
    }
}
