use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::db::DocumentId;

/// One dish on a day's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub dish: String,
    /// Entrée, plat, dessert, végétarien, ...
    #[serde(rename = "type")]
    pub kind: String,
}

/// Body for POST /api/menu — the cafeteria menu for one day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanteenMenuDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

impl CanteenMenuDay {
    /// Collection this schema persists to.
    pub const COLLECTION: &'static str = "canteenmenuday";
}

/// A stored menu day as returned to clients, identifier included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuOut {
    pub id: DocumentId,
    pub date: NaiveDate,
    pub items: Vec<MenuItem>,
}

/// Query params for GET /api/menu. Both bounds are required and inclusive.
#[derive(Debug, Deserialize)]
pub struct MenuRangeQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}
