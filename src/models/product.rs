use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog entry. `name` is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub name: String,
    pub initial_stock: i64,
    pub minimum_stock: i64,
    pub location: String,
}
