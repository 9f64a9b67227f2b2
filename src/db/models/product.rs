//! Product catalog models.

use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Form payload shared by the create and update pages. The price arrives
/// as the raw form string and is parsed in the handler so a bad value is
/// rejected with a 400 before any statement runs.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub price: String,
}
