//! User credential model.

use sqlx::FromRow;

/// A credential row. The password column holds plaintext and is compared
/// with literal string equality; this mirrors the deployed schema rather
/// than endorsing it.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}
