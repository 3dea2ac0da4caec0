use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct AuthorRow {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct BookRow {
    pub id: i32,
    pub name: String,
    /// Plain integer pointing at `AuthorRow::id`; not a storage reference.
    pub author_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewAuthor {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewBook {
    pub name: String,
    pub author_id: i32,
}
