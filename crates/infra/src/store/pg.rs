use async_trait::async_trait;

use super::{EntityStore, StoreResult};
use crate::db::Db;
use crate::models::{AuthorRow, BookRow, NewAuthor, NewBook};
use crate::repos::{authors, books};

/// Postgres-backed store. Clones share the same pool.
#[derive(Clone)]
pub struct PgStore {
    pool: Db,
}

impl PgStore {
    pub fn new(pool: Db) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for PgStore {
    async fn find_author_by_id(&self, id: i32) -> StoreResult<Option<AuthorRow>> {
        Ok(authors::get_by_id(&self.pool, id).await?)
    }

    async fn find_all_authors(&self) -> StoreResult<Vec<AuthorRow>> {
        Ok(authors::list(&self.pool).await?)
    }

    async fn find_book_by_id(&self, id: i32) -> StoreResult<Option<BookRow>> {
        Ok(books::get_by_id(&self.pool, id).await?)
    }

    async fn find_all_books(&self) -> StoreResult<Vec<BookRow>> {
        Ok(books::list(&self.pool).await?)
    }

    async fn find_books_by_author_id(&self, author_id: i32) -> StoreResult<Vec<BookRow>> {
        Ok(books::list_by_author(&self.pool, author_id).await?)
    }

    async fn insert_author(&self, name: String) -> StoreResult<AuthorRow> {
        let row = authors::create(&self.pool, NewAuthor { name }).await?;
        tracing::debug!(author_id = row.id, "Inserted author");
        Ok(row)
    }

    async fn insert_book(&self, name: String, author_id: i32) -> StoreResult<BookRow> {
        let row = books::create(&self.pool, NewBook { name, author_id }).await?;
        tracing::debug!(book_id = row.id, author_id, "Inserted book");
        Ok(row)
    }

    async fn ping(&self) -> StoreResult<()> {
        let _one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
