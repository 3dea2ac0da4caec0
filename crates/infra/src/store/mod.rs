//! The Entity Store: durable lookup and insertion of authors and books.
//!
//! Resolvers receive the store explicitly through the GraphQL context as a
//! [`SharedStore`]. Every call is an independent operation; nothing is cached
//! between calls and no call spans a transaction.

mod memory;
mod pg;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AuthorRow, BookRow};

pub use memory::MemoryStore;
pub use pg::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("no ids left in collection {0}")]
    IdsExhausted(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Ids are assigned by the store, auto-incrementing from 1 per collection.
#[async_trait]
pub trait EntityStore: Send + Sync {
    async fn find_author_by_id(&self, id: i32) -> StoreResult<Option<AuthorRow>>;

    /// Every author, in storage order.
    async fn find_all_authors(&self) -> StoreResult<Vec<AuthorRow>>;

    async fn find_book_by_id(&self, id: i32) -> StoreResult<Option<BookRow>>;

    /// Every book, in storage order.
    async fn find_all_books(&self) -> StoreResult<Vec<BookRow>>;

    /// Books whose `author_id` matches; empty when there are none.
    async fn find_books_by_author_id(&self, author_id: i32) -> StoreResult<Vec<BookRow>>;

    /// Persist a new author before returning it.
    async fn insert_author(&self, name: String) -> StoreResult<AuthorRow>;

    /// Persist a new book before returning it. Does not check that the author exists.
    async fn insert_book(&self, name: String, author_id: i32) -> StoreResult<BookRow>;

    /// Cheap round-trip used by the health probe.
    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

pub type SharedStore = Arc<dyn EntityStore>;
