use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{EntityStore, StoreError, StoreResult};
use crate::models::{AuthorRow, BookRow};

#[derive(Default)]
struct Collections {
    authors: BTreeMap<i32, AuthorRow>,
    books: BTreeMap<i32, BookRow>,
    // Secondary index on books.author_id
    books_by_author: HashMap<i32, Vec<i32>>,
    last_author_id: i32,
    last_book_id: i32,
}

/// Process-local store with the same contract as [`super::PgStore`].
/// Nothing survives a restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(last: i32, collection: &'static str) -> StoreResult<i32> {
    last.checked_add(1).ok_or(StoreError::IdsExhausted(collection))
}

#[async_trait]
impl EntityStore for MemoryStore {
    async fn find_author_by_id(&self, id: i32) -> StoreResult<Option<AuthorRow>> {
        Ok(self.inner.read().authors.get(&id).cloned())
    }

    async fn find_all_authors(&self) -> StoreResult<Vec<AuthorRow>> {
        Ok(self.inner.read().authors.values().cloned().collect())
    }

    async fn find_book_by_id(&self, id: i32) -> StoreResult<Option<BookRow>> {
        Ok(self.inner.read().books.get(&id).cloned())
    }

    async fn find_all_books(&self) -> StoreResult<Vec<BookRow>> {
        Ok(self.inner.read().books.values().cloned().collect())
    }

    async fn find_books_by_author_id(&self, author_id: i32) -> StoreResult<Vec<BookRow>> {
        let collections = self.inner.read();
        let Some(ids) = collections.books_by_author.get(&author_id) else {
            return Ok(Vec::new());
        };
        Ok(ids
            .iter()
            .filter_map(|id| collections.books.get(id).cloned())
            .collect())
    }

    async fn insert_author(&self, name: String) -> StoreResult<AuthorRow> {
        let mut collections = self.inner.write();
        let id = next_id(collections.last_author_id, "authors")?;
        collections.last_author_id = id;
        let row = AuthorRow { id, name };
        collections.authors.insert(row.id, row.clone());
        Ok(row)
    }

    async fn insert_book(&self, name: String, author_id: i32) -> StoreResult<BookRow> {
        let mut collections = self.inner.write();
        let id = next_id(collections.last_book_id, "books")?;
        collections.last_book_id = id;
        let row = BookRow {
            id,
            name,
            author_id,
        };
        collections.books.insert(row.id, row.clone());
        collections
            .books_by_author
            .entry(author_id)
            .or_default()
            .push(row.id);
        Ok(row)
    }
}
