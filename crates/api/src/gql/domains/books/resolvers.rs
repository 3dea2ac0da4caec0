use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::types::Book;
use crate::gql::domains::nullable_list;
use crate::gql::error::{GqlError, ResultExt};
use crate::state::AppState;

#[derive(Default)]
pub struct BookQuery;

#[Object]
impl BookQuery {
    /// A Single Book
    async fn book(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Book>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.find_book_by_id(id).await.gql()?;
        Ok(row.map(Book::from))
    }

    /// List of All Books
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Book>>>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.find_all_books().await.gql()?;
        Ok(nullable_list(rows))
    }
}

#[derive(Default)]
pub struct BookMutation;

#[Object]
impl BookMutation {
    /// Add a book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> Result<Option<Book>> {
        let state = ctx.data::<AppState>()?;

        // Existence check and insert are two independent store calls.
        if state.store.find_author_by_id(author_id).await.gql()?.is_none() {
            tracing::warn!(author_id, "Rejected book for unknown author");
            return Err(GqlError::AuthorNotFound(author_id).extend());
        }

        let row = state.store.insert_book(name, author_id).await.gql()?;
        tracing::info!(book_id = row.id, author_id, "Book added");
        Ok(Some(row.into()))
    }
}
