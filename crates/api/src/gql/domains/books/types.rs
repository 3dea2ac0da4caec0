use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use infra::models::BookRow;

use crate::gql::domains::authors::Author;
use crate::gql::error::ResultExt;
use crate::state::AppState;

/// This represents a book written by an author
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Book {
    #[graphql(skip)]
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            author_id: row.author_id,
        }
    }
}

#[ComplexObject]
impl Book {
    #[graphql(name = "id")]
    async fn resolve_id(&self) -> Option<i32> {
        Some(self.id)
    }

    /// Null when no author has this book's `authorId`.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.find_author_by_id(self.author_id).await.gql()?;
        Ok(row.map(Author::from))
    }
}
