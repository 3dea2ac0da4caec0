use async_graphql::{ComplexObject, Context, Result, SimpleObject};
use infra::models::AuthorRow;

use crate::gql::domains::books::Book;
use crate::gql::domains::nullable_list;
use crate::gql::error::ResultExt;
use crate::state::AppState;

/// This represents an author of a book
#[derive(SimpleObject, Clone, Debug)]
#[graphql(complex)]
pub struct Author {
    #[graphql(skip)]
    pub id: i32,
    pub name: String,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

#[ComplexObject]
impl Author {
    #[graphql(name = "id")]
    async fn resolve_id(&self) -> Option<i32> {
        Some(self.id)
    }

    /// Every book whose `authorId` is this author's id. One store query per author.
    async fn books(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Book>>>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.find_books_by_author_id(self.id).await.gql()?;
        Ok(nullable_list(rows))
    }
}
