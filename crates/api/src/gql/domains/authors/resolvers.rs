use async_graphql::{Context, Object, Result};

use super::types::Author;
use crate::gql::domains::nullable_list;
use crate::gql::error::ResultExt;
use crate::state::AppState;

#[derive(Default)]
pub struct AuthorQuery;

#[Object]
impl AuthorQuery {
    /// A Single Author
    async fn author(&self, ctx: &Context<'_>, id: i32) -> Result<Option<Author>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.find_author_by_id(id).await.gql()?;
        Ok(row.map(Author::from))
    }

    /// List of All Authors
    async fn authors(&self, ctx: &Context<'_>) -> Result<Option<Vec<Option<Author>>>> {
        let state = ctx.data::<AppState>()?;
        let rows = state.store.find_all_authors().await.gql()?;
        Ok(nullable_list(rows))
    }
}

#[derive(Default)]
pub struct AuthorMutation;

#[Object]
impl AuthorMutation {
    /// Add an author
    async fn add_author(&self, ctx: &Context<'_>, name: String) -> Result<Option<Author>> {
        let state = ctx.data::<AppState>()?;
        let row = state.store.insert_author(name).await.gql()?;
        tracing::info!(author_id = row.id, "Author added");
        Ok(Some(row.into()))
    }
}
