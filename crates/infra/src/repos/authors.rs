use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::{AuthorRow, NewAuthor};

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<AuthorRow>> {
    sqlx::query_as::<_, AuthorRow>(
        r#"
        SELECT id, name
        FROM authors
        ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> SqlxResult<Option<AuthorRow>> {
    sqlx::query_as::<_, AuthorRow>(
        r#"
        SELECT id, name
        FROM authors
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: NewAuthor) -> SqlxResult<AuthorRow> {
    sqlx::query_as::<_, AuthorRow>(
        r#"
        INSERT INTO authors (name)
        VALUES ($1)
        RETURNING id, name
        "#,
    )
    .bind(data.name)
    .fetch_one(executor)
    .await
}
