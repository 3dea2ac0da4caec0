use sqlx::{PgExecutor, Result as SqlxResult};

use crate::models::{BookRow, NewBook};

pub async fn list<'e>(executor: impl PgExecutor<'e>) -> SqlxResult<Vec<BookRow>> {
    sqlx::query_as::<_, BookRow>(
        r#"
        SELECT id, name, author_id
        FROM books
        ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_by_id<'e>(executor: impl PgExecutor<'e>, id: i32) -> SqlxResult<Option<BookRow>> {
    sqlx::query_as::<_, BookRow>(
        r#"
        SELECT id, name, author_id
        FROM books
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Uses `books_author_id_idx`.
pub async fn list_by_author<'e>(
    executor: impl PgExecutor<'e>,
    author_id: i32,
) -> SqlxResult<Vec<BookRow>> {
    sqlx::query_as::<_, BookRow>(
        r#"
        SELECT id, name, author_id
        FROM books
        WHERE author_id = $1
        ORDER BY id ASC
        "#,
    )
    .bind(author_id)
    .fetch_all(executor)
    .await
}

pub async fn create<'e>(executor: impl PgExecutor<'e>, data: NewBook) -> SqlxResult<BookRow> {
    sqlx::query_as::<_, BookRow>(
        r#"
        INSERT INTO books (name, author_id)
        VALUES ($1, $2)
        RETURNING id, name, author_id
        "#,
    )
    .bind(data.name)
    .bind(data.author_id)
    .fetch_one(executor)
    .await
}
