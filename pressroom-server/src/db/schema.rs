//! Schema bootstrap for the users and posts tables
//!
//! Idempotent `IF NOT EXISTS` statements only. There is no versioned
//! migration history.

use sqlx::PgPool;

/// Create tables and indexes if they are missing.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Ensuring pressroom schema...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            name TEXT,
            email TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id SERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT,
            published BOOLEAN NOT NULL DEFAULT FALSE,
            view_count BIGINT NOT NULL DEFAULT 0 CHECK (view_count >= 0),
            author_id INTEGER NOT NULL REFERENCES users(id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_author ON posts(author_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_published ON posts(id) WHERE published")
        .execute(pool)
        .await?;

    tracing::info!("Schema ready");
    Ok(())
}
