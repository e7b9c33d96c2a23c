//! Post repository
//!
//! - insert: foreign key on author_id, violation becomes user not found
//! - increment/publish: single UPDATE ... RETURNING, atomic per row
//! - find_matching: filter rendered with QueryBuilder, ORDER BY id

use pressroom_core::{NewPost, Post, PostFilter, PostId, UserId};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

use crate::db::DbError;

const POST_COLUMNS: &str = "id, title, content, published, view_count, author_id";

/// Post record from database
#[derive(Debug, Clone, FromRow)]
pub struct PostRow {
    pub id: i32,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub view_count: i64,
    pub author_id: i32,
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Self {
            id: PostId(row.id),
            title: row.title,
            content: row.content,
            published: row.published,
            view_count: row.view_count,
            author_id: UserId(row.author_id),
        }
    }
}

/// Post repository
pub struct PostRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PostRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a draft. Defaults for `published` and `view_count` come from the table.
    pub async fn insert(&self, post: NewPost) -> Result<Post, DbError> {
        let row: PostRow = sqlx::query_as(&format!(
            "INSERT INTO posts (title, content, author_id) VALUES ($1, $2, $3) RETURNING {POST_COLUMNS}"
        ))
        .bind(&post.title)
        .bind(post.content.as_deref())
        .bind(post.author_id.0)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if DbError::is_foreign_key_violation(&e) {
                DbError::NotFound {
                    resource: "user",
                    id: post.author_id.to_string(),
                }
            } else {
                e.into()
            }
        })?;

        Ok(row.into())
    }

    pub async fn get(&self, id: PostId) -> Result<Option<Post>, DbError> {
        let row: Option<PostRow> =
            sqlx::query_as(&format!("SELECT {POST_COLUMNS} FROM posts WHERE id = $1"))
                .bind(id.0)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(Post::from))
    }

    /// Add one view inside the database; concurrent calls serialize on the row lock.
    pub async fn increment_views(&self, id: PostId) -> Result<Post, DbError> {
        self.update_returning(
            id,
            "UPDATE posts SET view_count = view_count + 1 WHERE id = $1",
        )
        .await
    }

    /// Set published, whatever the current state.
    pub async fn publish(&self, id: PostId) -> Result<Post, DbError> {
        self.update_returning(id, "UPDATE posts SET published = TRUE WHERE id = $1")
            .await
    }

    async fn update_returning(&self, id: PostId, update: &str) -> Result<Post, DbError> {
        let row: PostRow = sqlx::query_as(&format!("{update} RETURNING {POST_COLUMNS}"))
            .bind(id.0)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "post",
                id: id.to_string(),
            })?;

        Ok(row.into())
    }

    /// Posts matching a filter, identity ascending, windowed.
    pub async fn find_matching(&self, filter: &PostFilter) -> Result<Vec<Post>, DbError> {
        let mut qb = select_matching(filter);
        let rows: Vec<PostRow> = qb.build_query_as().fetch_all(self.pool).await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }
}

/// Render a filter into a SELECT. Search text is always bound, never inlined.
///
/// `strpos` gives a plain case-sensitive substring test, so `%` and `_` in
/// the search string are literal characters.
pub(crate) fn select_matching(filter: &PostFilter) -> QueryBuilder<'_, Postgres> {
    let mut qb = QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts WHERE TRUE"));

    if let Some(published) = filter.published() {
        qb.push(" AND published = ").push_bind(published);
    }
    if let Some(author) = filter.author() {
        qb.push(" AND author_id = ").push_bind(author.0);
    }
    if let Some(search) = filter.search() {
        qb.push(" AND (strpos(title, ")
            .push_bind(search)
            .push(") > 0 OR strpos(content, ")
            .push_bind(search)
            .push(") > 0)");
    }

    qb.push(" ORDER BY id ASC");

    let window = filter.window();
    if let Some(limit) = window.sql_limit() {
        qb.push(" LIMIT ").push_bind(limit);
    }
    if let Some(offset) = window.sql_offset() {
        qb.push(" OFFSET ").push_bind(offset);
    }

    qb
}
