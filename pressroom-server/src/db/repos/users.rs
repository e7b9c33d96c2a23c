//! User repository
//!
//! - insert: plain INSERT, unique violation on email becomes a conflict
//! - list: identity ascending, unpaginated

use pressroom_core::{NewUser, User, UserId};
use sqlx::{FromRow, PgPool};

use crate::db::DbError;

/// User record from database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i32,
    pub name: Option<String>,
    pub email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId(row.id),
            name: row.name,
            email: row.email,
        }
    }
}

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a user, relying on the UNIQUE constraint for email.
    pub async fn insert(&self, user: NewUser) -> Result<User, DbError> {
        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            RETURNING id, name, email
            "#,
        )
        .bind(user.name.as_deref())
        .bind(&user.email)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if DbError::is_unique_violation(&e) {
                DbError::Conflict {
                    resource: "user",
                    field: "email",
                    value: user.email.clone(),
                }
            } else {
                e.into()
            }
        })?;

        Ok(row.into())
    }

    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, name, email FROM users ORDER BY id ASC")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    pub async fn get(&self, id: UserId) -> Result<Option<User>, DbError> {
        let row: Option<UserRow> = sqlx::query_as("SELECT id, name, email FROM users WHERE id = $1")
            .bind(id.0)
            .fetch_optional(self.pool)
            .await?;

        Ok(row.map(User::from))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, DbError> {
        let row: Option<UserRow> =
            sqlx::query_as("SELECT id, name, email FROM users WHERE email = $1")
                .bind(email)
                .fetch_optional(self.pool)
                .await?;

        Ok(row.map(User::from))
    }
}
