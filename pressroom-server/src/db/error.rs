//! Repository error type and its mapping onto service error kinds

use pressroom_core::Error;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    #[error("conflict: {resource} with {field} '{value}'")]
    Conflict {
        resource: &'static str,
        field: &'static str,
        value: String,
    },
}

impl DbError {
    pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
    }

    pub(crate) fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
    }
}

impl From<DbError> for Error {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { resource, id } => Error::NotFound { resource, id },
            DbError::Conflict {
                resource,
                field,
                value,
            } => Error::Conflict {
                resource,
                field,
                value,
            },
            // Everything else (io, pool timeout, protocol, decode) is an unavailable store
            DbError::Sqlx(e) => Error::store(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_kind() {
        let err: Error = DbError::NotFound {
            resource: "post",
            id: "3".into(),
        }
        .into();
        assert!(err.is_not_found());
    }

    #[test]
    fn conflict_keeps_kind() {
        let err: Error = DbError::Conflict {
            resource: "user",
            field: "email",
            value: "a@x.com".into(),
        }
        .into();
        assert!(err.is_conflict());
    }

    #[test]
    fn pool_failures_are_unavailable() {
        let err: Error = DbError::Sqlx(sqlx::Error::PoolTimedOut).into();
        assert!(matches!(err, Error::StoreUnavailable(_)));
    }
}
