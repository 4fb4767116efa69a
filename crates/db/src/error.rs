/// Failure reported by a [`crate::Store`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A write collided with a unique constraint.
    #[error("Duplicate value violates unique constraint: {constraint}")]
    Conflict { constraint: String },

    /// Any other database failure, including connectivity.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return StoreError::Conflict { constraint };
            }
        }
        StoreError::Database(err)
    }
}
