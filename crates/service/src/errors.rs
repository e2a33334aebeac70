use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("product '{0}' not found")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("validation error: {0}")]
    Validation(String),
    #[error("unexpected error, check server logs")]
    Internal,
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(err: models::errors::ModelError) -> Self {
        match err {
            models::errors::ModelError::Validation(msg) => ServiceError::Validation(msg),
            models::errors::ModelError::Db(msg) => {
                error!(error = %msg, "unexpected database error");
                ServiceError::Internal
            }
        }
    }
}

/// Single translation point for raw database failures. A uniqueness
/// violation becomes a conflict carrying the driver's detail; anything
/// else is logged in full and surfaced as a generic internal error.
pub fn classify_db_err(err: DbErr) -> ServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return ServiceError::Conflict(detail);
    }
    error!(error = %err, "unexpected database error");
    ServiceError::Internal
}
