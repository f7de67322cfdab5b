use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, RuntimeErr};
use serde::Serialize;
use serde_json::json;
use sqlx::error::ErrorKind;
use thiserror::Error;

/// Every failure a handler can report to a client.
///
/// The `errno` and HTTP status of each kind are part of the public
/// contract; the `text` carried alongside is diagnostic only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Object not found: Invalid {0}")]
    ObjectNotFound(String),

    #[error("Database save failed: {0}")]
    DatabaseSaveFailed(String),

    #[error("Invalid foreign key: Invalid {0}")]
    InvalidForeignKey(String),

    #[error("No Name provided: {0}")]
    NoNameProvided(String),

    #[error("The provided value wasn't valid: {0}")]
    InvalidValue(String),

    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON body returned for every classified error.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub errno: u8,
    pub text: String,
}

impl ApiError {
    pub fn not_found(object: impl Into<String>) -> Self {
        Self::ObjectNotFound(object.into())
    }

    pub fn foreign_key(field: impl Into<String>) -> Self {
        Self::InvalidForeignKey(field.into())
    }

    pub fn invalid_value(value: impl Into<String>) -> Self {
        Self::InvalidValue(value.into())
    }

    /// Stable numeric code; `None` for unclassified failures.
    pub fn errno(&self) -> Option<u8> {
        match self {
            Self::ObjectNotFound(_) => Some(1),
            Self::DatabaseSaveFailed(_) => Some(2),
            Self::InvalidForeignKey(_) => Some(3),
            Self::NoNameProvided(_) => Some(4),
            Self::InvalidValue(_) => Some(5),
            Self::Internal(_) => None,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::ObjectNotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// Classify a storage failure.
    ///
    /// Constraint violations reported by SQLite (unique, foreign key,
    /// not-null, check) become `DatabaseSaveFailed` with the store's message;
    /// everything else is an internal error.
    pub fn from_db(err: DbErr) -> Self {
        match constraint_violation(&err) {
            Some(message) => {
                tracing::warn!("Write rejected by store: {message}");
                Self::DatabaseSaveFailed(message)
            }
            None => {
                tracing::error!("Storage failure: {err}");
                Self::Internal(err.to_string())
            }
        }
    }

    /// Body for classified errors, `None` for `Internal`.
    pub fn body(&self) -> Option<ErrorBody> {
        let errno = self.errno()?;
        let (error, text) = match self {
            Self::ObjectNotFound(object) => ("Object not found", format!("Invalid {object}")),
            Self::DatabaseSaveFailed(message) => ("Database save failed", message.clone()),
            Self::InvalidForeignKey(field) => ("Invalid foreign key", format!("Invalid {field}")),
            Self::NoNameProvided(message) => ("No Name provided", message.clone()),
            Self::InvalidValue(value) => ("The provided value wasn't valid", value.clone()),
            Self::Internal(_) => return None,
        };
        Some(ErrorBody { error, errno, text })
    }
}

fn constraint_violation(err: &DbErr) -> Option<String> {
    let runtime = match err {
        DbErr::Exec(e) | DbErr::Query(e) | DbErr::Conn(e) => e,
        _ => return None,
    };
    let RuntimeErr::SqlxError(sqlx::Error::Database(db_err)) = runtime else {
        return None;
    };
    let message = db_err.message();
    match db_err.kind() {
        ErrorKind::UniqueViolation
        | ErrorKind::ForeignKeyViolation
        | ErrorKind::NotNullViolation
        | ErrorKind::CheckViolation => Some(message.to_string()),
        // Reference triggers raise a plain constraint error
        _ if message.contains("constraint failed") => Some(message.to_string()),
        _ => None,
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        Self::from_db(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self.body() {
            Some(body) => {
                tracing::debug!(errno = body.errno, "Request failed: {self}");
                (status, Json(body)).into_response()
            }
            None => {
                tracing::error!("Unclassified failure: {self}");
                (status, Json(json!({ "error": "Internal server error" }))).into_response()
            }
        }
    }
}
