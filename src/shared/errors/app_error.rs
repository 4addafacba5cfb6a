use serde::Serialize;
use thiserror::Error;

/// Reasons a review mutation is refused by the restaurant aggregate.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason")]
pub enum ReviewNotAllowed {
    #[error("User has already reviewed this restaurant")]
    DuplicateAuthor,

    #[error("Review does not exist")]
    ReviewMissing,

    #[error("Cannot update another user's review")]
    NotAuthor,

    #[error("Review can no longer be edited (window of {window_hours}h has passed)")]
    EditWindowExpired { window_hours: i64 },
}

#[derive(Error, Debug, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Restaurant not found with id: {0}")]
    RestaurantNotFound(String),

    #[error("Review not allowed: {0}")]
    ReviewNotAllowed(#[from] ReviewNotAllowed),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Coarse classification callers route on (HTTP status, retry policy, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    Forbidden,
    EditWindowExpired,
    Invalid,
    Internal,
    Storage,
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::RestaurantNotFound(_) => ErrorKind::NotFound,
            AppError::ReviewNotAllowed(reason) => match reason {
                ReviewNotAllowed::DuplicateAuthor => ErrorKind::Conflict,
                ReviewNotAllowed::NotAuthor => ErrorKind::Forbidden,
                ReviewNotAllowed::EditWindowExpired { .. } => ErrorKind::EditWindowExpired,
                ReviewNotAllowed::ReviewMissing => ErrorKind::Invalid,
            },
            AppError::ValidationError(_) => ErrorKind::Invalid,
            AppError::InternalError(_) | AppError::SerializationError(_) => ErrorKind::Internal,
            AppError::StorageError(_) => ErrorKind::Storage,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::ValidationError(format!("Invalid UUID: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::ValidationError(format!("Invalid date/time: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
