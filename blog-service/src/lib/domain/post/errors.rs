use thiserror::Error;

use crate::user::errors::UserError;

/// Error for PostId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for PostTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostTitleError {
    #[error("Title must not be empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for PostBody validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PostBodyError {
    #[error("Body must not be empty")]
    Empty,
}

/// Top-level error for post operations
#[derive(Debug, Clone, Error)]
pub enum PostError {
    #[error("Invalid post ID: {0}")]
    InvalidPostId(#[from] PostIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] PostTitleError),

    #[error("Invalid body: {0}")]
    InvalidBody(#[from] PostBodyError),

    #[error("Post not found: {0}")]
    NotFound(String),

    #[error("Owning user not found: {0}")]
    UserNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<UserError> for PostError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => PostError::UserNotFound(id),
            UserError::NotFoundByUsername(name) => PostError::UserNotFound(name),
            UserError::DatabaseError(msg) => PostError::DatabaseError(msg),
            other => PostError::Unknown(other.to_string()),
        }
    }
}
