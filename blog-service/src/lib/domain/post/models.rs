use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::post::errors::PostBodyError;
use crate::domain::post::errors::PostIdError;
use crate::domain::post::errors::PostTitleError;
use crate::domain::user::models::UserId;

/// Blog post entity, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub body: PostBody,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Post unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub Uuid);

impl PostId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PostIdError> {
        Uuid::parse_str(s)
            .map(PostId)
            .map_err(|e| PostIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PostId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Post title, 1 to 255 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - Title is blank
    /// * `TooLong` - Title exceeds 255 characters
    pub fn new(title: String) -> Result<Self, PostTitleError> {
        let title = title.trim().to_string();
        let length = title.chars().count();
        if length == 0 {
            Err(PostTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(PostTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Post body, must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostBody(String);

impl PostBody {
    /// # Errors
    /// * `Empty` - Body is blank
    pub fn new(body: String) -> Result<Self, PostBodyError> {
        if body.trim().is_empty() {
            return Err(PostBodyError::Empty);
        }
        Ok(Self(body))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a post for the authenticated principal
#[derive(Debug)]
pub struct CreatePostCommand {
    pub title: PostTitle,
    pub body: PostBody,
}

impl CreatePostCommand {
    pub fn new(title: PostTitle, body: PostBody) -> Self {
        Self { title, body }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_validation() {
        assert_eq!(
            PostTitle::new("  Third ".to_string()).unwrap().as_str(),
            "Third"
        );
        assert_eq!(PostTitle::new("   ".to_string()), Err(PostTitleError::Empty));
        assert_eq!(
            PostTitle::new("x".repeat(256)),
            Err(PostTitleError::TooLong {
                max: 255,
                actual: 256
            })
        );
    }

    #[test]
    fn test_body_validation() {
        assert_eq!(
            PostBody::new("Hello yet again.".to_string())
                .unwrap()
                .as_str(),
            "Hello yet again."
        );
        assert_eq!(PostBody::new("\n".to_string()), Err(PostBodyError::Empty));
    }
}
