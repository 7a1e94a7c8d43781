use async_trait::async_trait;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::user::models::AuthenticatedPrincipal;
use crate::domain::user::models::UserId;

/// Port for post domain service operations.
///
/// Every operation is scoped to the account of the authenticated principal.
#[async_trait]
pub trait PostServicePort: Send + Sync + 'static {
    /// Create a post owned by the principal's user.
    ///
    /// # Errors
    /// * `UserNotFound` - The principal no longer resolves to a stored user
    /// * `DatabaseError` - Database operation failed
    async fn create_post(
        &self,
        principal: &AuthenticatedPrincipal,
        command: CreatePostCommand,
    ) -> Result<Post, PostError>;

    /// List the principal's posts, oldest first.
    ///
    /// # Errors
    /// * `UserNotFound` - The principal no longer resolves to a stored user
    /// * `DatabaseError` - Database operation failed
    async fn list_posts(&self, principal: &AuthenticatedPrincipal) -> Result<Vec<Post>, PostError>;

    /// Retrieve one of the principal's posts.
    ///
    /// # Errors
    /// * `NotFound` - Post does not exist or belongs to another user
    /// * `UserNotFound` - The principal no longer resolves to a stored user
    /// * `DatabaseError` - Database operation failed
    async fn get_post(
        &self,
        principal: &AuthenticatedPrincipal,
        id: &PostId,
    ) -> Result<Post, PostError>;
}

/// Persistence operations for posts.
#[async_trait]
pub trait PostRepository: Send + Sync + 'static {
    /// Persist a new post.
    ///
    /// # Errors
    /// * `UserNotFound` - Owning user does not exist
    /// * `DatabaseError` - Database operation failed
    async fn save(&self, post: Post) -> Result<Post, PostError>;

    /// Retrieve post by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError>;

    /// Retrieve all posts owned by a user, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Post>, PostError>;

    /// Remove every post from storage.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn delete_all(&self) -> Result<(), PostError>;
}
