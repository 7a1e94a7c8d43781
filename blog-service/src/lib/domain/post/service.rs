use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::CreatePostCommand;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::post::ports::PostServicePort;
use crate::domain::user::models::AuthenticatedPrincipal;
use crate::domain::user::models::User;
use crate::domain::user::ports::AuthenticationServicePort;

/// Domain service implementation for post operations.
///
/// Owners are resolved through the account service, never the user store.
pub struct PostService<PR, AS>
where
    PR: PostRepository,
    AS: AuthenticationServicePort,
{
    posts: Arc<PR>,
    accounts: Arc<AS>,
}

impl<PR, AS> PostService<PR, AS>
where
    PR: PostRepository,
    AS: AuthenticationServicePort,
{
    pub fn new(posts: Arc<PR>, accounts: Arc<AS>) -> Self {
        Self { posts, accounts }
    }

    /// Resolve the principal to its stored user.
    async fn owner(&self, principal: &AuthenticatedPrincipal) -> Result<User, PostError> {
        Ok(self
            .accounts
            .get_user_by_username(&principal.username)
            .await?)
    }
}

#[async_trait]
impl<PR, AS> PostServicePort for PostService<PR, AS>
where
    PR: PostRepository,
    AS: AuthenticationServicePort,
{
    async fn create_post(
        &self,
        principal: &AuthenticatedPrincipal,
        command: CreatePostCommand,
    ) -> Result<Post, PostError> {
        let owner = self.owner(principal).await?;

        let post = Post {
            id: PostId::new(),
            title: command.title,
            body: command.body,
            user_id: owner.id,
            created_at: Utc::now(),
        };

        let post = self.posts.save(post).await?;
        tracing::info!(post_id = %post.id, user_id = %owner.id, "Post created");

        Ok(post)
    }

    async fn list_posts(&self, principal: &AuthenticatedPrincipal) -> Result<Vec<Post>, PostError> {
        let owner = self.owner(principal).await?;
        self.posts.find_by_user(&owner.id).await
    }

    async fn get_post(
        &self,
        principal: &AuthenticatedPrincipal,
        id: &PostId,
    ) -> Result<Post, PostError> {
        let owner = self.owner(principal).await?;

        self.posts
            .find_by_id(id)
            .await?
            .filter(|post| post.user_id == owner.id)
            .ok_or(PostError::NotFound(id.to_string()))
    }
}
