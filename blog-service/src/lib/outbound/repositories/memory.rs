use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::post::errors::PostError;
use crate::domain::post::models::Post;
use crate::domain::post::models::PostId;
use crate::domain::post::ports::PostRepository;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// Process-local user storage.
///
/// The uniqueness check and the insert happen under one write lock, so
/// concurrent signups for the same username cannot both succeed.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn exists_by_username(&self, username: &Username) -> Result<bool, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .any(|user| &user.username == username))
    }

    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|user| &user.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|existing| existing.username == user.username && existing.id != user.id)
        {
            return Err(UserError::UsernameTaken(user.username.to_string()));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        self.users
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn delete_all(&self) -> Result<(), UserError> {
        self.users.write().await.clear();
        Ok(())
    }
}

/// Process-local post storage, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPostRepository {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn save(&self, post: Post) -> Result<Post, PostError> {
        let mut posts = self.posts.write().await;
        posts.retain(|existing| existing.id != post.id);
        posts.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: &PostId) -> Result<Option<Post>, PostError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .find(|post| &post.id == id)
            .cloned())
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Vec<Post>, PostError> {
        Ok(self
            .posts
            .read()
            .await
            .iter()
            .filter(|post| &post.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_all(&self) -> Result<(), PostError> {
        self.posts.write().await.clear();
        Ok(())
    }
}
