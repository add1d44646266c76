//! Port for post persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Post;

use super::define_port_error;

define_port_error! {
    /// Errors raised by post repository adapters.
    pub enum PostRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "post repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "post repository query failed: {message}",
    }
}

/// Port for storing and reading posts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by id.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Post>, PostRepositoryError>;

    /// Read every post, oldest first.
    async fn find_all(&self) -> Result<Vec<Post>, PostRepositoryError>;

    /// Store a new post.
    async fn insert(&self, post: &Post) -> Result<(), PostRepositoryError>;

    /// Overwrite a stored post.
    async fn update(&self, post: &Post) -> Result<(), PostRepositoryError>;

    /// Delete a post by id.
    async fn delete(&self, id: &Uuid) -> Result<(), PostRepositoryError>;
}
