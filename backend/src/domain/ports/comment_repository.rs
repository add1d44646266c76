//! Port for comment persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Comment;

use super::define_port_error;

define_port_error! {
    /// Errors raised by comment repository adapters.
    pub enum CommentRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "comment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "comment repository query failed: {message}",
    }
}

/// Port for storing and reading comments.
///
/// Each call is a single atomic operation at the storage layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find a comment by id.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Comment>, CommentRepositoryError>;

    /// Read every comment, oldest first.
    async fn find_all(&self) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Read the comments attached to one post, oldest first.
    async fn find_by_post(&self, post_id: &Uuid) -> Result<Vec<Comment>, CommentRepositoryError>;

    /// Store a new comment.
    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError>;

    /// Overwrite a stored comment.
    async fn update(&self, comment: &Comment) -> Result<(), CommentRepositoryError>;

    /// Delete a comment by id.
    async fn delete(&self, id: &Uuid) -> Result<(), CommentRepositoryError>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn query_error_formats_message() {
        let err = CommentRepositoryError::query("broken sql");
        assert_eq!(err.to_string(), "comment repository query failed: broken sql");
    }

    #[rstest]
    fn connection_error_formats_message() {
        let err = CommentRepositoryError::connection("refused");
        assert!(err.to_string().contains("refused"));
    }
}
