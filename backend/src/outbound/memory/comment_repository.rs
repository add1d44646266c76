//! Process-local comment repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Comment;
use crate::domain::ports::{CommentRepository, CommentRepositoryError};

/// Comment store kept in memory, ordered by insertion.
#[derive(Debug, Default)]
pub struct InMemoryCommentRepository {
    comments: RwLock<Vec<Comment>>,
}

impl InMemoryCommentRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Comment>, CommentRepositoryError> {
        let comments = self.comments.read().await;
        Ok(comments.iter().find(|comment| comment.id() == *id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Comment>, CommentRepositoryError> {
        Ok(self.comments.read().await.clone())
    }

    async fn find_by_post(&self, post_id: &Uuid) -> Result<Vec<Comment>, CommentRepositoryError> {
        let comments = self.comments.read().await;
        Ok(comments
            .iter()
            .filter(|comment| comment.post_id() == *post_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        let mut comments = self.comments.write().await;
        if comments.iter().any(|stored| stored.id() == comment.id()) {
            return Err(CommentRepositoryError::query(format!(
                "comment {} already exists",
                comment.id()
            )));
        }
        comments.push(comment.clone());
        Ok(())
    }

    async fn update(&self, comment: &Comment) -> Result<(), CommentRepositoryError> {
        let mut comments = self.comments.write().await;
        let slot = comments
            .iter_mut()
            .find(|stored| stored.id() == comment.id())
            .ok_or_else(|| {
                CommentRepositoryError::query(format!("comment {} does not exist", comment.id()))
            })?;
        *slot = comment.clone();
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), CommentRepositoryError> {
        self.comments
            .write()
            .await
            .retain(|comment| comment.id() != *id);
        Ok(())
    }
}
