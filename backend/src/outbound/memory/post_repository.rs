//! Process-local post repository.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::Post;
use crate::domain::ports::{PostRepository, PostRepositoryError};

/// Post store kept in memory, ordered by insertion.
#[derive(Debug, Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Post>, PostRepositoryError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id() == *id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, PostRepositoryError> {
        Ok(self.posts.read().await.clone())
    }

    async fn insert(&self, post: &Post) -> Result<(), PostRepositoryError> {
        let mut posts = self.posts.write().await;
        if posts.iter().any(|stored| stored.id() == post.id()) {
            return Err(PostRepositoryError::query(format!(
                "post {} already exists",
                post.id()
            )));
        }
        posts.push(post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> Result<(), PostRepositoryError> {
        let mut posts = self.posts.write().await;
        let slot = posts
            .iter_mut()
            .find(|stored| stored.id() == post.id())
            .ok_or_else(|| PostRepositoryError::query(format!("post {} does not exist", post.id())))?;
        *slot = post.clone();
        Ok(())
    }

    async fn delete(&self, id: &Uuid) -> Result<(), PostRepositoryError> {
        self.posts.write().await.retain(|post| post.id() != *id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rstest::rstest;

    use super::*;
    use crate::domain::{PostDraft, UserId};

    fn post(title: &str) -> Post {
        Post::new(PostDraft {
            id: Uuid::new_v4(),
            author_id: UserId::random(),
            title: title.to_owned(),
            content: "body".to_owned(),
            created_at: Utc::now(),
        })
    }

    #[rstest]
    #[tokio::test]
    async fn round_trip_through_store() {
        let repo = InMemoryPostRepository::new();
        let mut stored = post("first");
        repo.insert(&stored).await.expect("insert");
        repo.insert(&post("second")).await.expect("insert");

        stored.revise("first, edited", "body");
        repo.update(&stored).await.expect("update");

        let titles: Vec<_> = repo
            .find_all()
            .await
            .expect("list")
            .iter()
            .map(|post| post.title().to_owned())
            .collect();
        assert_eq!(titles, vec!["first, edited", "second"]);

        repo.delete(&stored.id()).await.expect("delete");
        assert!(repo.find_by_id(&stored.id()).await.expect("find").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_unknown_post_is_a_query_error() {
        let repo = InMemoryPostRepository::new();
        let err = repo.update(&post("ghost")).await.expect_err("missing");
        assert!(matches!(err, PostRepositoryError::Query { .. }));
    }
}
