//! Driving port for the post use-cases.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, Notifier, Post, Principal};

use super::MutationOutcome;

/// Client-supplied fields for a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
}

/// Client-supplied fields for a post revision. Both fields are replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    /// Replacement headline.
    pub title: String,
    /// Replacement body text.
    pub content: String,
}

/// Use-case port for posts.
///
/// Follows the same notifier contract as
/// [`CommentService`](super::CommentService).
#[async_trait]
pub trait PostService: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Post>, Error>;

    async fn list_all(&self) -> Result<Vec<Post>, Error>;

    async fn add(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        post: NewPost,
    ) -> Result<Option<Post>, Error>;

    async fn update(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<MutationOutcome<Post>, Error>;

    async fn remove(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        id: Uuid,
    ) -> Result<MutationOutcome<()>, Error>;
}
