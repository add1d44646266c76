//! Driving port for the comment use-cases.
//!
//! Business failures (missing identity, denied ownership, invalid content)
//! are reported through the caller's [`Notifier`]. Only infrastructure
//! failures surface as `Err`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Error, Notifier, Principal};

use super::MutationOutcome;

/// Client-supplied fields for a new comment.
///
/// Identity, author and timestamp are assigned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    /// Post being commented on; nil when the client sent none.
    pub post_id: Uuid,
    /// Body text.
    pub content: String,
}

/// Client-supplied fields for a comment revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentChanges {
    /// Replacement body text.
    pub content: String,
}

/// Use-case port for comments.
#[async_trait]
pub trait CommentService: Send + Sync {
    /// Fetch one comment. Absence is not a business failure.
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Comment>, Error>;

    /// Fetch every comment, oldest first.
    async fn list_all(&self) -> Result<Vec<Comment>, Error>;

    /// Fetch the comments attached to `post_id`, oldest first.
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, Error>;

    /// Create a comment authored by `actor`.
    ///
    /// Returns the stored comment, or `None` when a rule rejected the request.
    async fn add(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        comment: NewComment,
    ) -> Result<Option<Comment>, Error>;

    /// Revise the content of an existing comment.
    async fn update(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        id: Uuid,
        changes: CommentChanges,
    ) -> Result<MutationOutcome<Comment>, Error>;

    /// Delete an existing comment.
    async fn remove(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        id: Uuid,
    ) -> Result<MutationOutcome<()>, Error>;
}
