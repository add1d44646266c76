//! Comment domain service.
//!
//! Implements the [`CommentService`] driving port on top of a
//! [`CommentRepository`]. Every mutation walks the same gate sequence:
//! principal, existence, ownership, validation, persistence. The first
//! failing gate leaves a notification behind and stops the call.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::ports::{
    CommentChanges, CommentRepository, CommentRepositoryError, CommentService, MutationOutcome,
    NewComment,
};
use crate::domain::{
    Comment, CommentDraft, CommentRuleset, Error, Notifier, Principal, ensure_owner_or_admin,
    require_principal, run_validation,
};

fn map_repository_error(error: CommentRepositoryError) -> Error {
    match error {
        CommentRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("comment repository unavailable: {message}"))
        }
        CommentRepositoryError::Query { message } => {
            Error::internal(format!("comment repository error: {message}"))
        }
    }
}

/// Comment service backed by a repository port and a clock.
#[derive(Clone)]
pub struct CommentManager<R> {
    comment_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> CommentManager<R> {
    /// Create a service that stamps new comments with `clock`.
    pub fn new(comment_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self {
            comment_repo,
            clock,
        }
    }
}

impl<R> CommentManager<R>
where
    R: CommentRepository,
{
    async fn load(&self, id: Uuid) -> Result<Option<Comment>, Error> {
        self.comment_repo
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> CommentService for CommentManager<R>
where
    R: CommentRepository,
{
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Comment>, Error> {
        self.load(id).await
    }

    async fn list_all(&self) -> Result<Vec<Comment>, Error> {
        self.comment_repo
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, Error> {
        self.comment_repo
            .find_by_post(&post_id)
            .await
            .map_err(map_repository_error)
    }

    async fn add(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        comment: NewComment,
    ) -> Result<Option<Comment>, Error> {
        let Some(principal) = require_principal(notifier, actor) else {
            info!("comment creation rejected: no principal");
            return Ok(None);
        };

        let comment = Comment::new(CommentDraft {
            id: Uuid::new_v4(),
            post_id: comment.post_id,
            author_id: principal.user_id().clone(),
            content: comment.content,
            created_at: self.clock.utc(),
        });
        if !run_validation(notifier, &CommentRuleset, &comment) {
            info!(
                violations = notifier.list_notifications().len(),
                "comment creation rejected by validation"
            );
            return Ok(None);
        }

        self.comment_repo
            .insert(&comment)
            .await
            .map_err(map_repository_error)?;
        debug!(comment_id = %comment.id(), post_id = %comment.post_id(), "comment created");
        Ok(Some(comment))
    }

    async fn update(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        id: Uuid,
        changes: CommentChanges,
    ) -> Result<MutationOutcome<Comment>, Error> {
        let Some(principal) = require_principal(notifier, actor) else {
            return Ok(MutationOutcome::Rejected);
        };
        let Some(mut comment) = self.load(id).await? else {
            return Ok(MutationOutcome::NotFound);
        };
        if !ensure_owner_or_admin(notifier, &comment, principal) {
            info!(comment_id = %id, user_id = %principal.user_id(), "comment update denied");
            return Ok(MutationOutcome::Rejected);
        }

        comment.revise(changes.content);
        if !run_validation(notifier, &CommentRuleset, &comment) {
            info!(
                comment_id = %id,
                violations = notifier.list_notifications().len(),
                "comment update rejected by validation"
            );
            return Ok(MutationOutcome::Rejected);
        }

        self.comment_repo
            .update(&comment)
            .await
            .map_err(map_repository_error)?;
        debug!(comment_id = %id, "comment updated");
        Ok(MutationOutcome::Committed(comment))
    }

    async fn remove(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        id: Uuid,
    ) -> Result<MutationOutcome<()>, Error> {
        let Some(principal) = require_principal(notifier, actor) else {
            return Ok(MutationOutcome::Rejected);
        };
        let Some(comment) = self.load(id).await? else {
            return Ok(MutationOutcome::NotFound);
        };
        if !ensure_owner_or_admin(notifier, &comment, principal) {
            info!(comment_id = %id, user_id = %principal.user_id(), "comment removal denied");
            return Ok(MutationOutcome::Rejected);
        }

        self.comment_repo
            .delete(&id)
            .await
            .map_err(map_repository_error)?;
        debug!(comment_id = %id, "comment removed");
        Ok(MutationOutcome::Committed(()))
    }
}

#[cfg(test)]
#[path = "comment_service_tests.rs"]
mod tests;
