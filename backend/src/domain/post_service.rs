//! Post domain service.
//!
//! Same gate sequence as the comment service; posts expose title and
//! content as their only mutable fields.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::ports::{
    MutationOutcome, NewPost, PostChanges, PostRepository, PostRepositoryError, PostService,
};
use crate::domain::{
    Error, Notifier, Post, PostDraft, PostRuleset, Principal, ensure_owner_or_admin,
    require_principal, run_validation,
};

fn map_repository_error(error: PostRepositoryError) -> Error {
    match error {
        PostRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("post repository unavailable: {message}"))
        }
        PostRepositoryError::Query { message } => {
            Error::internal(format!("post repository error: {message}"))
        }
    }
}

/// Post service backed by a repository port and a clock.
#[derive(Clone)]
pub struct PostManager<R> {
    post_repo: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> PostManager<R> {
    /// Create a service that stamps new posts with `clock`.
    pub fn new(post_repo: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { post_repo, clock }
    }
}

impl<R> PostManager<R>
where
    R: PostRepository,
{
    async fn load(&self, id: Uuid) -> Result<Option<Post>, Error> {
        self.post_repo
            .find_by_id(&id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<R> PostService for PostManager<R>
where
    R: PostRepository,
{
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Post>, Error> {
        self.load(id).await
    }

    async fn list_all(&self) -> Result<Vec<Post>, Error> {
        self.post_repo
            .find_all()
            .await
            .map_err(map_repository_error)
    }

    async fn add(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        post: NewPost,
    ) -> Result<Option<Post>, Error> {
        let Some(principal) = require_principal(notifier, actor) else {
            info!("post creation rejected: no principal");
            return Ok(None);
        };

        let post = Post::new(PostDraft {
            id: Uuid::new_v4(),
            author_id: principal.user_id().clone(),
            title: post.title,
            content: post.content,
            created_at: self.clock.utc(),
        });
        if !run_validation(notifier, &PostRuleset, &post) {
            info!(
                violations = notifier.list_notifications().len(),
                "post creation rejected by validation"
            );
            return Ok(None);
        }

        self.post_repo
            .insert(&post)
            .await
            .map_err(map_repository_error)?;
        debug!(post_id = %post.id(), "post created");
        Ok(Some(post))
    }

    async fn update(
        &self,
        notifier: &mut Notifier,
        actor: Option<&Principal>,
        id: Uuid,
        changes: PostChanges,
    ) -> Result<MutationOutcome<Post>, Error> {
        let Some(principal) = require_principal(notifier, actor) else {
            return Ok(MutationOutcome::Rejected);
        };
        let Some(mut post) = self.load(id).await? else {
            return Ok(MutationOutcome::NotFound);
        };
        if !ensure_owner_or_admin(notifier, &post, principal) {
            info!(post_id = %id, user_id = %principal.user_id(), "post update denied");
            return Ok(MutationOutcome::Rejected);
        }

        post.revise(changes.title, changes.content);
        if !run_validation(notifier, &PostRuleset, &post) {
            info!(
                post_id = %id,
                violations = notifier.list_notifications().len(),
                "post update rejected by validation"
            );
            return Ok(MutationOutcome::Rejected);
        }

        self.post_repo
            .update(&post)
            .await
            .map_err(map_repository_error)?;
        debug!(post_id = %id, "post updated");
        Ok(MutationOutcome::Committed(post))
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
        let Some(post) = self.load(id).await? else {
            return Ok(MutationOutcome::NotFound);
        };
        if !ensure_owner_or_admin(notifier, &post, principal) {
            info!(post_id = %id, user_id = %principal.user_id(), "post removal denied");
            return Ok(MutationOutcome::Rejected);
        }

        self.post_repo
            .delete(&id)
            .await
            .map_err(map_repository_error)?;
        debug!(post_id = %id, "post removed");
        Ok(MutationOutcome::Committed(()))
    }
}

#[cfg(test)]
#[path = "post_service_tests.rs"]
mod tests;
