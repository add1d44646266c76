//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::DefaultClock;

use crate::domain::ports::{CommentService, FixtureLoginService, LoginService, PostService};
use crate::domain::{CommentManager, PostManager};
use crate::outbound::memory::{InMemoryCommentRepository, InMemoryPostRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential check for `POST /login`.
    pub login: Arc<dyn LoginService>,
    /// Comment use-cases.
    pub comments: Arc<dyn CommentService>,
    /// Post use-cases.
    pub posts: Arc<dyn PostService>,
}

impl HttpState {
    /// Construct state from explicit port implementations.
    pub fn new(
        login: Arc<dyn LoginService>,
        comments: Arc<dyn CommentService>,
        posts: Arc<dyn PostService>,
    ) -> Self {
        Self {
            login,
            comments,
            posts,
        }
    }

    /// State backed by empty in-memory repositories, the system clock and the
    /// fixture login accounts.
    ///
    /// # Examples
    /// ```
    /// use blog_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::in_memory();
    /// let _posts = state.posts.clone();
    /// ```
    pub fn in_memory() -> Self {
        let clock = Arc::new(DefaultClock);
        Self::new(
            Arc::new(FixtureLoginService),
            Arc::new(CommentManager::new(
                Arc::new(InMemoryCommentRepository::new()),
                clock.clone(),
            )),
            Arc::new(PostManager::new(
                Arc::new(InMemoryPostRepository::new()),
                clock,
            )),
        )
    }
}
