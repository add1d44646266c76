//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories) are automocked in tests. Driving ports
//! (services) are implemented in `domain` and consumed by the HTTP adapter.

mod macros;
pub(crate) use macros::define_port_error;

mod comment_repository;
mod comment_service;
mod login_service;
mod mutation_outcome;
mod post_repository;
mod post_service;

#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use comment_repository::{CommentRepository, CommentRepositoryError};
pub use comment_service::{CommentChanges, CommentService, NewComment};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{
    FIXTURE_ADMIN_ID, FIXTURE_READER_ID, FIXTURE_WRITER_ID, FixtureLoginService, LoginService,
};
pub use mutation_outcome::MutationOutcome;
#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostRepository, PostRepositoryError};
pub use post_service::{NewPost, PostChanges, PostService};
