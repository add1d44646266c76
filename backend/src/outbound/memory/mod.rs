//! In-process repositories.
//!
//! Entities live in insertion-ordered vectors behind a `tokio` read/write
//! lock. State is lost when the process exits; durable storage is expected
//! to arrive as another adapter behind the same ports.

mod comment_repository;
mod post_repository;

pub use comment_repository::InMemoryCommentRepository;
pub use post_repository::InMemoryPostRepository;
