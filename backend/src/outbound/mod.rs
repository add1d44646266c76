//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local repositories backing the blog entities.
//!
//! Adapters are thin translators between domain types and storage. They
//! contain no business logic.

pub mod memory;
