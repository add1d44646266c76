//! Domain primitives, aggregates and services.
//!
//! Purpose: define the blog entities, the request-scoped notification
//! pipeline and the services that enforce identity, ownership and shape
//! rules. Nothing here depends on actix-web.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic infrastructure error payload.
//! - Notifier / Notification / NotificationKind: business failure collector.
//! - Ruleset / run_validation: validation aggregator.
//! - Comment / Post: entities with their rulesets.
//! - CommentManager / PostManager: driving port implementations.

pub mod auth;
pub mod authorization;
pub mod comment;
pub mod comment_service;
pub mod error;
pub mod notification;
pub mod ports;
pub mod post;
pub mod post_service;
pub mod principal;
pub mod trace_id;
pub mod validation;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::authorization::{
    AUTHENTICATION_REQUIRED_MESSAGE, Owned, PERMISSION_DENIED_MESSAGE, ensure_owner_or_admin,
    is_owner_or_admin, require_principal,
};
pub use self::comment::{COMMENT_CONTENT_MAX, Comment, CommentDraft, CommentRuleset};
pub use self::comment_service::CommentManager;
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::notification::{Notification, NotificationKind, Notifier};
pub use self::post::{POST_TITLE_MAX, Post, PostDraft, PostRuleset};
pub use self::post_service::PostManager;
pub use self::principal::{Principal, UserId, UserIdValidationError};
pub use self::trace_id::TraceId;
pub use self::validation::{RuleViolation, Ruleset, run_validation};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use blog_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::forbidden("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
