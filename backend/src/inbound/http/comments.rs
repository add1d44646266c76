//! Comment HTTP handlers.
//!
//! ```text
//! GET    /api/v1/comments
//! GET    /api/v1/comments/{id}
//! POST   /api/v1/comments        {"postId":"…","content":"…"}
//! PUT    /api/v1/comments/{id}   {"content":"…"}
//! DELETE /api/v1/comments/{id}
//! GET    /api/v1/posts/{id}/comments
//! ```
//!
//! Each mutating handler owns one [`Notifier`] for the request and reads it
//! back after the service call.

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{CommentChanges, MutationOutcome, NewComment};
use crate::domain::{Comment, Error, Notifier, Owned};
use crate::inbound::http::ApiResult;
use crate::inbound::http::notifications::{
    NotificationsBody, rejection_response, require_authenticated,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_reference_uuid, parse_uuid};

/// Request payload for creating a comment.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateCommentRequest {
    /// Post being commented on.
    #[schema(format = "uuid")]
    pub post_id: String,
    /// Body text.
    pub content: String,
}

/// Request payload for revising a comment.
///
/// Only the content is read; any other field in the body is ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct UpdateCommentRequest {
    /// Replacement body text.
    pub content: String,
}

/// Comment representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    /// Comment identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Parent post.
    #[schema(format = "uuid")]
    pub post_id: String,
    /// Member who wrote the comment.
    #[schema(format = "uuid")]
    pub author_id: String,
    /// Body text.
    pub content: String,
    /// RFC 3339 creation timestamp.
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Comment> for CommentResponse {
    fn from(value: Comment) -> Self {
        Self {
            id: value.id().to_string(),
            post_id: value.post_id().to_string(),
            author_id: value.author_id().to_string(),
            content: value.content().to_owned(),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

fn comment_location(comment: &Comment) -> String {
    format!("/api/v1/comments/{}", comment.id())
}

fn comment_not_found(id: &str) -> Error {
    Error::not_found(format!("comment {id} not found"))
}

fn into_responses(comments: Vec<Comment>) -> Vec<CommentResponse> {
    comments.into_iter().map(CommentResponse::from).collect()
}

/// List every comment, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/comments",
    responses(
        (status = 200, description = "All comments", body = Vec<CommentResponse>),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "listComments",
    security([])
)]
#[get("/comments")]
pub async fn list_comments(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<CommentResponse>>> {
    let comments = state.comments.list_all().await?;
    Ok(web::Json(into_responses(comments)))
}

/// Fetch one comment.
#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier (UUID)")),
    responses(
        (status = 200, description = "Comment found", body = CommentResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Comment not found", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "getComment",
    security([])
)]
#[get("/comments/{id}")]
pub async fn get_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CommentResponse>> {
    let raw = path.into_inner();
    let id = parse_uuid(&raw, FieldName::new("id"))?;
    let comment = state
        .comments
        .get_by_id(id)
        .await?
        .ok_or_else(|| comment_not_found(&raw))?;
    Ok(web::Json(CommentResponse::from(comment)))
}

/// List the comments attached to a post, oldest first.
///
/// An unknown post yields an empty list.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/comments",
    params(("id" = String, Path, description = "Post identifier (UUID)")),
    responses(
        (status = 200, description = "Comments on the post", body = Vec<CommentResponse>),
        (status = 400, description = "Malformed identifier", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "listPostComments",
    security([])
)]
#[get("/posts/{id}/comments")]
pub async fn list_post_comments(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<CommentResponse>>> {
    let post_id = parse_uuid(&path.into_inner(), FieldName::new("id"))?;
    let comments = state.comments.list_for_post(post_id).await?;
    Ok(web::Json(into_responses(comments)))
}

/// Create a comment authored by the session principal.
#[utoipa::path(
    post,
    path = "/api/v1/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse,
            headers(("Location" = String, description = "URI of the new comment"))),
        (status = 400, description = "Validation failed", body = NotificationsBody),
        (status = 401, description = "Authentication required", body = NotificationsBody),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "createComment",
    security(("SessionCookie" = []))
)]
#[post("/comments")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CreateCommentRequest>,
) -> ApiResult<HttpResponse> {
    let principal = match require_authenticated(session.principal()?) {
        Ok(principal) => principal,
        Err(rejection) => return Ok(rejection),
    };
    let CreateCommentRequest { post_id, content } = payload.into_inner();
    let post_id = parse_reference_uuid(&post_id, FieldName::new("postId"))?;

    let mut notifier = Notifier::new();
    let created = state
        .comments
        .add(
            &mut notifier,
            Some(&principal),
            NewComment { post_id, content },
        )
        .await?;

    match created {
        Some(comment) if !notifier.has_notification() => Ok(HttpResponse::Created()
            .insert_header((header::LOCATION, comment_location(&comment)))
            .json(CommentResponse::from(comment))),
        _ => Ok(rejection_response(notifier)),
    }
}

/// Revise a comment owned by the session principal.
///
/// Administrators may revise any comment.
#[utoipa::path(
    put,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier (UUID)")),
    request_body = UpdateCommentRequest,
    responses(
        (status = 200, description = "Comment revised", body = CommentResponse),
        (status = 400, description = "Validation failed", body = NotificationsBody),
        (status = 401, description = "Authentication required", body = NotificationsBody),
        (status = 403, description = "Not the author", body = NotificationsBody),
        (status = 404, description = "Comment not found", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "updateComment",
    security(("SessionCookie" = []))
)]
#[put("/comments/{id}")]
pub async fn update_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<UpdateCommentRequest>,
) -> ApiResult<HttpResponse> {
    let principal = match require_authenticated(session.principal()?) {
        Ok(principal) => principal,
        Err(rejection) => return Ok(rejection),
    };
    let raw = path.into_inner();
    let id = parse_uuid(&raw, FieldName::new("id"))?;

    let mut notifier = Notifier::new();
    let outcome = state
        .comments
        .update(
            &mut notifier,
            Some(&principal),
            id,
            CommentChanges {
                content: payload.into_inner().content,
            },
        )
        .await?;

    match outcome.map(CommentResponse::from) {
        MutationOutcome::Committed(body) => Ok(HttpResponse::Ok().json(body)),
        MutationOutcome::NotFound => Err(comment_not_found(&raw)),
        MutationOutcome::Rejected => Ok(rejection_response(notifier)),
    }
}

/// Delete a comment owned by the session principal.
///
/// Administrators may delete any comment.
#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment identifier (UUID)")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Authentication required", body = NotificationsBody),
        (status = 403, description = "Not the author", body = NotificationsBody),
        (status = 404, description = "Comment not found", body = ErrorSchema)
    ),
    tags = ["comments"],
    operation_id = "deleteComment",
    security(("SessionCookie" = []))
)]
#[delete("/comments/{id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let principal = match require_authenticated(session.principal()?) {
        Ok(principal) => principal,
        Err(rejection) => return Ok(rejection),
    };
    let raw = path.into_inner();
    let id = parse_uuid(&raw, FieldName::new("id"))?;

    let mut notifier = Notifier::new();
    match state
        .comments
        .remove(&mut notifier, Some(&principal), id)
        .await?
    {
        MutationOutcome::Committed(()) => Ok(HttpResponse::NoContent().finish()),
        MutationOutcome::NotFound => Err(comment_not_found(&raw)),
        MutationOutcome::Rejected => Ok(rejection_response(notifier)),
    }
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
