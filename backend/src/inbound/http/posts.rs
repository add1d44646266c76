//! Post HTTP handlers.
//!
//! ```text
//! GET    /api/v1/posts
//! GET    /api/v1/posts/{id}
//! POST   /api/v1/posts        {"title":"…","content":"…"}
//! PUT    /api/v1/posts/{id}   {"title":"…","content":"…"}
//! DELETE /api/v1/posts/{id}
//! ```

use actix_web::http::header;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{MutationOutcome, NewPost, PostChanges};
use crate::domain::{Error, Notifier, Owned, Post};
use crate::inbound::http::ApiResult;
use crate::inbound::http::notifications::{
    NotificationsBody, rejection_response, require_authenticated,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_uuid};

/// Request payload for creating or revising a post.
///
/// Missing fields deserialise as empty strings so the ruleset reports them.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct PostRequest {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
}

/// Post representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    /// Post identifier.
    #[schema(format = "uuid")]
    pub id: String,
    /// Member who published the post.
    #[schema(format = "uuid")]
    pub author_id: String,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// RFC 3339 creation timestamp.
    #[schema(format = "date-time")]
    pub created_at: String,
}

impl From<Post> for PostResponse {
    fn from(value: Post) -> Self {
        Self {
            id: value.id().to_string(),
            author_id: value.author_id().to_string(),
            title: value.title().to_owned(),
            content: value.content().to_owned(),
            created_at: value.created_at().to_rfc3339(),
        }
    }
}

fn post_not_found(id: &str) -> Error {
    Error::not_found(format!("post {id} not found"))
}

/// List every post, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/posts",
    responses(
        (status = 200, description = "All posts", body = Vec<PostResponse>),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "listPosts",
    security([])
)]
#[get("/posts")]
pub async fn list_posts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<PostResponse>>> {
    let posts = state.posts.list_all().await?;
    Ok(web::Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Fetch one post.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    params(("id" = String, Path, description = "Post identifier (UUID)")),
    responses(
        (status = 200, description = "Post found", body = PostResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Post not found", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "getPost",
    security([])
)]
#[get("/posts/{id}")]
pub async fn get_post(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PostResponse>> {
    let raw = path.into_inner();
    let id = parse_uuid(&raw, FieldName::new("id"))?;
    let post = state
        .posts
        .get_by_id(id)
        .await?
        .ok_or_else(|| post_not_found(&raw))?;
    Ok(web::Json(PostResponse::from(post)))
}

/// Publish a post authored by the session principal.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    request_body = PostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse,
            headers(("Location" = String, description = "URI of the new post"))),
        (status = 400, description = "Validation failed", body = NotificationsBody),
        (status = 401, description = "Authentication required", body = NotificationsBody),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "createPost",
    security(("SessionCookie" = []))
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<PostRequest>,
) -> ApiResult<HttpResponse> {
    let principal = match require_authenticated(session.principal()?) {
        Ok(principal) => principal,
        Err(rejection) => return Ok(rejection),
    };
    let PostRequest { title, content } = payload.into_inner();

    let mut notifier = Notifier::new();
    let created = state
        .posts
        .add(&mut notifier, Some(&principal), NewPost { title, content })
        .await?;

    match created {
        Some(post) if !notifier.has_notification() => Ok(HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/api/v1/posts/{}", post.id())))
            .json(PostResponse::from(post))),
        _ => Ok(rejection_response(notifier)),
    }
}

/// Revise the title and content of a post.
///
/// Only the author or an administrator may do this.
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    params(("id" = String, Path, description = "Post identifier (UUID)")),
    request_body = PostRequest,
    responses(
        (status = 200, description = "Post revised", body = PostResponse),
        (status = 400, description = "Validation failed", body = NotificationsBody),
        (status = 401, description = "Authentication required", body = NotificationsBody),
        (status = 403, description = "Not the author", body = NotificationsBody),
        (status = 404, description = "Post not found", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "updatePost",
    security(("SessionCookie" = []))
)]
#[put("/posts/{id}")]
pub async fn update_post(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<PostRequest>,
) -> ApiResult<HttpResponse> {
    let principal = match require_authenticated(session.principal()?) {
        Ok(principal) => principal,
        Err(rejection) => return Ok(rejection),
    };
    let raw = path.into_inner();
    let id = parse_uuid(&raw, FieldName::new("id"))?;
    let PostRequest { title, content } = payload.into_inner();

    let mut notifier = Notifier::new();
    let outcome = state
        .posts
        .update(
            &mut notifier,
            Some(&principal),
            id,
            PostChanges { title, content },
        )
        .await?;

    match outcome.map(PostResponse::from) {
        MutationOutcome::Committed(body) => Ok(HttpResponse::Ok().json(body)),
        MutationOutcome::NotFound => Err(post_not_found(&raw)),
        MutationOutcome::Rejected => Ok(rejection_response(notifier)),
    }
}

/// Delete a post.
///
/// Comments attached to the post are left in place.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    params(("id" = String, Path, description = "Post identifier (UUID)")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Authentication required", body = NotificationsBody),
        (status = 403, description = "Not the author", body = NotificationsBody),
        (status = 404, description = "Post not found", body = ErrorSchema)
    ),
    tags = ["posts"],
    operation_id = "deletePost",
    security(("SessionCookie" = []))
)]
#[delete("/posts/{id}")]
pub async fn delete_post(
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
        .posts
        .remove(&mut notifier, Some(&principal), id)
        .await?
    {
        MutationOutcome::Committed(()) => Ok(HttpResponse::NoContent().finish()),
        MutationOutcome::NotFound => Err(post_not_found(&raw)),
        MutationOutcome::Rejected => Ok(rejection_response(notifier)),
    }
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
