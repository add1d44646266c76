//! Tests for comment handlers.

use super::*;
use crate::domain::{AUTHENTICATION_REQUIRED_MESSAGE, PERMISSION_DENIED_MESSAGE};
use crate::domain::ports::{FIXTURE_ADMIN_ID, FIXTURE_WRITER_ID};
use crate::inbound::http::test_utils::{login_cookie, test_app};
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};
use uuid::Uuid;

const POST_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

async fn create<S, B>(app: &S, cookie: Option<Cookie<'static>>, body: Value) -> ServiceResponse<B>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: actix_web::body::MessageBody,
{
    let mut request = actix_test::TestRequest::post()
        .uri("/api/v1/comments")
        .set_json(body);
    if let Some(cookie) = cookie {
        request = request.cookie(cookie);
    }
    actix_test::call_service(app, request.to_request()).await
}

async fn seed_comment<S, B>(app: &S, cookie: Cookie<'static>) -> CommentResponse
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: actix_web::body::MessageBody,
{
    let response = create(
        app,
        Some(cookie),
        json!({ "postId": POST_ID, "content": "First!" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    actix_test::read_body_json(response).await
}

fn errors(value: &Value) -> Vec<&str> {
    value
        .get("errors")
        .and_then(Value::as_array)
        .expect("errors array")
        .iter()
        .filter_map(Value::as_str)
        .collect()
}

#[actix_web::test]
async fn create_returns_created_with_location() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;

    let response = create(
        &app,
        Some(cookie),
        json!({ "postId": POST_ID, "content": "Great post" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("location header");
    let body: CommentResponse = actix_test::read_body_json(response).await;
    assert_eq!(location, format!("/api/v1/comments/{}", body.id));
    assert_eq!(body.post_id, POST_ID);
    assert_eq!(body.author_id, FIXTURE_WRITER_ID);
    assert_eq!(body.content, "Great post");
}

#[actix_web::test]
async fn create_with_blank_content_lists_the_violation() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;

    let response = create(
        &app,
        Some(cookie),
        json!({ "postId": POST_ID, "content": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(errors(&value), vec!["content is required"]);
}

#[actix_web::test]
async fn create_with_empty_body_reports_every_violation() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;

    let response = create(&app, Some(cookie), json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        errors(&value),
        vec!["content is required", "post id is required"]
    );
}

#[actix_web::test]
async fn create_without_session_is_unauthorised() {
    let app = actix_test::init_service(test_app()).await;

    let response = create(&app, None, json!({ "postId": POST_ID, "content": "hi" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(errors(&value), vec![AUTHENTICATION_REQUIRED_MESSAGE]);
}

#[actix_web::test]
async fn create_with_malformed_post_id_is_a_bad_request() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;

    let response = create(
        &app,
        Some(cookie),
        json!({ "postId": "not-a-uuid", "content": "hi" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(
        value.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    assert_eq!(
        value.pointer("/details/field").and_then(Value::as_str),
        Some("postId")
    );
}

#[actix_web::test]
async fn anonymous_create_with_malformed_post_id_is_unauthorised() {
    let app = actix_test::init_service(test_app()).await;

    let response = create(&app, None, json!({ "postId": "not-a-uuid", "content": "hi" })).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(errors(&value), vec![AUTHENTICATION_REQUIRED_MESSAGE]);
}

#[rstest]
#[case::update(actix_test::TestRequest::put().set_json(json!({ "content": "hi" })))]
#[case::delete(actix_test::TestRequest::delete())]
#[actix_web::test]
async fn anonymous_mutation_of_malformed_id_is_unauthorised(
    #[case] request: actix_test::TestRequest,
) {
    let app = actix_test::init_service(test_app()).await;

    let response =
        actix_test::call_service(&app, request.uri("/api/v1/comments/abc").to_request()).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(errors(&value), vec![AUTHENTICATION_REQUIRED_MESSAGE]);
}

#[actix_web::test]
async fn get_returns_the_stored_comment() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;
    let seeded = seed_comment(&app, cookie).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: CommentResponse = actix_test::read_body_json(response).await;
    assert_eq!(body, seeded);
}

#[rstest]
#[case::unknown("9b2f0c3e-4d1a-4f6e-8a7b-1c2d3e4f5a6b", StatusCode::NOT_FOUND, "not_found")]
#[case::malformed("abc", StatusCode::BAD_REQUEST, "invalid_request")]
#[actix_web::test]
async fn get_rejects_unknown_or_malformed_ids(
    #[case] id: &str,
    #[case] status: StatusCode,
    #[case] code: &str,
) {
    let app = actix_test::init_service(test_app()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/comments/{id}"))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), status);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value.get("code").and_then(Value::as_str), Some(code));
}

#[actix_web::test]
async fn list_endpoints_filter_by_post() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;
    let seeded = seed_comment(&app, cookie.clone()).await;
    let other = create(
        &app,
        Some(cookie),
        json!({ "postId": Uuid::new_v4().to_string(), "content": "elsewhere" }),
    )
    .await;
    assert_eq!(other.status(), StatusCode::CREATED);

    let all: Vec<CommentResponse> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/v1/comments")
            .to_request(),
    )
    .await;
    let on_post: Vec<CommentResponse> = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/posts/{POST_ID}/comments"))
            .to_request(),
    )
    .await;

    assert_eq!(all.len(), 2);
    assert_eq!(on_post, vec![seeded]);
}

#[actix_web::test]
async fn update_by_author_returns_the_revision() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;
    let seeded = seed_comment(&app, cookie.clone()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .cookie(cookie)
            .set_json(json!({ "content": "Edited", "postId": Uuid::new_v4().to_string() }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: CommentResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.content, "Edited");
    assert_eq!(body.post_id, seeded.post_id);
    assert_eq!(body.created_at, seeded.created_at);
}

#[actix_web::test]
async fn update_by_another_member_is_forbidden() {
    let app = actix_test::init_service(test_app()).await;
    let writer = login_cookie(&app, "writer").await;
    let reader = login_cookie(&app, "reader").await;
    let seeded = seed_comment(&app, writer).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .cookie(reader)
            .set_json(json!({ "content": "Hijacked" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(errors(&value), vec![PERMISSION_DENIED_MESSAGE]);
}

#[actix_web::test]
async fn update_with_blank_content_is_a_validation_failure() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;
    let seeded = seed_comment(&app, cookie.clone()).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .cookie(cookie)
            .set_json(json!({ "content": "  " }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(errors(&value), vec!["content is required"]);
}

#[actix_web::test]
async fn update_of_missing_comment_is_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/comments/{}", Uuid::new_v4()))
            .cookie(cookie)
            .set_json(json!({ "content": "Edited" }))
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn admin_may_delete_any_comment() {
    let app = actix_test::init_service(test_app()).await;
    let writer = login_cookie(&app, "writer").await;
    let admin = login_cookie(&app, "admin").await;
    let seeded = seed_comment(&app, writer).await;
    assert_ne!(seeded.author_id, FIXTURE_ADMIN_ID);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .cookie(admin)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_of_missing_comment_is_not_found() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/comments/{}", Uuid::new_v4()))
            .cookie(cookie)
            .to_request(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn update_without_session_is_unauthorised() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;
    let seeded = seed_comment(&app, cookie).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .set_json(json!({ "content": "Edited anonymously" }))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(errors(&value), vec![AUTHENTICATION_REQUIRED_MESSAGE]);

    let stored: CommentResponse = actix_test::call_and_read_body_json(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .to_request(),
    )
    .await;
    assert_eq!(stored.content, "First!");
}

#[actix_web::test]
async fn delete_without_session_leaves_the_comment() {
    let app = actix_test::init_service(test_app()).await;
    let cookie = login_cookie(&app, "writer").await;
    let seeded = seed_comment(&app, cookie).await;

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::delete()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri(&format!("/api/v1/comments/{}", seeded.id))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}
