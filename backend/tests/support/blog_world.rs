//! Shared world for behaviour tests against the `/api/v1` surface.
//!
//! Each request rebuilds the application over the same `HttpState` and
//! session key, so state and cookies survive between steps. Requests are
//! driven on an actix `SystemRunner` owned by the world.

use std::cell::RefCell;
use std::rc::Rc;

use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{Method, header};
use actix_web::rt::{System, SystemRunner};
use actix_web::{App, test as actix_test, web};
use blog_backend::Trace;
use blog_backend::domain::TRACE_ID_HEADER;
use blog_backend::inbound::http::{comments, login, posts, state::HttpState};
use rstest::fixture;
use serde_json::{Value, json};

pub(crate) struct BlogWorld {
    pub(crate) runner: SystemRunner,
    pub(crate) state: HttpState,
    pub(crate) key: Key,
    pub(crate) cookie: Option<Cookie<'static>>,
    pub(crate) last_status: Option<u16>,
    pub(crate) last_body: Option<Value>,
    pub(crate) last_location: Option<String>,
    pub(crate) last_trace_id: Option<String>,
    pub(crate) post_id: Option<String>,
    pub(crate) comment_id: Option<String>,
    pub(crate) comment_content: Option<String>,
}

pub(crate) type SharedWorld = Rc<RefCell<BlogWorld>>;

pub(crate) struct WorldFixture {
    world: SharedWorld,
}

impl WorldFixture {
    pub(crate) fn world(&self) -> SharedWorld {
        self.world.clone()
    }
}

#[fixture]
pub(crate) fn world() -> WorldFixture {
    let world = Rc::new(RefCell::new(BlogWorld {
        runner: System::new(),
        state: HttpState::in_memory(),
        key: Key::generate(),
        cookie: None,
        last_status: None,
        last_body: None,
        last_location: None,
        last_trace_id: None,
        post_id: None,
        comment_id: None,
        comment_content: None,
    }));
    WorldFixture { world }
}

fn build_app(
    state: HttpState,
    key: Key,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".to_owned())
        .cookie_path("/".to_owned())
        .cookie_secure(false)
        .build();

    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(
            web::scope("/api/v1")
                .wrap(session)
                .service(login::login)
                .service(login::logout)
                .service(posts::list_posts)
                .service(posts::create_post)
                .service(comments::list_post_comments)
                .service(posts::get_post)
                .service(posts::update_post)
                .service(posts::delete_post)
                .service(comments::list_comments)
                .service(comments::create_comment)
                .service(comments::get_comment)
                .service(comments::update_comment)
                .service(comments::delete_comment),
        )
}

/// Outcome of one request, as seen by the client.
pub(crate) struct Exchange {
    pub(crate) status: u16,
    pub(crate) location: Option<String>,
    pub(crate) trace_id: Option<String>,
    pub(crate) cookie: Option<Cookie<'static>>,
    pub(crate) body: Option<Value>,
}

fn header_value(response: &ServiceResponse, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Send a request carrying the current session cookie.
pub(crate) fn send(
    world: &SharedWorld,
    method: Method,
    path: &str,
    payload: Option<Value>,
) -> Exchange {
    let ctx = world.borrow();
    let state = ctx.state.clone();
    let key = ctx.key.clone();
    let cookie = ctx.cookie.clone();
    let path = path.to_owned();

    ctx.runner.block_on(async move {
        let app = actix_test::init_service(build_app(state, key)).await;
        let mut request = actix_test::TestRequest::default()
            .method(method)
            .uri(&path);
        if let Some(cookie) = cookie {
            request = request.cookie(cookie);
        }
        if let Some(payload) = payload {
            request = request.set_json(payload);
        }

        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status().as_u16();
        let location = header_value(&response, header::LOCATION.as_str());
        let trace_id = header_value(&response, TRACE_ID_HEADER);
        let cookie = response
            .response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(Cookie::into_owned);
        let bytes = actix_test::read_body(response).await;
        let body = (!bytes.is_empty())
            .then(|| serde_json::from_slice(&bytes).expect("response body is JSON"));

        Exchange {
            status,
            location,
            trace_id,
            cookie,
            body,
        }
    })
}

/// Send a request and record its outcome as the latest response.
pub(crate) fn perform(world: &SharedWorld, method: Method, path: &str, payload: Option<Value>) {
    let exchange = send(world, method, path, payload);
    let mut ctx = world.borrow_mut();
    ctx.last_status = Some(exchange.status);
    ctx.last_location = exchange.location;
    ctx.last_trace_id = exchange.trace_id;
    ctx.last_body = exchange.body;
}

/// Log in as a fixture account and keep its session cookie.
pub(crate) fn sign_in(world: &SharedWorld, username: &str) {
    let exchange = send(
        world,
        Method::POST,
        "/api/v1/login",
        Some(json!({ "username": username, "password": "password" })),
    );
    assert_eq!(exchange.status, 200, "login as {username}");
    world.borrow_mut().cookie = Some(exchange.cookie.expect("session cookie"));
}

/// Latest response status.
pub(crate) fn last_status(world: &SharedWorld) -> Option<u16> {
    world.borrow().last_status
}

/// Messages from the latest `{"errors": [...]}` body.
pub(crate) fn last_errors(world: &SharedWorld) -> Vec<String> {
    let ctx = world.borrow();
    ctx.last_body
        .as_ref()
        .and_then(|body| body.get("errors"))
        .and_then(Value::as_array)
        .expect("errors array")
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect()
}

/// String field from the latest response body.
pub(crate) fn last_field(world: &SharedWorld, field: &str) -> Option<String> {
    world
        .borrow()
        .last_body
        .as_ref()
        .and_then(|body| body.get(field))
        .and_then(Value::as_str)
        .map(str::to_owned)
}
