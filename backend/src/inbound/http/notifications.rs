//! Rendering of business failures collected by the request [`Notifier`].
//!
//! The status follows the highest-precedence notification kind:
//! authentication (401) over permission (403) over validation (400). The
//! body lists every message in the order it was reported.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{AUTHENTICATION_REQUIRED_MESSAGE, NotificationKind, Notifier, Principal};

/// Response body for requests rejected by a business rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NotificationsBody {
    /// Human-readable failure messages, in report order.
    #[schema(example = json!(["content is required"]))]
    pub errors: Vec<String>,
}

fn status_for(kind: NotificationKind) -> StatusCode {
    match kind {
        NotificationKind::Validation => StatusCode::BAD_REQUEST,
        NotificationKind::AuthenticationRequired => StatusCode::UNAUTHORIZED,
        NotificationKind::PermissionDenied => StatusCode::FORBIDDEN,
    }
}

/// Build the rejection response for a notifier that holds at least one entry.
///
/// An empty notifier is rendered as `400` with no messages; callers only
/// reach this path after a service reported a rejection.
pub fn rejection_response(notifier: Notifier) -> HttpResponse {
    let status = notifier
        .dominant_kind()
        .map_or(StatusCode::BAD_REQUEST, status_for);
    let errors = notifier.into_messages();
    debug!(status = status.as_u16(), count = errors.len(), "request rejected");
    HttpResponse::build(status).json(NotificationsBody { errors })
}

/// Gate a mutating route on the session principal.
///
/// Runs before any path or body identifier is parsed, so anonymous callers
/// always receive `401` with the authentication message.
pub fn require_authenticated(principal: Option<Principal>) -> Result<Principal, HttpResponse> {
    principal.ok_or_else(|| {
        let mut notifier = Notifier::new();
        notifier.notify(
            NotificationKind::AuthenticationRequired,
            AUTHENTICATION_REQUIRED_MESSAGE,
        );
        rejection_response(notifier)
    })
}
