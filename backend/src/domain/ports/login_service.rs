//! Driving port for login.
//!
//! Identity management is outside this service. The port only turns
//! credentials into a [`Principal`] so the HTTP adapter can open a session.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, Principal, UserId};

/// Fixture administrator account id.
pub const FIXTURE_ADMIN_ID: &str = "123e4567-e89b-12d3-a456-426614174000";
/// Fixture non-admin writer account id.
pub const FIXTURE_WRITER_ID: &str = "11111111-1111-1111-1111-111111111111";
/// Fixture non-admin reader account id.
pub const FIXTURE_READER_ID: &str = "22222222-2222-2222-2222-222222222222";

const FIXTURE_PASSWORD: &str = "password";

/// Use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Validate credentials and return the authenticated principal.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Principal, Error>;
}

/// In-memory authenticator with three development accounts.
///
/// `admin`, `writer` and `reader` all use the password `password`; only
/// `admin` carries the administrator role.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureLoginService;

#[async_trait]
impl LoginService for FixtureLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Principal, Error> {
        let (raw_id, is_admin) = match credentials.username() {
            "admin" => (FIXTURE_ADMIN_ID, true),
            "writer" => (FIXTURE_WRITER_ID, false),
            "reader" => (FIXTURE_READER_ID, false),
            _ => return Err(Error::unauthorized("invalid credentials")),
        };
        if credentials.password() != FIXTURE_PASSWORD {
            return Err(Error::unauthorized("invalid credentials"));
        }
        let user_id = UserId::new(raw_id)
            .map_err(|err| Error::internal(format!("invalid fixture user id: {err}")))?;
        Ok(Principal::new(user_id, is_admin))
    }
}
