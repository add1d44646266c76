//! Request parsing helpers for inbound HTTP adapters.
//!
//! Malformed identifiers are transport errors, not business failures, so
//! they are returned as `domain::Error` (400) before any service is called.

use serde_json::json;
use uuid::Uuid;

use crate::domain::Error;

const INVALID_UUID_CODE: &str = "invalid_uuid";

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn invalid_uuid_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a valid UUID")).with_details(json!({
        "field": field,
        "value": value,
        "code": INVALID_UUID_CODE,
    }))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| invalid_uuid_error(field, value))
}

/// Parse an identifier the client may leave blank.
///
/// Blank input maps to the nil UUID so that the entity ruleset reports the
/// missing reference alongside any other violation.
pub(crate) fn parse_reference_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    if value.trim().is_empty() {
        return Ok(Uuid::nil());
    }
    parse_uuid(value.trim(), field)
}
