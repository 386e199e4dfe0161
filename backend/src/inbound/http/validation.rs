//! Request validation for the users endpoints.
//!
//! Every check here runs before the store is touched. Failures become
//! `invalid_request` errors whose details name the offending field:
//! `{"field": .., "code": "missing_field" | "invalid_parameter", "value"?: ..}`.

use serde_json::{Value, json};

use crate::domain::{Error, ListLimit, UserId, UserName, UserValidationError};

/// Validation error codes reported in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidParameter,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidParameter => "invalid_parameter",
        }
    }
}

/// Request field named in validation details.
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

pub(crate) const LIMIT: FieldName = FieldName::new("limit");
pub(crate) const ID: FieldName = FieldName::new("id");
pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const BODY: FieldName = FieldName::new("body");
pub(crate) const QUERY: FieldName = FieldName::new("query");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    Error::invalid_request(format!("missing required field: {name}")).with_details(json!({
        "field": name,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_parameter_error(
    field: FieldName,
    message: impl Into<String>,
    value: Option<&str>,
) -> Error {
    let mut details = json!({
        "field": field.as_str(),
        "code": ErrorCode::InvalidParameter.as_str(),
    });
    if let Some(value) = value {
        details["value"] = Value::from(value);
    }
    Error::invalid_request(message).with_details(details)
}

/// Parse a base-10 signed integer with no sign prefix other than `-` and
/// no surrounding whitespace.
fn parse_strict_i64(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Validate the optional `limit` query parameter.
pub(crate) fn validate_limit(raw: Option<&str>, default: ListLimit) -> Result<ListLimit, Error> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value = parse_strict_i64(raw).ok_or_else(|| {
        invalid_parameter_error(LIMIT, "limit must be an integer", Some(raw))
    })?;
    ListLimit::new(value).map_err(|_| {
        invalid_parameter_error(LIMIT, "limit must not be negative", Some(raw))
    })
}

/// Validate the `:id` path segment.
pub(crate) fn validate_id(raw: &str) -> Result<UserId, Error> {
    parse_strict_i64(raw)
        .map(UserId::new)
        .ok_or_else(|| invalid_parameter_error(ID, "id must be an integer", Some(raw)))
}

/// Body encodings the users endpoints decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyFormat {
    Json,
    Form,
    /// Any other or absent media type. Such bodies carry no fields.
    Other,
}

impl BodyFormat {
    /// Pick the decoder for a media type essence such as `application/json`.
    pub(crate) fn from_content_type(content_type: &str) -> Self {
        if content_type.eq_ignore_ascii_case("application/json") {
            Self::Json
        } else if content_type.eq_ignore_ascii_case("application/x-www-form-urlencoded") {
            Self::Form
        } else {
            Self::Other
        }
    }
}

fn json_name(body: &[u8]) -> Result<Option<String>, Error> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| invalid_parameter_error(BODY, "request body must be a JSON object", None))?;
    let Value::Object(mut fields) = value else {
        return Err(invalid_parameter_error(
            BODY,
            "request body must be a JSON object",
            None,
        ));
    };
    match fields.remove(NAME.as_str()) {
        Some(Value::String(raw)) => Ok(Some(raw)),
        _ => Ok(None),
    }
}

/// A repeated `name` key decodes to a list, not a string, so it counts as
/// missing.
fn form_name(body: &[u8]) -> Result<Option<String>, Error> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body).map_err(|_| {
        invalid_parameter_error(BODY, "request body must be form-encoded", None)
    })?;
    let mut names = pairs
        .into_iter()
        .filter(|(key, _)| key == NAME.as_str())
        .map(|(_, value)| value);
    match (names.next(), names.next()) {
        (Some(raw), None) => Ok(Some(raw)),
        _ => Ok(None),
    }
}

/// Validate a create or replace body and extract the user name.
///
/// The body is taken as raw bytes so this check runs after path validation
/// instead of inside an extractor. `format` comes from the request's
/// `Content-Type`.
pub(crate) fn validate_user_body(format: BodyFormat, body: &[u8]) -> Result<UserName, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(missing_field_error(NAME));
    }
    let name = match format {
        BodyFormat::Json => json_name(body)?,
        BodyFormat::Form => form_name(body)?,
        BodyFormat::Other => None,
    };
    let Some(raw) = name else {
        return Err(missing_field_error(NAME));
    };
    UserName::new(raw).map_err(|err| match err {
        UserValidationError::EmptyName => missing_field_error(NAME),
        other => invalid_parameter_error(NAME, other.to_string(), None),
    })
}
