//! JSON body validation with structured 422 responses.
//!
//! Axum's `Json` extractor rejects bad input with a plain-text message and
//! stops at the first serde error. `ValidJson` instead checks every declared
//! field up front and answers with the `HTTPValidationError` shape:
//!
//! ```json
//! { "detail": [ { "loc": ["body", "email"], "msg": "field required", "type": "value_error.missing" } ] }
//! ```

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::WithRejection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A request body whose required fields are all JSON strings.
pub trait BodySchema: DeserializeOwned + Send {
    /// Field names, in the order problems are reported.
    const REQUIRED_STRINGS: &'static [&'static str];
}

/// One problem found in the request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationError {
    fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }
}

/// Body of a 422 response.
#[derive(Debug, Serialize)]
pub struct HttpValidationError {
    pub detail: Vec<ValidationError>,
}

#[derive(Debug)]
pub enum BodyRejection {
    Invalid(Vec<ValidationError>),
    /// The body could not be read at all; axum's own response is kept.
    Unreadable(BytesRejection),
}

impl BodyRejection {
    fn body(msg: impl Into<String>, kind: &str) -> Self {
        BodyRejection::Invalid(vec![ValidationError::new(&["body"], msg, kind)])
    }
}

impl From<BytesRejection> for BodyRejection {
    fn from(rejection: BytesRejection) -> Self {
        BodyRejection::Unreadable(rejection)
    }
}

impl From<JsonRejection> for BodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match rejection {
            JsonRejection::JsonSyntaxError(_) => "value_error.jsondecode",
            _ => "value_error.json",
        };
        BodyRejection::body(rejection.body_text(), kind)
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        match self {
            BodyRejection::Invalid(detail) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(HttpValidationError { detail }),
            )
                .into_response(),
            BodyRejection::Unreadable(rejection) => rejection.into_response(),
        }
    }
}

/// `None` when the request carries no `Content-Type` at all.
fn is_json_content_type(headers: &HeaderMap) -> Option<bool> {
    let value = headers.get(header::CONTENT_TYPE)?;
    let Ok(value) = value.to_str() else {
        return Some(false);
    };
    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    Some(
        essence == "application/json"
            || (essence.starts_with("application/") && essence.ends_with("+json")),
    )
}

/// Check `value` against a list of required string fields, collecting every problem.
pub fn check_required_strings(value: &Value, fields: &[&str]) -> Vec<ValidationError> {
    let Some(object) = value.as_object() else {
        return vec![ValidationError::new(
            &["body"],
            "value is not a valid dict",
            "type_error.dict",
        )];
    };

    fields
        .iter()
        .filter_map(|&field| {
            let loc = ["body", field];
            match object.get(field) {
                None => Some(ValidationError::new(
                    &loc,
                    "field required",
                    "value_error.missing",
                )),
                Some(Value::Null) => Some(ValidationError::new(
                    &loc,
                    "none is not an allowed value",
                    "type_error.none.not_allowed",
                )),
                Some(Value::String(_)) => None,
                Some(_) => Some(ValidationError::new(
                    &loc,
                    "str type expected",
                    "type_error.str",
                )),
            }
        })
        .collect()
}

/// JSON extractor that validates against `T`'s schema before deserializing.
///
/// A body without a `Content-Type` header is still read as JSON; an explicit
/// non-JSON type is rejected. An empty body counts as a missing body.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: BodySchema,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json_content_type = is_json_content_type(req.headers());
        let WithRejection(bytes, _) =
            WithRejection::<Bytes, BodyRejection>::from_request(req, state).await?;

        if bytes.is_empty() {
            return Err(BodyRejection::body("field required", "value_error.missing"));
        }
        if json_content_type == Some(false) {
            return Err(BodyRejection::body(
                "Expected request with `Content-Type: application/json`",
                "value_error.content_type",
            ));
        }

        let Json(value) = Json::<Value>::from_bytes(&bytes)?;

        let problems = check_required_strings(&value, T::REQUIRED_STRINGS);
        if !problems.is_empty() {
            return Err(BodyRejection::Invalid(problems));
        }

        serde_json::from_value(value)
            .map(ValidJson)
            .map_err(|e| BodyRejection::body(e.to_string(), "value_error"))
    }
}
