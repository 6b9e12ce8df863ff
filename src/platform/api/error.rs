//! Error types for the Coolify API client
//!
//! Every failure the remote side can produce is captured here once, at the
//! transport boundary, so callers only ever see a message, an optional HTTP
//! status and an optional per-field error map.

use serde_json::Value;
use thiserror::Error;

/// Per-field validation messages reported by the API, in the order received
pub type FieldErrors = Vec<(String, Vec<String>)>;

/// Errors that can occur when talking to the Coolify API
#[derive(Debug, Error)]
pub enum CoolifyApiError {
    /// The request never produced an HTTP response (connect, TLS, timeout)
    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the response body, or the generic status text
        message: String,
        /// Field-level validation errors from the response body
        errors: Option<FieldErrors>,
    },

    /// The response body did not match the expected shape
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl CoolifyApiError {
    /// Human readable message for this failure
    pub fn message(&self) -> String {
        match self {
            Self::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status, when the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            Self::ParseError(_) => None,
        }
    }

    /// Field-level errors reported by the API
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::ApiError { errors, .. } => errors.as_ref(),
            _ => None,
        }
    }

    /// Build an [`CoolifyApiError::ApiError`] from a status code and a raw body.
    ///
    /// The body's `message` wins when present; otherwise a generic
    /// `Request failed with status code N` message is used. A JSON `errors`
    /// object is kept in its original key order.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed: Option<Value> = serde_json::from_str(body).ok();

        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status code {}", status));

        let errors = parsed
            .as_ref()
            .and_then(|v| v.get("errors"))
            .and_then(parse_field_errors);

        Self::ApiError {
            status,
            message,
            errors,
        }
    }
}

/// Convert a JSON `errors` object into ordered field errors.
///
/// Array values become their string elements; any other value becomes a
/// single message.
pub fn parse_field_errors(value: &Value) -> Option<FieldErrors> {
    let map = value.as_object()?;
    let errors = map
        .iter()
        .map(|(field, messages)| {
            let list = match messages {
                Value::Array(items) => items.iter().map(value_to_message).collect(),
                other => vec![value_to_message(other)],
            };
            (field.clone(), list)
        })
        .collect();
    Some(errors)
}

fn value_to_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Result type alias for Coolify API operations
pub type Result<T> = std::result::Result<T, CoolifyApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_response_prefers_body_message() {
        let body = r#"{"message":"Validation failed","errors":{"name":["Name is required"]}}"#;
        let err = CoolifyApiError::from_response(422, body);

        assert_eq!(err.message(), "Validation failed");
        assert_eq!(err.status(), Some(422));
        assert_eq!(
            err.field_errors(),
            Some(&vec![("name".to_string(), vec!["Name is required".to_string()])])
        );
    }

    #[test]
    fn test_from_response_falls_back_to_status_text() {
        let err = CoolifyApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message(), "Request failed with status code 502");
        assert!(err.field_errors().is_none());
    }

    #[test]
    fn test_field_errors_keep_key_order() {
        let value = json!({"port": ["Port must be a number"], "name": ["a", "b"]});
        let errors = parse_field_errors(&value).unwrap();
        assert_eq!(errors[0].0, "port");
        assert_eq!(errors[1].1, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_scalar_field_error_becomes_single_message() {
        let value = json!({"uuid": "is invalid", "count": 3});
        let errors = parse_field_errors(&value).unwrap();
        assert_eq!(errors[0].1, vec!["is invalid".to_string()]);
        assert_eq!(errors[1].1, vec!["3".to_string()]);
    }

    #[test]
    fn test_parse_error_has_no_status() {
        let err = CoolifyApiError::ParseError("missing field `uuid`".to_string());
        assert_eq!(err.status(), None);
        assert!(err.message().contains("parse"));
    }
}
