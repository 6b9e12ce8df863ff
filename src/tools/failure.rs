//! Failure envelope
//!
//! Validation rejections and remote errors both implement [`Failure`]; the
//! envelope renders either one into the same error text.

use super::output::ToolOutput;
use super::schema::ValidationError;
use crate::platform::api::{CoolifyApiError, FieldErrors};

/// Text used when a failure carries no message
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Anything that can be reported as a failed tool call
pub trait Failure {
    /// Explanation of what went wrong, if known
    fn message(&self) -> Option<String>;

    /// HTTP status of the remote answer, if there was one
    fn status(&self) -> Option<u16> {
        None
    }

    /// Per-field messages, in the order reported
    fn field_errors(&self) -> Option<&FieldErrors> {
        None
    }
}

impl Failure for ValidationError {
    fn message(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Failure for CoolifyApiError {
    fn message(&self) -> Option<String> {
        Some(CoolifyApiError::message(self))
    }

    fn status(&self) -> Option<u16> {
        CoolifyApiError::status(self)
    }

    fn field_errors(&self) -> Option<&FieldErrors> {
        CoolifyApiError::field_errors(self)
    }
}

/// Normalized failure, ready to render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureEnvelope {
    pub message: Option<String>,
    pub status: Option<u16>,
    pub field_errors: Option<FieldErrors>,
}

impl FailureEnvelope {
    pub fn from_failure(failure: &dyn Failure) -> Self {
        Self {
            message: failure.message(),
            status: failure.status(),
            field_errors: failure.field_errors().cloned(),
        }
    }

    /// Render as `[status] message` followed by one line per field error
    pub fn render(&self) -> String {
        let mut text = self
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(UNEXPECTED_ERROR)
            .to_string();

        if let Some(errors) = &self.field_errors {
            for (field, messages) in errors {
                text.push('\n');
                text.push_str(field);
                text.push_str(": ");
                text.push_str(&messages.join(", "));
            }
        }

        match self.status {
            Some(status) => format!("[{}] {}", status, text),
            None => text,
        }
    }

    pub fn into_output(self) -> ToolOutput {
        ToolOutput::error(self.render())
    }
}

/// Render any failure as a tool error result
pub fn failure_output(failure: &dyn Failure) -> ToolOutput {
    FailureEnvelope::from_failure(failure).into_output()
}
