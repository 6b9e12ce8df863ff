//! Tool-call adapter
//!
//! Turns `(name, arguments)` pairs from the protocol front into exactly one
//! Coolify API call and renders the answer as text.

pub mod dispatch;
pub mod failure;
pub mod format;
pub mod output;
pub mod registry;
pub mod schema;

pub use dispatch::{CallError, ToolRouter, UnknownTool};
pub use failure::{Failure, FailureEnvelope, failure_output};
pub use output::{ToolContent, ToolOutput};
pub use registry::{Operation, catalog};
pub use schema::{FieldKind, FieldSpec, OperationSpec, ValidatedArgs, ValidationError};
