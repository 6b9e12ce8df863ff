//! Crate-level errors
//!
//! Faults that stop the server: bad configuration, a client that cannot be
//! built, or a broken stdio stream. Tool call failures never reach this type.

use crate::platform::api::CoolifyApiError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Client error: {0}")]
    Client(#[from] CoolifyApiError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    #[error("Failed to read config file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ParsingFailed { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
