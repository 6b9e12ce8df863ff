//! Coolify API client module
//!
//! Provides authenticated access to the Coolify v1 API for managing servers,
//! projects, applications, databases, services and deployments.
//!
//! # Example
//!
//! ```rust,ignore
//! use coolify_mcp::platform::api::CoolifyClient;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoolifyClient::connect("https://coolify.example.com", "token", Duration::from_secs(30))?;
//!
//!     for server in client.list_servers().await? {
//!         println!("Server: {}", server.name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

// Re-export commonly used items
pub use client::CoolifyClient;
pub use error::{CoolifyApiError, FieldErrors, Result};
pub use transport::{ApiRequest, DEFAULT_TIMEOUT_SECS, HttpTransport, Method, Transport};
pub use types::{ListPayload, PartialUpdate, ResourceType};
