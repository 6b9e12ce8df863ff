//! Coolify platform integration
//!
//! Houses the typed API client and the HTTP transport it runs on.

pub mod api;
