pub mod types;

use crate::error::ConfigError;
use crate::platform::api::DEFAULT_TIMEOUT_SECS;
use crate::server::DEFAULT_SERVER_NAME;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use types::{FileConfig, Overrides, Settings};

const CONFIG_FILE_NAME: &str = ".coolify-mcp.toml";

pub const BASE_URL_VAR: &str = "COOLIFY_BASE_URL";
pub const TOKEN_VAR: &str = "COOLIFY_TOKEN";

/// Get the global config file path (~/.coolify-mcp.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Read and parse a config file
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|e| ConfigError::ParsingFailed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration from file or use defaults.
///
/// An explicit path must exist and parse. The global file is optional and
/// skipped with a warning when it cannot be used.
pub fn load_config(explicit: Option<&Path>) -> Result<FileConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    if let Some(global) = global_config_path() {
        if global.exists() {
            match load_file(&global) {
                Ok(config) => return Ok(config),
                Err(e) => log::warn!("Ignoring {}", e),
            }
        }
    }

    Ok(FileConfig::default())
}

/// Merge overrides over file values and check that credentials are present
pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Settings, ConfigError> {
    let base_url = overrides
        .base_url
        .or(file.coolify.base_url)
        .filter(|v| !v.trim().is_empty());
    let token = overrides
        .token
        .or(file.coolify.token)
        .filter(|v| !v.trim().is_empty());

    let (base_url, token) = match (base_url, token) {
        (Some(base_url), Some(token)) => (base_url, token),
        (base_url, token) => {
            let mut missing = Vec::new();
            if base_url.is_none() {
                missing.push(BASE_URL_VAR);
            }
            if token.is_none() {
                missing.push(TOKEN_VAR);
            }
            return Err(ConfigError::MissingCredentials(missing));
        }
    };

    let timeout_secs = overrides
        .timeout_secs
        .or(file.coolify.timeout_secs)
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(Settings {
        base_url: base_url.trim_end_matches('/').to_string(),
        token,
        timeout: Duration::from_secs(timeout_secs),
        server_name: overrides
            .server_name
            .or(file.server.name)
            .unwrap_or_else(|| DEFAULT_SERVER_NAME.to_string()),
    })
}
