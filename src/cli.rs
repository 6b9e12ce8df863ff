use crate::config::types::Overrides;
use crate::config::{BASE_URL_VAR, TOKEN_VAR};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "coolify-mcp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Expose the Coolify API as Model Context Protocol tools")]
#[command(long_about = "An MCP server speaking JSON-RPC over stdio. Each tool validates its arguments, makes one call to the Coolify API and answers with readable text.")]
pub struct Cli {
    /// Coolify instance URL, e.g. https://coolify.example.com
    #[arg(long, env = BASE_URL_VAR, value_name = "URL")]
    pub base_url: Option<String>,

    /// Coolify API token
    #[arg(long, env = TOKEN_VAR, value_name = "TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Name reported to MCP clients
    #[arg(long, value_name = "NAME")]
    pub server_name: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level.
    ///
    /// Logs always go to stderr; stdout belongs to the protocol.
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .target(env_logger::Target::Stderr)
            .init();
    }

    /// Values that take precedence over the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            token: self.token.clone(),
            timeout_secs: self.timeout,
            server_name: self.server_name.clone(),
        }
    }
}
