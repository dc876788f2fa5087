//! Application configuration.

use crate::cli::ServeArgs;

/// Load configuration from `.env` and environment variables.
pub fn load_config() -> docdash_core::Config {
    docdash_core::config::load_dotenv();
    docdash_core::Config::from_env()
}

/// Command-line flags take precedence over the environment.
pub fn apply_overrides(config: &mut docdash_core::Config, args: &ServeArgs) {
    if let Some(host) = &args.host {
        config.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
}
