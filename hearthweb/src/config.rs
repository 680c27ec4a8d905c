//! Configuration loader and defaults for the hearthweb server.
//!
//! Exposes a lazily-initialized `CONFIG` which reads values from environment
//! variables (with sensible defaults). The only setting is the HTTP
//! listening port (`web_port`).
//!
use std::env;

use once_cell::sync::Lazy;

const DEFAULT_WEB_PORT: u16 = 8080;

/// Application configuration
pub struct Config {
    /// Web http port
    pub web_port: u16,
}

/// Global application configuration instance, lazily initialized
pub static CONFIG: Lazy<Config> = Lazy::new(|| Config {
    web_port: env::var("HEARTH_WEB_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_WEB_PORT),
});
