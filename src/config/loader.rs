//! Configuration loading from the environment and, optionally, disk.
//!
//! Environment variables:
//! - `PATHS`: comma-separated `prefix:backendBaseURL` entries
//! - `PORT`: listener port (default 8080)
//! - `INSECURE_SKIP_VERIFY`: `yes` disables upstream certificate checks
//! - `UPSTREAM_TIMEOUT_SECS`: optional upstream request timeout
//! - `LOG_LEVEL`, `METRICS_ADDRESS`: observability overrides
//! - `PICO_PROXY_CONFIG`: optional TOML file applied before the variables above

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{ProxyConfig, RouteConfig};
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_PATHS: &str = "PATHS";
pub const ENV_PORT: &str = "PORT";
pub const ENV_INSECURE_SKIP_VERIFY: &str = "INSECURE_SKIP_VERIFY";
pub const ENV_UPSTREAM_TIMEOUT: &str = "UPSTREAM_TIMEOUT_SECS";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_METRICS_ADDRESS: &str = "METRICS_ADDRESS";
pub const ENV_CONFIG_FILE: &str = "PICO_PROXY_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("malformed route entry '{0}': expected prefix:backendURL")]
    MalformedRoute(String),

    #[error("invalid port '{0}'")]
    InvalidPort(String),

    #[error("invalid upstream timeout '{0}'")]
    InvalidTimeout(String),

    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a comma-separated `prefix:backend` list.
///
/// Each entry is split on its first colon only, so backends such as
/// `http://host:9000` survive intact. Blank entries are skipped.
pub fn parse_route_list(raw: &str) -> Result<Vec<RouteConfig>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .split_once(':')
                .map(|(prefix, backend)| RouteConfig::new(prefix, backend))
                .ok_or_else(|| ConfigError::MalformedRoute(entry.to_string()))
        })
        .collect()
}

impl ProxyConfig {
    /// Build a configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let file = std::env::var(ENV_CONFIG_FILE)
            .ok()
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty());
        load_config(file.as_deref().map(Path::new), |key| std::env::var(key).ok())
    }

    /// Overlay environment values onto this configuration.
    ///
    /// `lookup` returns the value for a variable name, if set.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(paths) = lookup(ENV_PATHS) {
            if !paths.trim().is_empty() {
                self.routes = parse_route_list(&paths)?;
            }
        }

        if let Some(port) = lookup(ENV_PORT) {
            let port = port.trim();
            if !port.is_empty() {
                self.listener.port = port
                    .parse()
                    .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
            }
        }

        if let Some(flag) = lookup(ENV_INSECURE_SKIP_VERIFY) {
            self.upstream.insecure_skip_verify = flag.trim() == "yes";
        }

        if let Some(timeout) = lookup(ENV_UPSTREAM_TIMEOUT) {
            let timeout = timeout.trim();
            if !timeout.is_empty() {
                self.upstream.timeout_secs = Some(
                    timeout
                        .parse()
                        .map_err(|_| ConfigError::InvalidTimeout(timeout.to_string()))?,
                );
            }
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL).filter(|l| !l.trim().is_empty()) {
            self.observability.log_level = level.trim().to_string();
        }

        if let Some(addr) = lookup(ENV_METRICS_ADDRESS).filter(|a| !a.trim().is_empty()) {
            self.observability.metrics_address = Some(addr.trim().to_string());
        }

        Ok(self)
    }
}

/// Load configuration from an optional TOML file, overlay the variables
/// returned by `lookup`, then validate the result.
pub fn load_config<F>(path: Option<&Path>, lookup: F) -> Result<ProxyConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match path {
        Some(path) => read_config_file(path)?,
        None => ProxyConfig::default(),
    };
    let config = base.apply_env(lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

fn read_config_file(path: &Path) -> Result<ProxyConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}
