//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Reject empty prefixes and backends
//! - Reject backends that are not absolute http(s) URLs
//! - Detect duplicate prefixes
//!
//! Validation is a pure function and reports every problem, not just the first.

use std::collections::HashSet;

use thiserror::Error;
use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("route #{index} has an empty prefix")]
    EmptyPrefix { index: usize },

    #[error("route '{prefix}' has an empty backend URL")]
    EmptyBackend { prefix: String },

    #[error("route '{prefix}' has an invalid backend URL '{backend}': {reason}")]
    InvalidBackend {
        prefix: String,
        backend: String,
        reason: String,
    },

    #[error(
        "prefix '{prefix}' is configured more than once; \
         later entries do not override earlier ones, keep a single mapping per prefix"
    )]
    DuplicatePrefix { prefix: String },

    #[error("listener port must be non-zero")]
    ZeroPort,
}

/// Validate a loaded configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.port == 0 {
        errors.push(ValidationError::ZeroPort);
    }

    let mut seen = HashSet::new();
    for (index, route) in config.routes.iter().enumerate() {
        if route.prefix.is_empty() {
            errors.push(ValidationError::EmptyPrefix { index });
        } else if !seen.insert(route.prefix.as_str()) {
            errors.push(ValidationError::DuplicatePrefix {
                prefix: route.prefix.clone(),
            });
        }

        if route.backend.is_empty() {
            errors.push(ValidationError::EmptyBackend {
                prefix: route.prefix.clone(),
            });
            continue;
        }

        if let Err(reason) = check_backend(&route.backend) {
            errors.push(ValidationError::InvalidBackend {
                prefix: route.prefix.clone(),
                backend: route.backend.clone(),
                reason,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_backend(backend: &str) -> Result<(), String> {
    let url = Url::parse(backend).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{}'", other)),
    }
    if url.host_str().is_none() {
        return Err("missing host".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RouteConfig;

    fn config_with(routes: Vec<RouteConfig>) -> ProxyConfig {
        ProxyConfig {
            routes,
            ..ProxyConfig::default()
        }
    }

    #[test]
    fn accepts_well_formed_routes() {
        let config = config_with(vec![
            RouteConfig::new("api", "http://backend:9000"),
            RouteConfig::new("secure", "https://10.0.0.1"),
        ]);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn reports_every_problem() {
        let config = config_with(vec![
            RouteConfig::new("", "http://a"),
            RouteConfig::new("b", ""),
            RouteConfig::new("c", "ftp://files"),
            RouteConfig::new("d", "not a url"),
            RouteConfig::new("d", "http://dup"),
        ]);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors[0], ValidationError::EmptyPrefix { index: 0 });
        assert_eq!(errors[1], ValidationError::EmptyBackend { prefix: "b".into() });
        assert!(matches!(&errors[2], ValidationError::InvalidBackend { prefix, .. } if prefix == "c"));
        assert!(matches!(&errors[3], ValidationError::InvalidBackend { prefix, .. } if prefix == "d"));
        assert_eq!(errors[4], ValidationError::DuplicatePrefix { prefix: "d".into() });
    }

    #[test]
    fn rejects_zero_port() {
        let mut config = ProxyConfig::default();
        config.listener.port = 0;
        assert_eq!(validate_config(&config).unwrap_err(), vec![ValidationError::ZeroPort]);
    }
}
