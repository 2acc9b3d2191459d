//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (PICO_PROXY_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → environment overlay (PATHS, PORT, INSECURE_SKIP_VERIFY, ...)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is built once at startup and never mutated afterwards
//! - All fields have defaults to allow an environment-only setup
//! - Any error is fatal at startup

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_route_list, ConfigError};
pub use schema::{ListenerConfig, ObservabilityConfig, ProxyConfig, RouteConfig, UpstreamConfig};
pub use validation::{validate_config, ValidationError};
