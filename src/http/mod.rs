//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, request span)
//!     → routing (Identity / Forward / NotFound)
//!     → request.rs (read method, path, query, headers, body)
//!     → proxy::Forwarder (outbound GET)
//!     → response.rs (relay or fixed response)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use server::{AppState, ProxyServer};
