//! Forwarding subsystem.
//!
//! # Data Flow
//! ```text
//! InboundRequest + backend base URL
//!     → rewrite.rs (strip route segment, append query)
//!     → headers.rs (first value per header)
//!     → forwarder.rs (GET via shared client, buffer body)
//!     → RelayedResponse or ProxyError
//! ```

pub mod client;
pub mod error;
pub mod forwarder;
pub mod headers;
pub mod rewrite;

pub use client::build_client;
pub use error::ProxyError;
pub use forwarder::{Forwarder, InboundRequest, RelayedResponse};
pub use headers::collapse_headers;
pub use rewrite::rewrite_target;
