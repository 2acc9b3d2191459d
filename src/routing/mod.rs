//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → router.rs (strip leading slash, identity check, table scan)
//!     → matcher.rs (byte-wise prefix test)
//!     → Return: Identity, Forward(route) or NotFound
//!
//! Route compilation (at startup):
//!     RouteConfig[] → RouteTable → frozen in Router
//! ```

pub mod matcher;
pub mod router;

pub use matcher::{Matcher, PathPrefixMatcher};
pub use router::{Route, RouteDecision, RouteTable, Router};
