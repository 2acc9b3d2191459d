//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Logging → Config (fail fast) → Metrics → Bind → Serve
//!
//! Shutdown:
//!     signals.rs (SIGINT/SIGTERM) → shutdown.rs trigger → server drains → Exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::wait_for_signal;
