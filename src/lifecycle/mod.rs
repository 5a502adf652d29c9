//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain in-flight requests → Exit
//!
//! Signals (signals.rs):
//!     Ctrl+C → Trigger graceful shutdown
//! ```
//!
//! # Design Decisions
//! - Bind failures are fatal: the error propagates out of main, no retry
//! - Shutdown is a broadcast so tests can stop a server deterministically

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
