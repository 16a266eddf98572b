//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → main wakes up
//!
//! Shutdown (shutdown.rs):
//!     main → Shutdown::trigger() → every ShutdownListener wakes
//!         → reporter exits
//!         → HTTP server stops accepting and drains
//! ```
//!
//! # Design Decisions
//! - The shutdown signal is level-triggered: late subscribers still observe it
//! - Triggering is idempotent; only the first call has an effect
//! - Shutdown has a deadline: stragglers are abandoned after the drain timeout

pub mod shutdown;
pub mod signals;

pub use shutdown::{Shutdown, ShutdownListener};
pub use signals::{wait_for_signal, Signal};
