//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and the reporter produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters, database size gauge)
//!
//! Consumers:
//!     → stdout log sink
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;
