//! In-memory key-value server library.
//!
//! # Architecture Overview
//!
//! ```text
//!     HTTP client ──▶ http (axum router + handlers) ──▶ store (one lock) ──▶ response
//!
//!     reporter (interval) ──▶ store snapshot ──▶ log sink / metrics
//!
//!     OS signal ──▶ lifecycle::Shutdown ──┬──▶ reporter exits
//!                                         └──▶ HTTP server drains and stops
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod reporter;
pub mod store;

pub use config::KvConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use reporter::Reporter;
pub use store::Store;
