//! In-memory key-value storage subsystem.
//!
//! # Data Flow
//! ```text
//! HTTP handlers
//!     → kv.rs (put_all / get_all / delete / stats, one lock per call)
//!     → StoreError on rejected deletes
//!
//! Reporter
//!     → kv.rs (current_stats, non-counting snapshot)
//! ```
//!
//! # Design Decisions
//! - One coarse-grained mutex guards the map and the request counter together
//! - The lock is never held across an `.await`
//! - Delete only counts on success; every other operation always counts

pub mod error;
pub mod kv;

pub use error::StoreError;
pub use kv::{Store, StoreStats};
