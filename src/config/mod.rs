//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → KvConfig (validated, immutable)
//!     → handed by value/reference to each subsystem at startup
//! ```
//!
//! # Design Decisions
//! - No file means defaults, which match the reference deployment
//! - Config is immutable once loaded
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    KvConfig, LimitsConfig, ListenerConfig, ObservabilityConfig, ReporterConfig, ShutdownConfig,
};
pub use validation::{validate_config, ValidationError};
