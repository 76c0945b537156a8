//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ResponderConfig (validated, immutable)
//!     → CLI overrides applied in main, then validated again
//! ```
//!
//! All fields have defaults, so an empty file (or no file) is a valid config.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{AssetsConfig, ListenerConfig, LogFormat, ObservabilityConfig, ResponderConfig};
pub use validation::{validate_config, ValidationError};
