//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → CLI flag overlay (binary only)
//!     → validation.rs (semantic checks)
//!     → ServeConfig (immutable input to one bootstrap)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a bootstrap starts
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{BindConfig, ServeConfig, DEFAULT_PORT};
pub use validation::{validate_config, ValidationError};
