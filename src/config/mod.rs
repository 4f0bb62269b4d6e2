//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → LinksConfig (validated, immutable)
//!     → copied into the LinkRouter at build time
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a new router is built for a new config
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::FeatureConfig;
pub use schema::LinkRoutingConfig;
pub use schema::LinksConfig;
pub use schema::ObservabilityConfig;
