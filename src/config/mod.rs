//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → StakingConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so a missing file still yields a working config
//! - Validation separates syntactic (serde) from semantic checks
//! - Config is immutable once loaded

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{SnapshotConfig, StakingConfig};
