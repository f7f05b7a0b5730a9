//! Configuration
//!
//! Layered settings: compiled-in defaults, then a TOML file, then
//! `BOOTWIRE_*` environment variables.

/// Figment-based loader
pub mod loader;
/// Configuration structures
pub mod types;

pub use loader::ConfigLoader;
pub use types::{BootwireConfig, LoggingConfig};
