//! Infrastructure layer constants
//!
//! Contains constants for configuration, logging and injector composition.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "bootwire.toml";

/// Default configuration directory name under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "bootwire";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "BOOTWIRE";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV_VAR: &str = "BOOTWIRE_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "bootwire";

// ============================================================================
// COMPOSITION CONSTANTS
// ============================================================================

/// Module name of the binding unit that seeds the bootstrap graph
pub const INTERNAL_BOOTSTRAP_MODULE: &str = "bootwire::internal-bootstrap";

/// Module name of the binding unit that declares the lifecycle coordinator
pub const INTERNAL_LIFECYCLE_MODULE: &str = "bootwire::internal-lifecycle";

/// Subject reported to listeners for the coordinator's own transitions
pub const LIFECYCLE_MANAGER_SUBJECT: &str = "lifecycle-manager";
