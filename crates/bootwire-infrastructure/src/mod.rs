//! # Infrastructure Layer
//!
//! Two-phase object graph composition on top of the dill catalog, plus the
//! cross-cutting concerns every application built on it needs.
//!
//! ## Module Categories
//!
//! ### Composition & Lifecycle
//! | Module | Description |
//! |--------|-------------|
//! | [`di`] | Modules, binders, injectors and the composition root |
//! | [`lifecycle`] | Lifecycle coordinator and its forward reference |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod lifecycle;
pub mod logging;

// Re-export commonly used types
pub use error_ext::ErrorContext;
