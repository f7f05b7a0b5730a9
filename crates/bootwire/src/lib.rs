//! # bootwire
//!
//! Two-phase object graph composition on top of [`dill`].
//!
//! A [`LifecycleInjector`] first builds a small bootstrap graph holding the
//! [`LifecycleManager`] and whatever a [`BootstrapModule`] declares. From it,
//! any number of application [`Injector`]s are derived; each one sees the
//! bootstrap graph plus its own modules, and every one of them resolves the
//! same lifecycle manager.
//!
//! ## Example
//!
//! ```ignore
//! use bootwire::{LifecycleInjector, Stage, modules};
//!
//! let root = LifecycleInjector::builder()
//!     .with_modules(modules![DatabaseModule, HttpModule])
//!     .in_stage(Stage::Production)
//!     .build()?;
//!
//! let injector = root.create_injector()?;
//! let server = injector.get_instance::<HttpServer>()?;
//! root.lifecycle_manager().start()?;
//! ```
//!
//! ## `Result` and `#[component]`
//!
//! dill's `#[component]` expands to code that names `Result<T, E>`. In a
//! module that declares components, refer to [`Result`] by path
//! (`bootwire::Result<()>`) or import it under another name:
//!
//! ```ignore
//! use bootwire::Result as BootwireResult;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Errors, [`Stage`] and the lifecycle ports
//! - `infrastructure` - Composition, lifecycle coordination, config, logging

/// Domain layer - errors, stage and lifecycle ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use bootwire_domain::*;
}

/// Infrastructure layer - composition, lifecycle, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use bootwire_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Composition entry points
pub use infrastructure::di::{
    Binder, BootstrapBinder, BootstrapModule, Injector, LifecycleInjector,
    LifecycleInjectorBuilder, Module, module_fn,
};
pub use infrastructure::lifecycle::{LifecycleManager, LifecycleManagerRef};
pub use infrastructure::modules;

pub use dill;
