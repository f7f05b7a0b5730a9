//! Dependency Injection
//!
//! Two-phase composition on top of dill catalogs.
//!
//! ## Phases
//!
//! ```text
//! LifecycleInjectorBuilder ──build()──► LifecycleInjector
//!                                          │  phase 1: bootstrap graph
//!                                          │    forward ref + bootstrap module + LifecycleManager
//!                                          │    forward ref published
//!                                          │
//!                     create_injector() ───┤  phase 2: overlay graph (any number of times)
//!                                          │    extra modules + builder-time modules,
//!                                          ▼    chained to the bootstrap graph
//!                                       Injector
//! ```
//!
//! Overlays share the bootstrap graph's singletons (including the
//! [`LifecycleManager`](crate::lifecycle::LifecycleManager)) but never each
//! other's.

pub(crate) mod binder;
mod builder;
mod engine;
mod injector;
pub(crate) mod internal;
mod lifecycle_injector;
mod module;
mod provider;

pub use binder::{Binder, BootstrapBinder};
pub use builder::LifecycleInjectorBuilder;
pub use injector::Injector;
pub use lifecycle_injector::LifecycleInjector;
pub use module::{BootstrapModule, FnModule, Module, module_fn};
pub use provider::ProviderBuilder;
