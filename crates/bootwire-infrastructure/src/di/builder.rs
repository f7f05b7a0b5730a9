//! Accumulates modules, bootstrap module and stage before the composition
//! root is built

use std::sync::Arc;

use bootwire_domain::Stage;
use bootwire_domain::error::Result;

use super::injector::Injector;
use super::lifecycle_injector::LifecycleInjector;
use super::module::{BootstrapModule, Module};
use crate::config::BootwireConfig;

/// Builder for [`LifecycleInjector`]
///
/// Modules are held by reference; `build` consumes the builder, so the
/// composition root always works on a frozen snapshot.
#[derive(Clone, Default)]
pub struct LifecycleInjectorBuilder {
    modules: Vec<Arc<dyn Module>>,
    bootstrap_module: Option<Arc<dyn BootstrapModule>>,
    stage: Stage,
}

impl LifecycleInjectorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the module list
    pub fn with_modules<I>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Module>>,
    {
        self.modules = modules.into_iter().collect();
        self
    }

    /// Append to the module list
    pub fn with_additional_modules<I>(mut self, modules: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Module>>,
    {
        self.modules.extend(modules);
        self
    }

    /// Set the bootstrap module, replacing any earlier one
    pub fn with_bootstrap_module(mut self, module: Arc<dyn BootstrapModule>) -> Self {
        self.bootstrap_module = Some(module);
        self
    }

    /// Set the stage (default: [`Stage::Production`])
    pub fn in_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    /// Apply loaded configuration
    pub fn with_config(self, config: &BootwireConfig) -> Self {
        self.in_stage(config.stage)
    }

    /// Modules accumulated so far, in order
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Build the bootstrap graph and publish its lifecycle manager
    pub fn build(self) -> Result<LifecycleInjector> {
        LifecycleInjector::new(self.modules, self.bootstrap_module, self.stage)
    }

    /// Shortcut for `build()` followed by
    /// [`LifecycleInjector::create_injector`]
    ///
    /// The bootstrap graph stays alive as the returned injector's parent.
    pub fn create_injector(self) -> Result<Injector> {
        self.build()?.create_injector()
    }
}

impl std::fmt::Debug for LifecycleInjectorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleInjectorBuilder")
            .field(
                "modules",
                &self.modules.iter().map(|m| m.name()).collect::<Vec<_>>(),
            )
            .field(
                "bootstrap_module",
                &self.bootstrap_module.as_ref().map(|m| m.name()),
            )
            .field("stage", &self.stage)
            .finish()
    }
}
