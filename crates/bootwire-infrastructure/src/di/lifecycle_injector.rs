//! Composition root
//!
//! Building a [`LifecycleInjector`] runs phase 1 exactly once: the bootstrap
//! graph is composed from the internal modules and the user's bootstrap
//! module, the [`LifecycleManager`] is resolved from it and published through
//! the [`LifecycleManagerRef`] bound in that same graph. Every later
//! `create_*` call runs phase 2, deriving a fresh overlay chained to the
//! bootstrap graph.

use std::sync::Arc;

use bootwire_domain::Stage;
use bootwire_domain::error::Result;
use tracing::{debug, info};

use super::builder::LifecycleInjectorBuilder;
use super::engine::{self, BindingSource};
use super::injector::Injector;
use super::internal::{InternalBootstrapModule, InternalLifecycleModule};
use super::module::{BootstrapModule, Module};
use crate::lifecycle::{LifecycleManager, LifecycleManagerRef};

/// Owns the bootstrap graph and derives application injectors from it
pub struct LifecycleInjector {
    modules: Vec<Arc<dyn Module>>,
    injector: Injector,
    lifecycle_manager: Arc<LifecycleManager>,
}

impl LifecycleInjector {
    /// Start configuring a new composition root
    pub fn builder() -> LifecycleInjectorBuilder {
        LifecycleInjectorBuilder::new()
    }

    pub(crate) fn new(
        modules: Vec<Arc<dyn Module>>,
        bootstrap_module: Option<Arc<dyn BootstrapModule>>,
        stage: Stage,
    ) -> Result<Self> {
        info!(
            %stage,
            modules = modules.len(),
            bootstrap = bootstrap_module.as_ref().map(|m| m.name()),
            "Building bootstrap injector"
        );

        let manager_ref = Arc::new(LifecycleManagerRef::new());
        let internal_bootstrap = InternalBootstrapModule::new(Arc::clone(&manager_ref), stage);
        let internal_lifecycle = InternalLifecycleModule;

        let mut sources = vec![BindingSource::Module(&internal_bootstrap)];
        if let Some(module) = bootstrap_module.as_deref() {
            sources.push(BindingSource::Bootstrap(module));
        }
        sources.push(BindingSource::Module(&internal_lifecycle));

        let injector = engine::compose(None, stage, &sources)?;
        let lifecycle_manager = injector.get_instance::<LifecycleManager>()?;
        manager_ref.publish(Arc::clone(&lifecycle_manager));

        info!(
            listeners = lifecycle_manager.listener_count(),
            "Bootstrap injector ready"
        );
        Ok(Self {
            modules,
            injector,
            lifecycle_manager,
        })
    }

    /// Overlay with the builder-time modules
    pub fn create_injector(&self) -> Result<Injector> {
        self.create_injector_with(Vec::new())
    }

    /// Overlay with `extra` modules followed by the builder-time modules
    ///
    /// `extra` only affects the returned injector.
    pub fn create_injector_with<I>(&self, extra: I) -> Result<Injector>
    where
        I: IntoIterator<Item = Arc<dyn Module>>,
    {
        let all: Vec<Arc<dyn Module>> = extra
            .into_iter()
            .chain(self.modules.iter().cloned())
            .collect();
        debug!(modules = all.len(), "Creating application injector");
        self.create_child_injector(all)
    }

    /// Overlay with exactly `modules`; builder-time modules are not included
    pub fn create_child_injector<I>(&self, modules: I) -> Result<Injector>
    where
        I: IntoIterator<Item = Arc<dyn Module>>,
    {
        self.injector.create_child_injector(modules)
    }

    /// The coordinator published during bootstrap
    pub fn lifecycle_manager(&self) -> Arc<LifecycleManager> {
        Arc::clone(&self.lifecycle_manager)
    }

    /// The phase-1 graph
    pub fn bootstrap_injector(&self) -> &Injector {
        &self.injector
    }

    /// Builder-time modules, in order
    pub fn modules(&self) -> &[Arc<dyn Module>] {
        &self.modules
    }

    pub fn stage(&self) -> Stage {
        self.injector.stage()
    }
}

impl std::fmt::Debug for LifecycleInjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleInjector")
            .field("modules", &self.modules.len())
            .field("stage", &self.stage())
            .field("lifecycle_manager", &self.lifecycle_manager)
            .finish()
    }
}
