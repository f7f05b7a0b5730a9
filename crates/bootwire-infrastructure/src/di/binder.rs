//! Binding declaration surface handed to modules
//!
//! A [`Binder`] lives for one engine invocation. Problems are recorded
//! rather than raised, so every module runs and the caller gets one
//! [`Error::Binding`] listing everything that was wrong.

use std::any::{TypeId, type_name};
use std::collections::{HashMap, HashSet};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use bootwire_domain::error::{Error, Result};
use bootwire_domain::ports::LifecycleListener;
use dill::{CastTo, Catalog, CatalogBuilder, Component, TypedBuilder};
use tracing::{debug, warn};

use super::module::Module;
use super::provider::ProviderBuilder;
use crate::lifecycle::listener::ListenerSlot;

/// Implementation types declared during one engine invocation
pub(crate) struct BindingRegistry {
    inherited: HashSet<TypeId>,
    declared: HashMap<TypeId, String>,
    errors: Vec<String>,
}

impl BindingRegistry {
    pub(crate) fn new() -> Self {
        Self {
            inherited: HashSet::new(),
            declared: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Registry for a child graph; types the parent chain already provides
    /// cannot be declared again.
    pub(crate) fn chained(parent: &Catalog) -> Self {
        Self {
            inherited: parent
                .builders()
                .map(|builder| builder.instance_type().id)
                .collect(),
            ..Self::new()
        }
    }

    fn claim(&mut self, id: TypeId, type_name: &str, source: &str) -> bool {
        if self.inherited.contains(&id) {
            self.report(
                source,
                format!("`{type_name}` is already bound in a parent injector"),
            );
            return false;
        }
        if let Some(previous) = self.declared.get(&id) {
            let message = format!("`{type_name}` is already bound by {previous}");
            self.report(source, message);
            return false;
        }
        self.declared.insert(id, source.to_string());
        true
    }

    fn is_declared(&self, id: TypeId) -> bool {
        self.declared.contains_key(&id)
    }

    fn report(&mut self, source: &str, message: impl std::fmt::Display) {
        warn!(module = %source, "{message}");
        self.errors.push(format!("{source}: {message}"));
    }

    /// Fail with every recorded problem, or return the declared types
    pub(crate) fn finish(self) -> Result<HashSet<TypeId>> {
        if self.errors.is_empty() {
            Ok(self.declared.into_keys().collect())
        } else {
            Err(Error::binding(self.errors))
        }
    }
}

/// Declares bindings for one injector
pub struct Binder<'a> {
    catalog: &'a mut CatalogBuilder,
    registry: &'a mut BindingRegistry,
    source: String,
}

impl<'a> Binder<'a> {
    pub(crate) fn new(
        catalog: &'a mut CatalogBuilder,
        registry: &'a mut BindingRegistry,
        source: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            registry,
            source: source.into(),
        }
    }

    /// Name of the module currently being configured
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Register a dill component along with the interfaces it declares
    pub fn add<C>(&mut self) -> &mut Self
    where
        C: Component + 'static,
    {
        if self.claim::<C::Impl>() {
            self.catalog.add::<C>();
        }
        self
    }

    /// Register a ready instance
    pub fn add_value<T>(&mut self, value: T) -> &mut Self
    where
        T: Send + Sync + 'static,
    {
        if self.claim::<T>() {
            self.catalog.add_value(value);
        }
        self
    }

    /// Register an instance that is already shared, keeping its identity
    pub fn add_shared<T>(&mut self, value: Arc<T>) -> &mut Self
    where
        T: Send + Sync + 'static,
    {
        if self.claim::<T>() {
            self.catalog.add_builder::<Arc<T>, T>(value);
        }
        self
    }

    /// Register a factory run at most once per injector
    ///
    /// The result is a singleton, so production-stage injectors run the
    /// factory while they are built.
    pub fn add_provider<T, F>(&mut self, factory: F) -> &mut Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        if self.claim::<T>() {
            self.catalog
                .add_builder::<_, T>(ProviderBuilder::new(factory));
        }
        self
    }

    /// Register a pre-configured dill builder
    pub fn add_builder<B, T>(&mut self, builder: B) -> &mut Self
    where
        B: TypedBuilder<T> + 'static,
        T: Send + Sync + 'static,
    {
        if self.claim::<T>() {
            self.catalog.add_builder::<B, T>(builder);
        }
        self
    }

    /// Bind interface `I` to implementation `T`
    ///
    /// `T` must have been registered by this injector's modules.
    pub fn bind<I, T>(&mut self) -> &mut Self
    where
        I: ?Sized + 'static,
        T: CastTo<I> + Send + Sync + 'static,
    {
        if self.registry.is_declared(TypeId::of::<T>()) {
            self.catalog.bind::<I, T>();
        } else {
            let message = format!(
                "cannot bind `{}` to `{}`, which is not registered by this injector",
                type_name::<I>(),
                type_name::<T>()
            );
            self.registry.report(&self.source, message);
        }
        self
    }

    /// Configure a nested module into this binder
    pub fn install(&mut self, module: &dyn Module) -> &mut Self {
        let nested = format!("{} > {}", self.source, module.name());
        let outer = std::mem::replace(&mut self.source, nested);
        debug!(module = %self.source, "Installing nested module");
        module.configure(self);
        self.source = outer;
        self
    }

    /// Record a configuration problem found by the module itself
    pub fn add_error(&mut self, message: impl Into<String>) -> &mut Self {
        self.registry.report(&self.source, message.into());
        self
    }

    fn claim<T: ?Sized + 'static>(&mut self) -> bool {
        self.registry
            .claim(TypeId::of::<T>(), type_name::<T>(), &self.source)
    }
}

/// Declares bindings for the bootstrap graph
///
/// Everything a [`Binder`] offers is available through deref.
pub struct BootstrapBinder<'a> {
    binder: Binder<'a>,
}

impl<'a> BootstrapBinder<'a> {
    pub(crate) fn new(binder: Binder<'a>) -> Self {
        Self { binder }
    }

    /// Register a listener the lifecycle manager reports to
    ///
    /// Listener types must be unique within the bootstrap graph.
    pub fn add_lifecycle_listener<L>(&mut self, listener: L) -> &mut Self
    where
        L: LifecycleListener + 'static,
    {
        self.binder
            .add_value(ListenerSlot(listener))
            .bind::<dyn LifecycleListener, ListenerSlot<L>>();
        self
    }
}

impl<'a> Deref for BootstrapBinder<'a> {
    type Target = Binder<'a>;

    fn deref(&self) -> &Self::Target {
        &self.binder
    }
}

impl DerefMut for BootstrapBinder<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.binder
    }
}
