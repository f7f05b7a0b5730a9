//! One engine invocation: binding sources in, finished injector out
//!
//! ```text
//! sources ──configure──► CatalogBuilder ──validate?──► Catalog ──eager?──► Injector
//!                          (chained to the parent catalog for child injectors)
//! ```
//!
//! Validation and eager singleton creation happen only in the production
//! stage. A failed invocation returns nothing partially built.

use std::any::TypeId;
use std::collections::HashSet;

use bootwire_domain::Stage;
use bootwire_domain::error::Result;
use dill::{Catalog, CatalogBuilder, InjectionContext, Singleton};
use tracing::{debug, error};

use super::binder::{Binder, BindingRegistry, BootstrapBinder};
use super::injector::Injector;
use super::module::{BootstrapModule, Module};
use crate::error_ext::ErrorContext;

/// Anything that contributes bindings to an invocation
pub(crate) enum BindingSource<'m> {
    Module(&'m dyn Module),
    Bootstrap(&'m dyn BootstrapModule),
}

impl BindingSource<'_> {
    fn name(&self) -> &str {
        match self {
            Self::Module(module) => module.name(),
            Self::Bootstrap(module) => module.name(),
        }
    }

    fn configure(&self, catalog: &mut CatalogBuilder, registry: &mut BindingRegistry) {
        match self {
            Self::Module(module) => {
                module.configure(&mut Binder::new(catalog, registry, module.name()));
            }
            Self::Bootstrap(module) => {
                let binder = Binder::new(catalog, registry, module.name());
                module.configure(&mut BootstrapBinder::new(binder));
            }
        }
    }
}

/// Compose a graph from `sources`, extending `parent` when given
pub(crate) fn compose(
    parent: Option<&Injector>,
    stage: Stage,
    sources: &[BindingSource<'_>],
) -> Result<Injector> {
    let (mut catalog_builder, mut registry) = match parent {
        Some(parent) => (
            parent.catalog().builder_chained(),
            BindingRegistry::chained(parent.catalog()),
        ),
        None => (CatalogBuilder::new(), BindingRegistry::new()),
    };
    let depth = parent.map_or(0, |parent| parent.depth() + 1);

    for source in sources {
        debug!(module = %source.name(), depth, "Configuring bindings");
        source.configure(&mut catalog_builder, &mut registry);
    }

    let declared = registry.finish().inspect_err(|err| {
        error!(depth, error = %err, "Binding configuration failed");
    })?;

    if stage.validates_bindings() {
        catalog_builder
            .validate()
            .composition_context("Dependency graph validation failed")?;
    }

    let catalog = catalog_builder.build();

    if stage.eager_singletons() {
        instantiate_singletons(&catalog, &declared)?;
    }

    debug!(depth, %stage, bindings = declared.len(), "Injector composed");
    Ok(Injector::new(catalog, stage, depth))
}

// Only types declared by this invocation; ancestors did their own.
fn instantiate_singletons(catalog: &Catalog, declared: &HashSet<TypeId>) -> Result<()> {
    let singleton = TypeId::of::<Singleton>();
    for builder in catalog.builders() {
        let instance = builder.instance_type();
        if !declared.contains(&instance.id) || builder.scope_type().id != singleton {
            continue;
        }
        builder
            .get_any(catalog, &InjectionContext::new_root())
            .with_composition_context(|| {
                format!("Failed to instantiate singleton `{}`", instance.name)
            })?;
    }
    Ok(())
}
