//! Resolved object graph

use std::sync::Arc;

use bootwire_domain::Stage;
use bootwire_domain::error::Result;
use dill::{AllOf, Catalog, Maybe, OneOf};
use tracing::{debug, info};

use super::engine::{self, BindingSource};
use super::module::Module;
use crate::error_ext::resolution_error;

/// Handle to one composed graph
///
/// Cloning is cheap and yields a handle to the same graph; singletons are
/// shared between clones.
#[derive(Clone)]
pub struct Injector {
    catalog: Catalog,
    stage: Stage,
    depth: usize,
}

impl Injector {
    pub(crate) fn new(catalog: Catalog, stage: Stage, depth: usize) -> Self {
        Self {
            catalog,
            stage,
            depth,
        }
    }

    /// Resolve the single binding of `T`
    pub fn get_instance<T>(&self) -> Result<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.catalog.get_one::<T>().map_err(resolution_error)
    }

    /// Resolve `T` if it is bound
    pub fn get_optional<T>(&self) -> Result<Option<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.catalog
            .get::<Maybe<OneOf<T>>>()
            .map_err(resolution_error)
    }

    /// Resolve every binding of `T`, this graph's first, then its ancestors'
    pub fn get_all<T>(&self) -> Result<Vec<Arc<T>>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.catalog.get::<AllOf<T>>().map_err(resolution_error)
    }

    /// Derive a child graph that sees this graph's bindings plus those of
    /// `modules`
    ///
    /// A module instance listed more than once is configured only at its
    /// first position.
    pub fn create_child_injector<I>(&self, modules: I) -> Result<Injector>
    where
        I: IntoIterator<Item = Arc<dyn Module>>,
    {
        let modules = distinct_modules(modules);
        info!(
            parent_depth = self.depth,
            modules = modules.len(),
            "Creating child injector"
        );
        let sources: Vec<BindingSource<'_>> = modules
            .iter()
            .map(|module| BindingSource::Module(module.as_ref()))
            .collect();
        engine::compose(Some(self), self.stage, &sources)
    }

    /// Stage inherited from the bootstrap graph
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// 0 for the bootstrap graph, parent depth + 1 for children
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The underlying dill catalog
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

// Identity, not equality: two instances of the same module type both run.
fn distinct_modules<I>(modules: I) -> Vec<Arc<dyn Module>>
where
    I: IntoIterator<Item = Arc<dyn Module>>,
{
    let mut distinct: Vec<Arc<dyn Module>> = Vec::new();
    for module in modules {
        if distinct.iter().any(|seen| Arc::ptr_eq(seen, &module)) {
            debug!(module = %module.name(), "Skipping repeated module instance");
            continue;
        }
        distinct.push(module);
    }
    distinct
}

impl std::fmt::Debug for Injector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Injector")
            .field("stage", &self.stage)
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
