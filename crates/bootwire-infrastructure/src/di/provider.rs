//! Singleton provider binding
//!
//! A factory that runs at most once; its product is shared by everything
//! that resolves the type. Unlike `CatalogBuilder::add_value_lazy` it is
//! singleton-scoped, so singletons may depend on it.

use std::any::Any;
use std::sync::Arc;

use dill::{
    Builder, Catalog, CatalogBuilder, DependencyInfo, InjectionContext, InjectionError, Singleton,
    TypeInfo, TypedBuilder,
};
use once_cell::sync::OnceCell;

/// Builder registered by [`Binder::add_provider`](super::Binder::add_provider)
pub struct ProviderBuilder<F, T> {
    factory: F,
    instance: OnceCell<Arc<T>>,
}

impl<F, T> ProviderBuilder<F, T>
where
    F: Fn() -> T,
{
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            instance: OnceCell::new(),
        }
    }
}

impl<F, T> Builder for ProviderBuilder<F, T>
where
    F: Fn() -> T + Send + Sync,
    T: Send + Sync + 'static,
{
    fn instance_type(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn scope_type(&self) -> TypeInfo {
        TypeInfo::of::<Singleton>()
    }

    fn interfaces(&self, _clb: &mut dyn FnMut(&TypeInfo) -> bool) {}

    fn dependencies(&self, _clb: &mut dyn FnMut(&DependencyInfo) -> bool) {}

    fn metadata<'a>(&'a self, _clb: &mut dyn FnMut(&'a dyn Any) -> bool) {}

    fn get_any(
        &self,
        cat: &Catalog,
        ctx: &InjectionContext,
    ) -> Result<Arc<dyn Any + Send + Sync>, InjectionError> {
        Ok(TypedBuilder::get_with_context(self, cat, ctx)?)
    }
}

impl<F, T> TypedBuilder<T> for ProviderBuilder<F, T>
where
    F: Fn() -> T + Send + Sync,
    T: Send + Sync + 'static,
{
    fn get_with_context(
        &self,
        _cat: &Catalog,
        _ctx: &InjectionContext,
    ) -> Result<Arc<T>, InjectionError> {
        Ok(Arc::clone(
            self.instance.get_or_init(|| Arc::new((self.factory)())),
        ))
    }

    fn bind_interfaces(&self, _cat: &mut CatalogBuilder) {}
}
