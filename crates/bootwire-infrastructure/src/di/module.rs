//! Binding units
//!
//! A [`Module`] declares bindings for the application graph; a
//! [`BootstrapModule`] declares bindings for the bootstrap graph. Both are
//! plain objects whose `configure` runs once per engine invocation, so a
//! module shared by several injectors contributes fresh bindings each time.

use super::binder::{Binder, BootstrapBinder};

/// Unit of application binding declarations
pub trait Module: Send + Sync {
    /// Declare bindings
    fn configure(&self, binder: &mut Binder<'_>);

    /// Name reported in logs and binding errors
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Unit of bootstrap binding declarations
///
/// Runs while the bootstrap graph is built, before any application module.
/// Lifecycle listeners are registered here.
pub trait BootstrapModule: Send + Sync {
    /// Declare bootstrap bindings
    fn configure(&self, binder: &mut BootstrapBinder<'_>);

    /// Name reported in logs and binding errors
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// [`Module`] backed by a closure, see [`module_fn`]
pub struct FnModule<F> {
    name: String,
    configure: F,
}

/// Turn a closure into a named [`Module`]
///
/// ```ignore
/// let greeter = module_fn("greeter", |binder| {
///     binder.add::<EnglishGreeter>();
/// });
/// ```
pub fn module_fn<F>(name: impl Into<String>, configure: F) -> FnModule<F>
where
    F: Fn(&mut Binder<'_>) + Send + Sync,
{
    FnModule {
        name: name.into(),
        configure,
    }
}

impl<F> Module for FnModule<F>
where
    F: Fn(&mut Binder<'_>) + Send + Sync,
{
    fn configure(&self, binder: &mut Binder<'_>) {
        (self.configure)(binder);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Build a `Vec<Arc<dyn Module>>` from module values
///
/// ```ignore
/// let injector = LifecycleInjector::builder()
///     .with_modules(modules![GreeterModule, ClockModule])
///     .build()?;
/// ```
#[macro_export]
macro_rules! modules {
    ($($module:expr),* $(,)?) => {
        ::std::vec![
            $(::std::sync::Arc::new($module) as ::std::sync::Arc<dyn $crate::di::Module>),*
        ]
    };
}
