//! Error extension utilities
//!
//! Turns foreign errors (I/O, figment, toml, dill) into domain errors while
//! keeping the original as the `source`.

use std::fmt::Display;

use bootwire_domain::error::{Error, Result};
use dill::InjectionError;

/// Attach a message to a foreign error and classify it
///
/// The message is prefixed to the original error's text.
///
/// ```ignore
/// use bootwire_infrastructure::error_ext::ErrorContext;
///
/// std::fs::write(&path, contents)
///     .io_context(format!("Failed to write {}", path.display()))?;
///
/// catalog_builder
///     .validate()
///     .composition_context("Bootstrap graph is incomplete")?;
/// ```
pub trait ErrorContext<T>: Sized {
    /// Classify as [`Error::Io`]
    fn io_context(self, context: impl Display) -> Result<T>;

    /// Classify as [`Error::Configuration`]
    fn config_context(self, context: impl Display) -> Result<T>;

    /// Classify as [`Error::Composition`]
    fn composition_context(self, context: impl Display) -> Result<T>;

    /// Like [`composition_context`](Self::composition_context), building the
    /// message only on failure
    fn with_composition_context<C, F>(self, context: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context(self, context: impl Display) -> Result<T> {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }

    fn config_context(self, context: impl Display) -> Result<T> {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }

    fn composition_context(self, context: impl Display) -> Result<T> {
        self.map_err(|err| Error::composition_with_source(format!("{context}: {err}"), err))
    }

    fn with_composition_context<C, F>(self, context: F) -> Result<T>
    where
        C: Display,
        F: FnOnce() -> C,
    {
        self.map_err(|err| Error::composition_with_source(format!("{}: {err}", context()), err))
    }
}

/// Map a dill lookup failure onto the domain error
///
/// Missing and ambiguous bindings get their own variants so callers can
/// match on them; anything else is a composition problem.
pub fn resolution_error(error: InjectionError) -> Error {
    match error {
        InjectionError::Unregistered(err) => Error::unsatisfied_binding(err.dep_type.name),
        InjectionError::Ambiguous(err) => Error::ambiguous_binding(err.dep_type.name),
        other => Error::composition_with_source("Failed to resolve dependency", other),
    }
}
