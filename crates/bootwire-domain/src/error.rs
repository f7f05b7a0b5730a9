//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for bootwire
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// One or more modules declared invalid bindings
    #[error("Binding error: {}", .messages.join("; "))]
    Binding {
        /// Every problem reported while the modules were configured
        messages: Vec<String>,
    },

    /// The object graph could not be composed
    #[error("Composition error: {message}")]
    Composition {
        /// Description of the composition failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A requested type has no binding in the injector or its ancestors
    #[error("No binding for `{type_name}`")]
    UnsatisfiedBinding {
        /// Name of the requested type
        type_name: String,
    },

    /// A requested type has more than one binding
    #[error("Ambiguous binding for `{type_name}`")]
    AmbiguousBinding {
        /// Name of the requested type
        type_name: String,
    },

    /// Lifecycle coordinator error
    #[error("Lifecycle error: {message}")]
    Lifecycle {
        /// Description of the lifecycle error
        message: String,
    },
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Injection error creation methods
impl Error {
    /// Create a binding error from the collected messages
    pub fn binding<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Binding {
            messages: messages.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a composition error
    pub fn composition<S: Into<String>>(message: S) -> Self {
        Self::Composition {
            message: message.into(),
            source: None,
        }
    }

    /// Create a composition error with source
    pub fn composition_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Composition {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an unsatisfied binding error
    pub fn unsatisfied_binding<S: Into<String>>(type_name: S) -> Self {
        Self::UnsatisfiedBinding {
            type_name: type_name.into(),
        }
    }

    /// Create an ambiguous binding error
    pub fn ambiguous_binding<S: Into<String>>(type_name: S) -> Self {
        Self::AmbiguousBinding {
            type_name: type_name.into(),
        }
    }
}

// Lifecycle error creation methods
impl Error {
    /// Create a lifecycle error
    pub fn lifecycle<S: Into<String>>(message: S) -> Self {
        Self::Lifecycle {
            message: message.into(),
        }
    }
}

impl Error {
    /// True for errors raised while composing an object graph, as opposed to
    /// resolving from one that already exists
    pub fn is_composition_failure(&self) -> bool {
        matches!(self, Self::Binding { .. } | Self::Composition { .. })
    }
}
