//! Injector stage

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// How strictly an injector checks and instantiates its bindings.
///
/// The stage chosen on the builder applies to the bootstrap injector and is
/// inherited by every overlay created from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Validate every binding up front and instantiate singletons eagerly
    #[default]
    Production,
    /// Skip up-front validation; everything is resolved on first use
    Development,
}

impl Stage {
    /// Whether the injector must validate the dependency graph before it is
    /// handed out
    pub fn validates_bindings(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Whether singletons declared by an injector are created while the
    /// injector is being built
    pub fn eager_singletons(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Lowercase name, as used in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Development => "development",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "development" | "dev" => Ok(Self::Development),
            other => Err(Error::configuration(format!(
                "Invalid stage '{other}'. Must be one of: production, development"
            ))),
        }
    }
}
