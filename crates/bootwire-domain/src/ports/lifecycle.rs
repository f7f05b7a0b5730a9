//! Lifecycle Ports
//!
//! The lifecycle coordinator starts registered objects in registration order
//! and closes them in reverse. Listeners observe every transition, both of the
//! coordinator itself and of each managed object.
//!
//! ```text
//! Latent ──start──► Starting ──► Started ──close──► Closing ──► Closed
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// State of the coordinator or of a single managed object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifecycleState {
    /// Registered but not started
    #[default]
    Latent,
    /// Start in progress
    Starting,
    /// Running
    Started,
    /// Shutdown in progress
    Closing,
    /// Shut down, or failed to start
    Closed,
}

impl LifecycleState {
    /// Lowercase name of the state
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Latent => "latent",
            Self::Starting => "starting",
            Self::Started => "started",
            Self::Closing => "closing",
            Self::Closed => "closed",
        }
    }

    /// Whether no further transition is possible
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An object whose start and stop are driven by the lifecycle coordinator
pub trait LifecycleManaged: Send + Sync {
    /// Name used in logs and listener notifications
    fn name(&self) -> &str;

    /// Called once when the coordinator starts, or immediately when the
    /// object is added to a coordinator that is already running
    fn start(&self) -> Result<()> {
        Ok(())
    }

    /// Called once when the coordinator closes
    fn stop(&self) -> Result<()> {
        Ok(())
    }
}

/// Observer of lifecycle transitions
pub trait LifecycleListener: Send + Sync {
    /// `subject` is the managed object's name, or the coordinator's own
    /// subject name for coordinator transitions.
    fn state_changed(&self, subject: &str, state: LifecycleState);
}
