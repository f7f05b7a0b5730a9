//! Forward reference to the lifecycle coordinator
//!
//! The bootstrap graph has to exist before the coordinator can be resolved
//! from it, yet bindings inside that graph may want the coordinator. The cell
//! is registered in the graph empty and filled exactly once, right after the
//! coordinator is resolved. Code holding the cell must tolerate reading it
//! while it is still empty (for example from a constructor run during
//! bootstrap).

use std::sync::Arc;

use bootwire_domain::error::{Error, Result};
use once_cell::sync::OnceCell;

use super::manager::LifecycleManager;

/// Write-once handle to the [`LifecycleManager`] of a bootstrap graph
///
/// Inject it as `Arc<LifecycleManagerRef>`.
#[derive(Debug, Default)]
pub struct LifecycleManagerRef {
    cell: OnceCell<Arc<LifecycleManager>>,
}

impl LifecycleManagerRef {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Publish the coordinator
    ///
    /// # Panics
    ///
    /// Publishing twice is a composition bug and panics.
    pub(crate) fn publish(&self, manager: Arc<LifecycleManager>) {
        assert!(
            self.cell.set(manager).is_ok(),
            "lifecycle manager reference published twice"
        );
    }

    /// The coordinator, or `None` while bootstrap is still in progress
    pub fn get(&self) -> Option<Arc<LifecycleManager>> {
        self.cell.get().cloned()
    }

    /// Whether the coordinator has been published
    pub fn is_published(&self) -> bool {
        self.cell.get().is_some()
    }

    /// The coordinator, failing if bootstrap has not completed
    pub fn require(&self) -> Result<Arc<LifecycleManager>> {
        self.get().ok_or_else(|| {
            Error::lifecycle("Lifecycle manager is not available until bootstrap completes")
        })
    }
}
