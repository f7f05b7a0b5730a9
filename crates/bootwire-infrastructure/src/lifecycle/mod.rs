//! Lifecycle coordination
//!
//! | Item | Description |
//! |------|-------------|
//! | [`LifecycleManager`] | Starts and closes managed objects, notifies listeners |
//! | [`LifecycleManagerRef`] | Write-once cell that publishes the manager after bootstrap |

pub(crate) mod listener;
/// Lifecycle coordinator
pub mod manager;
/// Forward reference to the coordinator
pub mod reference;

pub use manager::LifecycleManager;
pub use reference::LifecycleManagerRef;
