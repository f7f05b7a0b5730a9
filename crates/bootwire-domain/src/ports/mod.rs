//! Domain Port Interfaces
//!
//! Traits the lifecycle coordinator talks to. Application code implements
//! them; the infrastructure layer drives them.

/// Lifecycle participants and observers
pub mod lifecycle;

pub use lifecycle::{LifecycleListener, LifecycleManaged, LifecycleState};
