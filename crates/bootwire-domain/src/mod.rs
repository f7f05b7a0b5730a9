//! # Domain Layer
//!
//! Core types shared by every layer of bootwire. Nothing in here knows about
//! the injection engine; the infrastructure crate builds on these types.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error enum and result alias |
//! | [`value_objects`] | [`Stage`] and other plain values |
//! | [`ports`] | Lifecycle traits implemented by managed objects and listeners |

/// Error handling types
pub mod error;
/// Port traits for lifecycle participants
pub mod ports;
/// Immutable value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{LifecycleListener, LifecycleManaged, LifecycleState};
pub use value_objects::Stage;
