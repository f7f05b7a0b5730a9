//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Stage`] | Validation and instantiation strictness of an injector |

/// Injector stage
pub mod stage;

pub use stage::Stage;
