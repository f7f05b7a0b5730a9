//! Framework-owned binding units of the bootstrap graph
//!
//! Bootstrap invocation order:
//!
//! ```text
//! InternalBootstrapModule ─► user BootstrapModule ─► InternalLifecycleModule
//!   (forward ref, stage)        (listeners, ...)       (LifecycleManager)
//! ```

use std::sync::Arc;

use bootwire_domain::Stage;

use super::binder::Binder;
use super::module::Module;
use crate::constants::{INTERNAL_BOOTSTRAP_MODULE, INTERNAL_LIFECYCLE_MODULE};
use crate::lifecycle::{LifecycleManager, LifecycleManagerRef};

/// Seeds the bootstrap graph with the forward reference and the stage
pub(crate) struct InternalBootstrapModule {
    manager_ref: Arc<LifecycleManagerRef>,
    stage: Stage,
}

impl InternalBootstrapModule {
    pub(crate) fn new(manager_ref: Arc<LifecycleManagerRef>, stage: Stage) -> Self {
        Self { manager_ref, stage }
    }
}

impl Module for InternalBootstrapModule {
    fn configure(&self, binder: &mut Binder<'_>) {
        binder
            .add_shared(Arc::clone(&self.manager_ref))
            .add_value(self.stage);
    }

    fn name(&self) -> &str {
        INTERNAL_BOOTSTRAP_MODULE
    }
}

/// Declares the lifecycle manager singleton
pub(crate) struct InternalLifecycleModule;

impl Module for InternalLifecycleModule {
    fn configure(&self, binder: &mut Binder<'_>) {
        binder.add::<LifecycleManager>();
    }

    fn name(&self) -> &str {
        INTERNAL_LIFECYCLE_MODULE
    }
}
