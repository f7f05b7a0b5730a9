//! Adapter that lets plain listener values be bound as `dyn LifecycleListener`

use std::sync::Arc;

use bootwire_domain::ports::{LifecycleListener, LifecycleState};
use dill::CastTo;

/// Owns one listener registered through
/// [`BootstrapBinder::add_lifecycle_listener`](crate::di::BootstrapBinder::add_lifecycle_listener)
pub(crate) struct ListenerSlot<L>(pub(crate) L);

impl<L: LifecycleListener> LifecycleListener for ListenerSlot<L> {
    fn state_changed(&self, subject: &str, state: LifecycleState) {
        self.0.state_changed(subject, state);
    }
}

impl<L: LifecycleListener + 'static> CastTo<dyn LifecycleListener> for ListenerSlot<L> {
    fn cast(self: Arc<Self>) -> Arc<dyn LifecycleListener> {
        self
    }
}
