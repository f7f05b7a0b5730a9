//! Lifecycle coordinator
//!
//! ```text
//!                 ┌──────────────────┐
//!                 │ LifecycleManager │──► listeners (every transition)
//!                 └────────┬─────────┘
//!      start: 1 → 2 → 3    │    close: 3 → 2 → 1
//!        ┌─────────────────┼─────────────────┐
//!        ▼                 ▼                 ▼
//!   ┌──────────┐     ┌──────────┐     ┌──────────┐
//!   │ object 1 │     │ object 2 │     │ object 3 │
//!   └──────────┘     └──────────┘     └──────────┘
//! ```
//!
//! The manager is declared as a singleton in the bootstrap graph, so every
//! injector derived from a [`LifecycleInjector`](crate::di::LifecycleInjector)
//! resolves the same instance.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Aliased: dill's `#[component]` expands to the two-parameter `Result`.
use bootwire_domain::error::{Error, Result as DomainResult};
use bootwire_domain::ports::{LifecycleListener, LifecycleManaged, LifecycleState};
use dill::{Singleton, component, scope};
use tracing::{debug, error, info, warn};

use crate::constants::LIFECYCLE_MANAGER_SUBJECT;

struct ManagedEntry {
    object: Arc<dyn LifecycleManaged>,
    state: LifecycleState,
}

struct ManagerState {
    state: LifecycleState,
    objects: Vec<ManagedEntry>,
}

/// Starts managed objects in registration order and stops them in reverse
pub struct LifecycleManager {
    listeners: Vec<Arc<dyn LifecycleListener>>,
    inner: Mutex<ManagerState>,
}

#[component(pub)]
#[scope(Singleton)]
impl LifecycleManager {
    /// Create a coordinator that reports to the given listeners
    pub fn new(listeners: Vec<Arc<dyn LifecycleListener>>) -> Self {
        Self {
            listeners,
            inner: Mutex::new(ManagerState {
                state: LifecycleState::Latent,
                objects: Vec::new(),
            }),
        }
    }
}

impl LifecycleManager {
    /// Current state of the coordinator
    pub fn state(&self) -> LifecycleState {
        self.lock().state
    }

    /// State of the first managed object registered under `name`
    pub fn object_state(&self, name: &str) -> Option<LifecycleState> {
        self.lock()
            .objects
            .iter()
            .find(|entry| entry.object.name() == name)
            .map(|entry| entry.state)
    }

    /// Number of registered objects
    pub fn managed_count(&self) -> usize {
        self.lock().objects.len()
    }

    /// Number of listeners injected at construction
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Register an object
    ///
    /// Objects added while the coordinator is starting or running are started
    /// right away.
    pub fn add(&self, object: Arc<dyn LifecycleManaged>) -> DomainResult<()> {
        let name = object.name().to_string();
        let (index, start_now) = {
            let mut inner = self.lock();
            let start_now = match inner.state {
                LifecycleState::Latent => false,
                LifecycleState::Starting | LifecycleState::Started => true,
                state @ (LifecycleState::Closing | LifecycleState::Closed) => {
                    return Err(Error::lifecycle(format!(
                        "Cannot add `{name}`: lifecycle manager is {state}"
                    )));
                }
            };
            inner.objects.push(ManagedEntry {
                object: Arc::clone(&object),
                state: LifecycleState::Latent,
            });
            (inner.objects.len() - 1, start_now)
        };

        debug!(object = %name, "Registered lifecycle-managed object");
        self.notify(&name, LifecycleState::Latent);

        if start_now {
            self.start_object(index, object.as_ref())?;
        }
        Ok(())
    }

    /// Start every registered object in registration order
    ///
    /// If an object fails to start, the ones already started are stopped in
    /// reverse order and the coordinator ends up closed.
    pub fn start(&self) -> DomainResult<()> {
        let pending = {
            let mut inner = self.lock();
            if inner.state != LifecycleState::Latent {
                return Err(Error::lifecycle(format!(
                    "Cannot start: lifecycle manager is {}",
                    inner.state
                )));
            }
            inner.state = LifecycleState::Starting;
            inner
                .objects
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.state == LifecycleState::Latent)
                .map(|(index, entry)| (index, Arc::clone(&entry.object)))
                .collect::<Vec<_>>()
        };

        info!(objects = pending.len(), "Starting lifecycle manager");
        self.notify(LIFECYCLE_MANAGER_SUBJECT, LifecycleState::Starting);

        for (index, object) in &pending {
            if let Err(err) = self.start_object(*index, object.as_ref()) {
                error!(object = %object.name(), error = %err, "Start failed, rolling back");
                for (started, object) in self.objects_in(LifecycleState::Started).iter().rev() {
                    self.stop_object(*started, object.as_ref());
                }
                self.set_state(LifecycleState::Closed);
                return Err(err);
            }
        }

        self.set_state(LifecycleState::Started);
        info!("Lifecycle manager started");
        Ok(())
    }

    /// Stop every started object in reverse registration order
    pub fn close(&self) -> DomainResult<()> {
        {
            let mut inner = self.lock();
            if inner.state != LifecycleState::Started {
                return Err(Error::lifecycle(format!(
                    "Cannot close: lifecycle manager is {}",
                    inner.state
                )));
            }
            inner.state = LifecycleState::Closing;
        }
        let started = self.objects_in(LifecycleState::Started);

        info!(objects = started.len(), "Closing lifecycle manager");
        self.notify(LIFECYCLE_MANAGER_SUBJECT, LifecycleState::Closing);

        for (index, object) in started.iter().rev() {
            self.stop_object(*index, object.as_ref());
        }

        self.set_state(LifecycleState::Closed);
        info!("Lifecycle manager closed");
        Ok(())
    }

    // Includes objects added while starting, not just the initial snapshot.
    fn objects_in(&self, state: LifecycleState) -> Vec<(usize, Arc<dyn LifecycleManaged>)> {
        self.lock()
            .objects
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.state == state)
            .map(|(index, entry)| (index, Arc::clone(&entry.object)))
            .collect()
    }

    fn start_object(&self, index: usize, object: &dyn LifecycleManaged) -> DomainResult<()> {
        let name = object.name();
        self.set_object_state(index, name, LifecycleState::Starting);
        match object.start() {
            Ok(()) => {
                self.set_object_state(index, name, LifecycleState::Started);
                debug!(object = %name, "Started");
                Ok(())
            }
            Err(err) => {
                self.set_object_state(index, name, LifecycleState::Closed);
                Err(Error::lifecycle(format!("Failed to start `{name}`: {err}")))
            }
        }
    }

    // Stop failures are logged; the remaining objects still get stopped.
    fn stop_object(&self, index: usize, object: &dyn LifecycleManaged) {
        let name = object.name();
        self.set_object_state(index, name, LifecycleState::Closing);
        if let Err(err) = object.stop() {
            warn!(object = %name, error = %err, "Stop failed");
        }
        self.set_object_state(index, name, LifecycleState::Closed);
    }

    fn set_state(&self, state: LifecycleState) {
        self.lock().state = state;
        self.notify(LIFECYCLE_MANAGER_SUBJECT, state);
    }

    fn set_object_state(&self, index: usize, name: &str, state: LifecycleState) {
        if let Some(entry) = self.lock().objects.get_mut(index) {
            entry.state = state;
        }
        self.notify(name, state);
    }

    // Listeners run without the lock held so they may call back into the manager.
    fn notify(&self, subject: &str, state: LifecycleState) {
        for listener in &self.listeners {
            listener.state_changed(subject, state);
        }
    }

    fn lock(&self) -> MutexGuard<'_, ManagerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for LifecycleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("LifecycleManager")
            .field("state", &inner.state)
            .field("objects", &inner.objects.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
