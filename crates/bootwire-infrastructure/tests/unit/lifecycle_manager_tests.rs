//! Lifecycle manager tests

use std::sync::{Arc, Mutex};

use bootwire_domain::{Error, LifecycleListener, LifecycleManaged, LifecycleState, Result};
use bootwire_infrastructure::constants::LIFECYCLE_MANAGER_SUBJECT;
use bootwire_infrastructure::lifecycle::LifecycleManager;

type Journal = Arc<Mutex<Vec<String>>>;

struct Service {
    name: String,
    journal: Journal,
    fail_start: bool,
}

impl Service {
    fn new(name: &str, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            journal: Arc::clone(journal),
            fail_start: false,
        })
    }

    fn failing(name: &str, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            journal: Arc::clone(journal),
            fail_start: true,
        })
    }
}

impl LifecycleManaged for Service {
    fn name(&self) -> &str {
        &self.name
    }

    fn start(&self) -> Result<()> {
        if self.fail_start {
            return Err(Error::lifecycle("port in use"));
        }
        self.journal
            .lock()
            .expect("journal")
            .push(format!("start {}", self.name));
        Ok(())
    }

    fn stop(&self) -> Result<()> {
        self.journal
            .lock()
            .expect("journal")
            .push(format!("stop {}", self.name));
        Ok(())
    }
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<(String, LifecycleState)>>,
}

impl Recorder {
    fn manager_states(&self) -> Vec<LifecycleState> {
        self.events
            .lock()
            .expect("events")
            .iter()
            .filter(|(subject, _)| subject == LIFECYCLE_MANAGER_SUBJECT)
            .map(|(_, state)| *state)
            .collect()
    }

    fn states_of(&self, subject: &str) -> Vec<LifecycleState> {
        self.events
            .lock()
            .expect("events")
            .iter()
            .filter(|(s, _)| s == subject)
            .map(|(_, state)| *state)
            .collect()
    }
}

impl LifecycleListener for Recorder {
    fn state_changed(&self, subject: &str, state: LifecycleState) {
        self.events
            .lock()
            .expect("events")
            .push((subject.to_string(), state));
    }
}

fn entries(journal: &Journal) -> Vec<String> {
    journal.lock().expect("journal").clone()
}

// ============================================================================
// Ordering
// ============================================================================

/// Test that objects start in registration order and stop in reverse
#[test]
fn test_start_and_close_order() {
    let journal = Journal::default();
    let manager = LifecycleManager::new(Vec::new());
    for name in ["db", "cache", "http"] {
        manager.add(Service::new(name, &journal)).expect("add");
    }

    manager.start().expect("start");
    assert_eq!(manager.state(), LifecycleState::Started);
    manager.close().expect("close");
    assert_eq!(manager.state(), LifecycleState::Closed);

    assert_eq!(
        entries(&journal),
        vec![
            "start db",
            "start cache",
            "start http",
            "stop http",
            "stop cache",
            "stop db"
        ]
    );
}

/// Test that an object added after start is started immediately
#[test]
fn test_add_after_start_starts_object() {
    let journal = Journal::default();
    let manager = LifecycleManager::new(Vec::new());
    manager.start().expect("start");

    manager.add(Service::new("late", &journal)).expect("add");

    assert_eq!(manager.object_state("late"), Some(LifecycleState::Started));
    assert_eq!(entries(&journal), vec!["start late"]);
    assert_eq!(manager.managed_count(), 1);
}

// ============================================================================
// Invalid transitions
// ============================================================================

/// Test that adding after close is rejected
#[test]
fn test_add_after_close_fails() {
    let journal = Journal::default();
    let manager = LifecycleManager::new(Vec::new());
    manager.start().expect("start");
    manager.close().expect("close");

    let result = manager.add(Service::new("too-late", &journal));
    assert!(matches!(result, Err(Error::Lifecycle { .. })));
    assert_eq!(manager.managed_count(), 0);
}

/// Test that start twice and close before start are rejected
#[test]
fn test_invalid_transitions() {
    let manager = LifecycleManager::new(Vec::new());
    assert!(matches!(manager.close(), Err(Error::Lifecycle { .. })));

    manager.start().expect("start");
    assert!(matches!(manager.start(), Err(Error::Lifecycle { .. })));

    manager.close().expect("close");
    assert!(matches!(manager.close(), Err(Error::Lifecycle { .. })));
}

/// Test that a failed start rolls back the objects already started
#[test]
fn test_failed_start_rolls_back() {
    let journal = Journal::default();
    let manager = LifecycleManager::new(Vec::new());
    manager.add(Service::new("db", &journal)).expect("add");
    manager.add(Service::new("cache", &journal)).expect("add");
    manager
        .add(Service::failing("http", &journal))
        .expect("add");

    let err = manager.start().expect_err("start must fail");

    assert!(err.to_string().contains("http"), "{err}");
    assert_eq!(manager.state(), LifecycleState::Closed);
    assert_eq!(manager.object_state("http"), Some(LifecycleState::Closed));
    assert_eq!(
        entries(&journal),
        vec!["start db", "start cache", "stop cache", "stop db"]
    );
}

/// Registers another object from inside its own start
struct Spawner {
    manager: Arc<LifecycleManager>,
    spawned: Arc<Service>,
}

impl LifecycleManaged for Spawner {
    fn name(&self) -> &str {
        "spawner"
    }

    fn start(&self) -> Result<()> {
        self.manager.add(self.spawned.clone())
    }
}

/// Test that rollback also stops objects added while starting
#[test]
fn test_failed_start_stops_objects_added_during_start() {
    let journal = Journal::default();
    let manager = Arc::new(LifecycleManager::new(Vec::new()));
    manager
        .add(Arc::new(Spawner {
            manager: Arc::clone(&manager),
            spawned: Service::new("worker", &journal),
        }))
        .expect("add");
    manager
        .add(Service::failing("http", &journal))
        .expect("add");

    assert!(manager.start().is_err());

    assert_eq!(manager.state(), LifecycleState::Closed);
    assert_eq!(manager.object_state("worker"), Some(LifecycleState::Closed));
    assert_eq!(manager.object_state("spawner"), Some(LifecycleState::Closed));
    assert_eq!(entries(&journal), vec!["start worker", "stop worker"]);
}

// ============================================================================
// Listeners
// ============================================================================

/// Test that listeners see manager and object transitions
#[test]
fn test_listeners_are_notified() {
    let journal = Journal::default();
    let recorder = Arc::new(Recorder::default());
    let manager = LifecycleManager::new(vec![recorder.clone() as Arc<dyn LifecycleListener>]);
    assert_eq!(manager.listener_count(), 1);

    manager.add(Service::new("db", &journal)).expect("add");
    manager.start().expect("start");
    manager.close().expect("close");

    assert_eq!(
        recorder.manager_states(),
        vec![
            LifecycleState::Starting,
            LifecycleState::Started,
            LifecycleState::Closing,
            LifecycleState::Closed
        ]
    );
    assert_eq!(
        recorder.states_of("db"),
        vec![
            LifecycleState::Latent,
            LifecycleState::Starting,
            LifecycleState::Started,
            LifecycleState::Closing,
            LifecycleState::Closed
        ]
    );
}
