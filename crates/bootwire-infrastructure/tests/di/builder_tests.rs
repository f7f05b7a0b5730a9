//! Builder accumulation tests

use bootwire_domain::{Error, Stage};
use bootwire_infrastructure::config::BootwireConfig;
use bootwire_infrastructure::di::{LifecycleInjector, LifecycleInjectorBuilder};
use bootwire_infrastructure::modules;

use super::fixtures::{
    ClockModule, EnglishGreeter, FixedClock, Greeter, GreeterModule, SessionModule,
    SessionRegistry,
};

fn module_names(builder: &LifecycleInjectorBuilder) -> Vec<String> {
    builder
        .modules()
        .iter()
        .map(|m| m.name().rsplit("::").next().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Module accumulation
// ============================================================================

/// Test that with_modules replaces earlier modules
#[test]
fn test_with_modules_replaces() {
    let builder = LifecycleInjector::builder()
        .with_modules(modules![GreeterModule, ClockModule])
        .with_modules(modules![SessionModule]);
    assert_eq!(module_names(&builder), vec!["SessionModule"]);

    let root = builder
        .in_stage(Stage::Development)
        .build()
        .expect("bootstrap");
    let injector = root.create_injector().expect("injector");

    assert!(injector.get_instance::<SessionRegistry>().is_ok());
    let greeter = injector.get_instance::<dyn Greeter>();
    assert!(matches!(greeter, Err(Error::UnsatisfiedBinding { .. })));
}

/// Test that with_additional_modules appends in call order
#[test]
fn test_with_additional_modules_appends() {
    let builder = LifecycleInjector::builder()
        .with_modules(modules![GreeterModule])
        .with_additional_modules(modules![ClockModule])
        .with_additional_modules(modules![SessionModule]);
    assert_eq!(
        module_names(&builder),
        vec!["GreeterModule", "ClockModule", "SessionModule"]
    );

    let root = builder.build().expect("bootstrap");
    let injector = root.create_injector().expect("injector");

    assert!(injector.get_instance::<dyn Greeter>().is_ok());
    assert!(injector.get_instance::<FixedClock>().is_ok());
    assert!(injector.get_instance::<EnglishGreeter>().is_ok());
    assert!(injector.get_instance::<SessionRegistry>().is_ok());
}

/// Test that the builder defaults to the production stage
#[test]
fn test_default_stage_is_production() {
    let builder = LifecycleInjector::builder();
    assert_eq!(builder.stage(), Stage::Production);

    let root = builder.build().expect("bootstrap");
    assert_eq!(root.stage(), Stage::Production);
    assert!(root.modules().is_empty());
}

/// Test that loaded configuration sets the stage
#[test]
fn test_with_config_applies_stage() {
    let config = BootwireConfig {
        stage: Stage::Development,
        ..BootwireConfig::default()
    };
    let root = LifecycleInjector::builder()
        .with_config(&config)
        .build()
        .expect("bootstrap");

    assert_eq!(root.stage(), Stage::Development);
    let injector = root.create_injector().expect("injector");
    assert_eq!(injector.stage(), Stage::Development);
}

/// Test that a cloned builder produces an independent bootstrap graph
#[test]
fn test_cloned_builder_builds_independent_root() {
    let builder = LifecycleInjector::builder().with_modules(modules![GreeterModule]);
    let first = builder.clone().build().expect("first bootstrap");
    let second = builder.build().expect("second bootstrap");

    assert!(!std::sync::Arc::ptr_eq(
        &first.lifecycle_manager(),
        &second.lifecycle_manager()
    ));
    assert_eq!(first.modules().len(), second.modules().len());
}

/// Test that the builder shortcut builds and overlays in one step
#[test]
fn test_builder_create_injector_shortcut() {
    let injector = LifecycleInjector::builder()
        .with_modules(modules![GreeterModule])
        .create_injector()
        .expect("injector");

    assert_eq!(injector.depth(), 1);
    let greeter = injector.get_instance::<dyn Greeter>().expect("greeter");
    assert_eq!(greeter.greet(), "hello");
    assert!(
        injector
            .get_instance::<bootwire_infrastructure::lifecycle::LifecycleManager>()
            .is_ok()
    );
}
