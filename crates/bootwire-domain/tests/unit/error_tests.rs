//! Unit tests for domain error types

use std::error::Error as _;

use bootwire_domain::Error;

#[test]
fn test_configuration_error() {
    let error = Error::configuration("missing stage");
    match error {
        Error::Configuration { message, source } => {
            assert_eq!(message, "missing stage");
            assert!(source.is_none());
        }
        _ => panic!("Expected Configuration error"),
    }
}

#[test]
fn test_configuration_error_keeps_source() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "bootwire.toml");
    let error = Error::configuration_with_source("Failed to read config", io);

    assert!(error.to_string().contains("Failed to read config"));
    assert!(error.source().is_some());
}

#[test]
fn test_binding_error_lists_every_message() {
    let error = Error::binding(["first problem", "second problem"]);

    match &error {
        Error::Binding { messages } => assert_eq!(messages.len(), 2),
        _ => panic!("Expected Binding error"),
    }
    let display = error.to_string();
    assert!(display.contains("first problem; second problem"));
}

#[test]
fn test_unsatisfied_binding_error() {
    let error = Error::unsatisfied_binding("dyn app::Greeter");
    match &error {
        Error::UnsatisfiedBinding { type_name } => assert_eq!(type_name, "dyn app::Greeter"),
        _ => panic!("Expected UnsatisfiedBinding error"),
    }
    assert_eq!(error.to_string(), "No binding for `dyn app::Greeter`");
}

#[test]
fn test_ambiguous_binding_error() {
    let error = Error::ambiguous_binding("dyn app::Greeter");
    assert!(matches!(error, Error::AmbiguousBinding { .. }));
}

#[test]
fn test_lifecycle_error() {
    let error = Error::lifecycle("already closed");
    match error {
        Error::Lifecycle { message } => assert_eq!(message, "already closed"),
        _ => panic!("Expected Lifecycle error"),
    }
}

#[test]
fn test_io_error_with_source() {
    let io = std::io::Error::other("disk full");
    let error = Error::io_with_source("Failed to write config", io);
    match &error {
        Error::Io { message, source } => {
            assert_eq!(message, "Failed to write config");
            assert!(source.is_some());
        }
        _ => panic!("Expected Io error"),
    }
}

#[test]
fn test_composition_failure_classification() {
    assert!(Error::binding(["dup"]).is_composition_failure());
    assert!(Error::composition("validation failed").is_composition_failure());
    assert!(!Error::unsatisfied_binding("T").is_composition_failure());
    assert!(!Error::lifecycle("closed").is_composition_failure());
}
