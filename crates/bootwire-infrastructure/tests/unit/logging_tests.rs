//! Logging setup tests

use bootwire_domain::Error;
use bootwire_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").ok(), Some(Level::TRACE));
    assert_eq!(parse_log_level("DEBUG").ok(), Some(Level::DEBUG));
    assert_eq!(parse_log_level("warning").ok(), Some(Level::WARN));
    assert_eq!(parse_log_level("error").ok(), Some(Level::ERROR));
}

#[test]
fn test_parse_invalid_log_level() {
    let result = parse_log_level("loud");
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_init_logging_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

/// The global subscriber can only be installed once per process, so both
/// calls live in the same test.
#[test]
fn test_init_logging_twice_is_an_error() {
    let dir = tempfile::TempDir::new().expect("temp dir");
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(dir.path().join("bootwire.log")),
    };

    let first = init_logging(&config);
    assert!(first.is_ok(), "First init should succeed: {:?}", first.err());

    let second = init_logging(&LoggingConfig::default());
    assert!(matches!(second, Err(Error::Configuration { .. })));
}
