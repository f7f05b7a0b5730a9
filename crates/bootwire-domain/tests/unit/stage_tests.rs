//! Unit tests for the injector stage

use bootwire_domain::Stage;

#[test]
fn test_default_stage_is_strict() {
    let stage = Stage::default();
    assert_eq!(stage, Stage::Production);
    assert!(stage.validates_bindings());
    assert!(stage.eager_singletons());
}

#[test]
fn test_development_stage_is_lenient() {
    assert!(!Stage::Development.validates_bindings());
    assert!(!Stage::Development.eager_singletons());
}

#[test]
fn test_stage_from_str() {
    assert_eq!("production".parse::<Stage>().ok(), Some(Stage::Production));
    assert_eq!("PROD".parse::<Stage>().ok(), Some(Stage::Production));
    assert_eq!(" development ".parse::<Stage>().ok(), Some(Stage::Development));
    assert_eq!("dev".parse::<Stage>().ok(), Some(Stage::Development));
}

#[test]
fn test_stage_from_str_rejects_unknown() {
    let result = "tool".parse::<Stage>();
    assert!(result.is_err());
    let message = result.err().map(|e| e.to_string()).unwrap_or_default();
    assert!(message.contains("tool"), "unexpected message: {message}");
}

#[test]
fn test_stage_display_matches_serde_name() {
    for stage in [Stage::Production, Stage::Development] {
        let json = serde_json::to_string(&stage).expect("serialize stage");
        assert_eq!(json, format!("\"{stage}\""));
        let back: Stage = serde_json::from_str(&json).expect("deserialize stage");
        assert_eq!(back, stage);
    }
}
