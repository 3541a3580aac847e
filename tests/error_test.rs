use std::io;

use cpp_scaffold::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid config".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid config.");

    let err = Error::TemplateError("rendering failed".to_string());
    assert_eq!(err.to_string(), "Template error: rendering failed.");
}

#[test]
fn test_validation_error_lists_every_error() {
    let err = Error::ValidationError {
        errors: vec!["Project name is empty".to_string(), "bad email".to_string()],
    };
    let message = err.to_string();
    assert!(message.contains("  - Project name is empty\n  - bad email"));
    assert!(message.contains("--force"));
}

#[test]
fn test_unsupported_source_display() {
    let err = Error::UnsupportedSourceError {
        source_kind: "git repository: 'https://example.com/t.git'".to_string(),
    };
    assert!(err.to_string().starts_with("Unsupported template source: git repository"));
}
