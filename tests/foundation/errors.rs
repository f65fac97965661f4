//! Integration tests for error construction and display.

use varstore_foundation::{Error, ErrorContext, ErrorKind, Kind};

#[test]
fn type_mismatch_message() {
    let err = Error::type_mismatch(Kind::Matrix, Kind::Number);
    assert_eq!(err.to_string(), "type mismatch: expected matrix, got number");
}

#[test]
fn dimension_mismatch_message() {
    let err = Error::dimension_mismatch(2, 3, 5);
    assert!(matches!(err.kind, ErrorKind::DimensionMismatch { .. }));
    assert!(err.to_string().contains('6'));
}

#[test]
fn context_renders_source_and_path() {
    let ctx = ErrorContext::new()
        .with_source("case.bin")
        .with_name("inputs")
        .with_name("capacity");
    assert_eq!(ctx.to_string(), "in case.bin at inputs.capacity");

    let err = Error::not_found("capacity").with_context(ctx);
    assert_eq!(err.context.unwrap().path.len(), 2);
}
