use pretty_assertions::assert_eq;

use super::*;

#[test]
fn renders_code_and_message() {
    let diag = Diagnostic::error(ErrorCode::E8002)
        .with_message("expected 2 arguments, found 3");
    assert_eq!(diag.to_string(), "error[E8002]: expected 2 arguments, found 3");
}

#[test]
fn renders_notes_indented() {
    let diag = Diagnostic::error(ErrorCode::E7006)
        .with_message("match reference cycle")
        .with_note("in `write_variable_region`")
        .with_note("argument 2 references argument 3");
    assert_eq!(
        diag.to_string(),
        "error[E7006]: match reference cycle\n  note: in `write_variable_region`\n  note: argument 2 references argument 3"
    );
}

#[test]
fn default_message_is_code_description() {
    let diag = Diagnostic::error(ErrorCode::E8005);
    assert_eq!(diag.message, "underconstrained type");
}

#[test]
fn warning_severity() {
    let diag = Diagnostic::warning(ErrorCode::E7004);
    assert_eq!(diag.severity, Severity::Warning);
    assert!(diag.to_string().starts_with("warning[E7004]"));
}

#[test]
fn code_families() {
    assert!(ErrorCode::E7003.is_catalogue());
    assert!(!ErrorCode::E8004.is_catalogue());
    assert!(ErrorCode::E9001.is_internal());
    assert!(!ErrorCode::E9001.is_catalogue());
}
