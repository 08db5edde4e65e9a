use pretty_assertions::assert_eq;
use shared_types::{reset_password_schema, FieldErrors, ResetPasswordValues, CODE_MATCH, CODE_MIN_LENGTH, CODE_REQUIRED};

use crate::common::{schema, MIN_LENGTH};

fn first_code(values: &ResetPasswordValues, field: &str) -> Option<String> {
    let errors = schema().validate(values).err()?;
    let field_errors = errors.field_errors();
    field_errors
        .get(field)
        .and_then(|errs| errs.first())
        .map(|e| e.code.to_string())
}

#[test]
fn empty_password_is_required() {
    let values = ResetPasswordValues::new("", "");
    assert_eq!(first_code(&values, "password").as_deref(), Some(CODE_REQUIRED));
}

#[test]
fn whitespace_password_is_required() {
    let values = ResetPasswordValues::new("   ", "   ");
    assert_eq!(first_code(&values, "password").as_deref(), Some(CODE_REQUIRED));
}

#[test]
fn short_password_fails_min_length() {
    let values = ResetPasswordValues::new("abc", "abc");
    assert_eq!(first_code(&values, "password").as_deref(), Some(CODE_MIN_LENGTH));
    assert_eq!(
        first_code(&values, "passwordConfirmation").as_deref(),
        Some(CODE_MIN_LENGTH)
    );
}

#[test]
fn padding_does_not_count_toward_length() {
    let values = ResetPasswordValues::new("  short  ", "  short  ");
    assert_eq!(first_code(&values, "password").as_deref(), Some(CODE_MIN_LENGTH));
}

#[test]
fn mismatch_is_reported_on_confirmation() {
    let values = ResetPasswordValues::new("longenough1", "longenough2");
    assert_eq!(first_code(&values, "password"), None);
    assert_eq!(
        first_code(&values, "passwordConfirmation").as_deref(),
        Some(CODE_MATCH)
    );
}

#[test]
fn blank_confirmation_reports_mismatch_first() {
    let values = ResetPasswordValues::new("longenough1", "");
    assert_eq!(
        first_code(&values, "passwordConfirmation").as_deref(),
        Some(CODE_MATCH)
    );
}

#[test]
fn matching_short_values_fail_min_length_on_both() {
    let errors = schema()
        .validate(&ResetPasswordValues::new("abcdefg", "abcdefg"))
        .unwrap_err();
    let map = FieldErrors::from_validation(&errors, |e| e.code.to_string());
    assert_eq!(map.len(), 2);
    assert_eq!(map.get("password"), Some(CODE_MIN_LENGTH));
}

#[test]
fn valid_matching_values_pass() {
    let values = ResetPasswordValues::new("longenough1", "longenough1");
    assert!(schema().validate(&values).is_ok());
}

#[test]
fn exact_minimum_length_passes() {
    let password = "x".repeat(MIN_LENGTH);
    assert!(schema()
        .validate(&ResetPasswordValues::new(password.clone(), password))
        .is_ok());
}

#[test]
fn configured_minimum_is_respected() {
    let values = ResetPasswordValues::new("longenough1", "longenough1");
    assert!(reset_password_schema(12).validate(&values).is_err());
    assert!(reset_password_schema(11).validate(&values).is_ok());
}
