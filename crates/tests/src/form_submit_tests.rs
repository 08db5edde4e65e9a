use pretty_assertions::assert_eq;
use reset_password::{FormState, SubmitOutcome};
use shared_types::{AppError, FieldErrors, ResetPasswordField, ResetPasswordValues};

use crate::common::{english, form_with, schema, RecordingHandler};

#[tokio::test]
async fn empty_password_blocks_submission() {
    let handler = RecordingHandler::accepting();
    let mut form = FormState::<ResetPasswordValues>::new();

    let outcome = form.submit(&schema(), &english(), handler.handler()).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(handler.calls().is_empty());
    assert_eq!(form.errors().get("password"), Some("Required"));
}

#[tokio::test]
async fn short_password_blocks_with_min_length_message() {
    let handler = RecordingHandler::accepting();
    let mut form = form_with("abc", "abc");

    let outcome = form.submit(&schema(), &english(), handler.handler()).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(handler.calls().is_empty());
    assert_eq!(
        form.errors().get("password"),
        Some("Must be 8 characters or more")
    );
    assert_eq!(form.values(), &ResetPasswordValues::new("abc", "abc"));
}

#[tokio::test]
async fn mismatch_blocks_with_match_message() {
    let handler = RecordingHandler::accepting();
    let mut form = form_with("longenough1", "longenough2");

    let outcome = form.submit(&schema(), &english(), handler.handler()).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert!(handler.calls().is_empty());
    assert!(form.errors().get("password").is_none());
    assert_eq!(
        form.errors().get("passwordConfirmation"),
        Some("Should match the Password field")
    );
}

#[tokio::test]
async fn valid_values_reach_handler_once() {
    let handler = RecordingHandler::accepting();
    let mut form = form_with("longenough1", "longenough1");

    let outcome = form.submit(&schema(), &english(), handler.handler()).await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(
        handler.calls(),
        vec![ResetPasswordValues::new("longenough1", "longenough1")]
    );
}

#[tokio::test]
async fn success_resets_values_and_errors() {
    let handler = RecordingHandler::accepting();
    let mut form = form_with("longenough1", "longenough1");

    form.submit(&schema(), &english(), handler.handler()).await;

    assert_eq!(form.values(), &ResetPasswordValues::default());
    assert_eq!(form.values().password, "");
    assert_eq!(form.values().password_confirmation, "");
    assert!(form.errors().is_empty());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn field_rejection_is_shown_and_values_kept() {
    let payload: FieldErrors = serde_json::from_str(r#"{"password":"Server error"}"#).unwrap();
    let handler = RecordingHandler::rejecting(AppError::from_field_errors(payload));
    let mut form = form_with("longenough1", "longenough1");

    let outcome = form.submit(&schema(), &english(), handler.handler()).await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(handler.calls().len(), 1);
    assert_eq!(form.errors().get("password"), Some("Server error"));
    assert!(form.errors().form_error().is_none());
    assert_eq!(
        form.values(),
        &ResetPasswordValues::new("longenough1", "longenough1")
    );
}

#[tokio::test]
async fn message_only_rejection_becomes_form_error() {
    let handler = RecordingHandler::rejecting(AppError::unauthorized("Reset link expired"));
    let mut form = form_with("longenough1", "longenough1");

    form.submit(&schema(), &english(), handler.handler()).await;

    assert_eq!(form.errors().form_error(), Some("Reset link expired"));
    assert_eq!(form.errors().len(), 1);
}

#[tokio::test]
async fn rejection_replaces_previous_errors() {
    let handler = RecordingHandler::rejecting(AppError::internal("Try again later"));
    let mut form = FormState::<ResetPasswordValues>::new();

    form.submit(&schema(), &english(), handler.handler()).await;
    assert!(form.errors().contains("password"));

    form.edit("password", |v| v.set(ResetPasswordField::Password, "longenough1"));
    form.edit("passwordConfirmation", |v| {
        v.set(ResetPasswordField::PasswordConfirmation, "longenough1")
    });
    form.submit(&schema(), &english(), handler.handler()).await;

    assert!(!form.errors().contains("password"));
    assert!(!form.errors().contains("passwordConfirmation"));
    assert_eq!(form.errors().form_error(), Some("Try again later"));
}

#[tokio::test]
async fn resubmit_after_rejection_succeeds() {
    let mut form = form_with("longenough1", "longenough1");

    let rejecting = RecordingHandler::rejecting(AppError::bad_request("Nope"));
    form.submit(&schema(), &english(), rejecting.handler()).await;
    let accepting = RecordingHandler::accepting();
    let outcome = form.submit(&schema(), &english(), accepting.handler()).await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(accepting.calls().len(), 1);
    assert!(form.errors().is_empty());
}

#[tokio::test]
async fn submit_while_in_flight_is_ignored() {
    let handler = RecordingHandler::accepting();
    let mut form = form_with("longenough1", "longenough1");
    let english = english();

    assert!(form.begin_submit(&schema(), &english).is_ok());
    let outcome = form.submit(&schema(), &english, handler.handler()).await;

    assert_eq!(outcome, SubmitOutcome::Busy);
    assert!(handler.calls().is_empty());
    assert!(form.is_submitting());
}

#[tokio::test]
async fn russian_catalog_translates_validation() {
    let handler = RecordingHandler::accepting();
    let mut form = FormState::<ResetPasswordValues>::new();
    let russian = reset_password::Catalog::for_locale("user", "ru");

    form.submit(&schema(), &russian, handler.handler()).await;

    assert_eq!(form.errors().get("password"), Some("Обязательное поле"));
}
