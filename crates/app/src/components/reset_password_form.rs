use std::future::Future;
use std::pin::Pin;

use dioxus::prelude::*;
use shared_types::{
    reset_password_schema, AppError, FieldErrors, ResetPasswordField, ResetPasswordValues,
    DEFAULT_MIN_PASSWORD_LENGTH, RESET_PASSWORD_FORM_NAME,
};
use shared_ui::{Alert, Button, Form, RenderField};

use crate::form::FormState;
use crate::i18n::{Translate, Translator};

/// What a submit handler hands back: resolves once the reset request is done.
pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), AppError>>>>;

/// Box a submit handler's future into a [`SubmitFuture`].
pub fn submit_future<F>(fut: F) -> SubmitFuture
where
    F: Future<Output = Result<(), AppError>> + 'static,
{
    Box::pin(fut)
}

/// Password + confirmation form.
///
/// Values are checked against the reset schema before `on_submit` runs. A
/// successful submit empties the form; a rejection shows the handler's
/// errors and keeps what the user typed.
#[component]
pub fn ResetPasswordForm(
    on_submit: Callback<ResetPasswordValues, SubmitFuture>,
    translator: Translate,
    #[props(default = DEFAULT_MIN_PASSWORD_LENGTH)] min_password_length: usize,
) -> Element {
    let mut form = use_signal(FormState::<ResetPasswordValues>::new);

    let schema = reset_password_schema(min_password_length);
    let t = translator.clone();
    let handle_submit = move |_evt: FormEvent| {
        let schema = schema.clone();
        let t = t.clone();
        async move {
            let Ok(values) = form.write().begin_submit(&schema, &t) else {
                return;
            };
            let result = on_submit.call(values).await;
            form.write().finish_submit(result);
        }
    };

    let state = form.read();
    let values = state.values().clone();
    let errors = state.errors().clone();
    let submitting = state.is_submitting();
    drop(state);

    rsx! {
        ResetPasswordFormView {
            values,
            errors,
            submitting,
            translator,
            onsubmit: handle_submit,
            on_input: move |(field, value): (ResetPasswordField, String)| {
                form.write().edit(field.as_str(), |v| v.set(field, value));
            },
        }
    }
}

/// Markup of [`ResetPasswordForm`] for a given state.
///
/// Field errors go under their input, the `form` entry goes in an alert
/// above the button, and everything is disabled while `submitting`.
#[component]
pub fn ResetPasswordFormView(
    values: ResetPasswordValues,
    errors: FieldErrors,
    #[props(default = false)] submitting: bool,
    translator: Translate,
    #[props(default)] onsubmit: EventHandler<FormEvent>,
    #[props(default)] on_input: EventHandler<(ResetPasswordField, String)>,
) -> Element {
    let field_error = |field: ResetPasswordField| errors.get(field.as_str()).map(str::to_string);
    let password_error = field_error(ResetPasswordField::Password);
    let confirmation_error = field_error(ResetPasswordField::PasswordConfirmation);
    let form_error = errors.form_error().map(str::to_string);

    let password_label = translator.t(ResetPasswordField::Password.label_key());
    let confirmation_label = translator.t(ResetPasswordField::PasswordConfirmation.label_key());
    let submit_label = translator.t("resetPass.form.btnSubmit");

    rsx! {
        Form { name: RESET_PASSWORD_FORM_NAME, onsubmit: move |evt| onsubmit.call(evt),
            RenderField {
                name: ResetPasswordField::Password.as_str(),
                label: password_label,
                input_type: "password",
                autocomplete: "new-password",
                value: values.password.clone(),
                error: password_error,
                disabled: submitting,
                on_input: move |evt: FormEvent| {
                    on_input.call((ResetPasswordField::Password, evt.value()));
                },
            }
            RenderField {
                name: ResetPasswordField::PasswordConfirmation.as_str(),
                label: confirmation_label,
                input_type: "password",
                autocomplete: "new-password",
                value: values.password_confirmation.clone(),
                error: confirmation_error,
                disabled: submitting,
                on_input: move |evt: FormEvent| {
                    on_input.call((ResetPasswordField::PasswordConfirmation, evt.value()));
                },
            }
            if let Some(message) = form_error {
                Alert { "{message}" }
            }
            Button { button_type: "submit", disabled: submitting, "{submit_label}" }
        }
    }
}
