use dioxus::prelude::*;
use shared_types::ResetPasswordValues;

use crate::components::{submit_future, ResetPasswordForm, SubmitFuture};
use crate::config;
use crate::i18n::{Catalog, Translate, Translator, USER_NAMESPACE};

/// Standalone reset-password page.
///
/// Translations and the password policy come from the loaded settings. The
/// submit handler is supplied by the host; without one the page accepts
/// the values locally.
#[component]
pub fn ResetPasswordPage(#[props(default)] on_submit: Option<Callback<ResetPasswordValues, SubmitFuture>>) -> Element {
    let settings = config::settings();
    let translator = use_hook(|| {
        Translate::new(Catalog::for_locale(USER_NAMESPACE, &settings.i18n.locale))
    });
    let fallback = use_callback(accept_locally);
    let on_submit = on_submit.unwrap_or(fallback);
    let title = translator.t("resetPass.title");

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reset_password.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                h1 { class: "auth-title", "{title}" }
                ResetPasswordForm {
                    on_submit,
                    translator,
                    min_password_length: settings.min_password_length(),
                }
            }
        }
    }
}

fn accept_locally(values: ResetPasswordValues) -> SubmitFuture {
    submit_future(async move {
        tracing::info!(
            password_chars = values.password.chars().count(),
            "password reset accepted"
        );
        Ok(())
    })
}
