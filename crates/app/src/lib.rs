pub mod components;
pub mod config;
pub mod form;
pub mod i18n;
pub mod pages;

pub use components::{submit_future, ResetPasswordForm, ResetPasswordFormView, SubmitFuture};
pub use form::{FormState, SubmitOutcome};
pub use i18n::{Catalog, Translate, Translator};
pub use pages::ResetPasswordPage;
