use serde::{Deserialize, Serialize};

use crate::validation::{FormFields, Rule, ValidationSchema};

/// Name the reset form is rendered under.
pub const RESET_PASSWORD_FORM_NAME: &str = "resetPassword";

/// Values of the reset-password form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordValues {
    pub password: String,
    pub password_confirmation: String,
}

impl ResetPasswordValues {
    pub fn new(password: impl Into<String>, password_confirmation: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }

    pub fn get(&self, field: ResetPasswordField) -> &str {
        match field {
            ResetPasswordField::Password => &self.password,
            ResetPasswordField::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn set(&mut self, field: ResetPasswordField, value: impl Into<String>) {
        let slot = match field {
            ResetPasswordField::Password => &mut self.password,
            ResetPasswordField::PasswordConfirmation => &mut self.password_confirmation,
        };
        *slot = value.into();
    }
}

impl FormFields for ResetPasswordValues {
    fn field(&self, name: &str) -> Option<&str> {
        ResetPasswordField::from_name(name).map(|f| self.get(f))
    }
}

/// The two inputs of the reset-password form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResetPasswordField {
    Password,
    PasswordConfirmation,
}

impl ResetPasswordField {
    pub const ALL: [ResetPasswordField; 2] = [
        ResetPasswordField::Password,
        ResetPasswordField::PasswordConfirmation,
    ];

    /// Wire name, also the key used in error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResetPasswordField::Password => "password",
            ResetPasswordField::PasswordConfirmation => "passwordConfirmation",
        }
    }

    /// Translation key of the field label.
    pub fn label_key(&self) -> &'static str {
        match self {
            ResetPasswordField::Password => "resetPass.form.field.pass",
            ResetPasswordField::PasswordConfirmation => "resetPass.form.field.passConf",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "password" => Some(ResetPasswordField::Password),
            "passwordConfirmation" => Some(ResetPasswordField::PasswordConfirmation),
            _ => None,
        }
    }
}

/// Schema for the reset form. The confirmation checks `Match` before
/// `Required` so a blank confirmation against a typed password reports the
/// mismatch.
pub fn reset_password_schema(min_length: usize) -> ValidationSchema {
    ValidationSchema::new()
        .field(
            ResetPasswordField::Password.as_str(),
            vec![Rule::Required, Rule::MinLength(min_length)],
        )
        .field(
            ResetPasswordField::PasswordConfirmation.as_str(),
            vec![
                Rule::Match(ResetPasswordField::Password.as_str()),
                Rule::Required,
                Rule::MinLength(min_length),
            ],
        )
}
