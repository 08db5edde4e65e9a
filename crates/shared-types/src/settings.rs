use serde::{Deserialize, Serialize};

/// Minimum password length used when the config file does not set one.
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Password policy read by the reset form's schema.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PasswordSettings {
    #[serde(default = "default_min_length")]
    pub min_length: usize,
}

impl Default for PasswordSettings {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

fn default_min_length() -> usize {
    DEFAULT_MIN_PASSWORD_LENGTH
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AuthSettings {
    #[serde(default)]
    pub password: PasswordSettings,
}

/// Locale selection for translated UI text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nSettings {
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            locale: default_locale(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

/// Top-level config file structure matching `config.toml`.
///
/// Every section is optional so that a missing or partial file still
/// yields a usable configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub i18n: I18nSettings,
}

impl Settings {
    pub fn min_password_length(&self) -> usize {
        self.auth.password.min_length
    }
}
