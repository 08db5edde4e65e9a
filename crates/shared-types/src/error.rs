use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Reserved error-map key for messages that are not tied to a single field.
pub const FORM_ERROR_KEY: &str = "form";

/// Mapping from field name (or [`FORM_ERROR_KEY`]) to a display message.
///
/// Serializes as a plain JSON object so a submit handler can reject with
/// `{"password": "Server error"}` and have it land on the right field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// An error map holding only a whole-form message.
    pub fn form(message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(FORM_ERROR_KEY, message);
        errors
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    /// The whole-form message, if any.
    pub fn form_error(&self) -> Option<&str> {
        self.get(FORM_ERROR_KEY)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Build an error map from validator output, keeping the first error per
    /// field and rendering it through `render`.
    pub fn from_validation<F>(errors: &validator::ValidationErrors, mut render: F) -> Self
    where
        F: FnMut(&validator::ValidationError) -> String,
    {
        let mut map = Self::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                map.insert(field.to_string(), render(first));
            }
        }
        map
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Per-field errors win; an error without any falls back to its message as a
/// whole-form error.
impl From<AppError> for FieldErrors {
    fn from(err: AppError) -> Self {
        if err.field_errors.is_empty() {
            FieldErrors::form(err.message)
        } else {
            err.field_errors
        }
    }
}

/// Categorization of application errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    BadRequest,
    ValidationError,
    Unauthorized,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error a submit handler rejects with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "FieldErrors::is_empty")]
    pub field_errors: FieldErrors,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn validation(message: impl Into<String>, field_errors: FieldErrors) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    /// Wrap a bare error-map payload, e.g. `{"password": "Server error"}`.
    pub fn from_field_errors(field_errors: FieldErrors) -> Self {
        let message = field_errors
            .form_error()
            .unwrap_or("Validation failed")
            .to_string();
        Self::validation(message, field_errors)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::Unauthorized,
            message: message.into(),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InternalError,
            message: message.into(),
            field_errors: FieldErrors::new(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}
