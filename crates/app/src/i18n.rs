//! Translated UI text.
//!
//! Strings live in TOML files under `locales/<locale>/<namespace>.toml` and
//! are embedded at compile time. Nested tables flatten into dotted keys, so
//! `[resetPass.form] btnSubmit = "..."` is looked up as
//! `resetPass.form.btnSubmit`. Placeholders use `{{name}}`.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use validator::ValidationError;

/// Namespace holding the account screens' strings.
pub const USER_NAMESPACE: &str = "user";

/// Locale used when the requested one has no resources.
pub const FALLBACK_LOCALE: &str = "en";

const RESOURCES: &[(&str, &str, &str)] = &[
    ("user", "en", include_str!("../locales/en/user.toml")),
    ("user", "ru", include_str!("../locales/ru/user.toml")),
];

/// Lookup of translated strings by key.
pub trait Translator {
    /// The translation for `key`, if one exists.
    fn lookup(&self, key: &str) -> Option<String>;

    /// The translation for `key`, or the key itself when missing.
    fn t(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| {
            tracing::debug!(key, "missing translation");
            key.to_string()
        })
    }

    /// Translate and substitute `{{name}}` placeholders.
    fn t_with(&self, key: &str, args: &[(&str, String)]) -> String {
        interpolate(&self.t(key), args)
    }
}

/// Replace each `{{name}}` in `template` with its value from `args`.
pub fn interpolate(template: &str, args: &[(&str, String)]) -> String {
    args.iter().fold(template.to_string(), |acc, (name, value)| {
        acc.replace(&format!("{{{{{name}}}}}"), value)
    })
}

/// Render a rule failure through the translator.
///
/// The message key is `validation.<code>`. Params become placeholders; a
/// `field` param is shown by its translated label from `fields.<name>`.
pub fn validation_message(t: &dyn Translator, err: &ValidationError) -> String {
    let mut args: Vec<(&str, String)> = Vec::with_capacity(err.params.len());
    for (name, value) in &err.params {
        let name: &str = name;
        let raw = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        let shown = if name == "field" {
            t.lookup(&format!("fields.{raw}")).unwrap_or(raw)
        } else {
            raw
        };
        args.push((name, shown));
    }
    t.t_with(&format!("validation.{}", err.code), &args)
}

/// Failure to read a locale resource.
#[derive(Debug)]
pub enum I18nError {
    UnknownResource { namespace: String, locale: String },
    Parse(toml::de::Error),
}

impl fmt::Display for I18nError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            I18nError::UnknownResource { namespace, locale } => {
                write!(f, "no resource for namespace {namespace:?} in locale {locale:?}")
            }
            I18nError::Parse(e) => write!(f, "invalid locale file: {e}"),
        }
    }
}

impl std::error::Error for I18nError {}

impl From<toml::de::Error> for I18nError {
    fn from(e: toml::de::Error) -> Self {
        I18nError::Parse(e)
    }
}

/// Flat key → string table for one namespace and locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a TOML resource.
    pub fn from_toml(locale: impl Into<String>, source: &str) -> Result<Self, I18nError> {
        let table: toml::Table = toml::from_str(source)?;
        let mut entries = HashMap::new();
        flatten("", &table, &mut entries);
        Ok(Self {
            locale: locale.into(),
            entries,
        })
    }

    /// Load an embedded resource.
    pub fn load(namespace: &str, locale: &str) -> Result<Self, I18nError> {
        let (_, _, source) = RESOURCES
            .iter()
            .find(|(ns, loc, _)| *ns == namespace && *loc == locale)
            .ok_or_else(|| I18nError::UnknownResource {
                namespace: namespace.to_string(),
                locale: locale.to_string(),
            })?;
        Self::from_toml(locale, source)
    }

    /// Load `locale`, falling back to [`FALLBACK_LOCALE`], then to an empty
    /// catalog that echoes keys.
    pub fn for_locale(namespace: &str, locale: &str) -> Self {
        match Self::load(namespace, locale) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(%e, "falling back to {FALLBACK_LOCALE}");
                Self::load(namespace, FALLBACK_LOCALE).unwrap_or_else(|e| {
                    tracing::warn!(%e, "no translations available");
                    Self {
                        locale: FALLBACK_LOCALE.to_string(),
                        entries: HashMap::new(),
                    }
                })
            }
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for Catalog {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut HashMap<String, String>) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::String(s) => {
                out.insert(path, s.clone());
            }
            toml::Value::Table(nested) => flatten(&path, nested, out),
            other => {
                out.insert(path, other.to_string());
            }
        }
    }
}

/// Shared translator handle for component props.
///
/// Two handles are equal only when they point at the same translator.
#[derive(Clone)]
pub struct Translate(Rc<dyn Translator>);

impl Translate {
    pub fn new(translator: impl Translator + 'static) -> Self {
        Self(Rc::new(translator))
    }
}

impl Translator for Translate {
    fn lookup(&self, key: &str) -> Option<String> {
        self.0.lookup(key)
    }
}

impl PartialEq for Translate {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Translate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Translate")
    }
}
