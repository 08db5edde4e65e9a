use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

/// Error code reported by [`Rule::Required`].
pub const CODE_REQUIRED: &str = "required";
/// Error code reported by [`Rule::MinLength`]; carries a `min` param.
pub const CODE_MIN_LENGTH: &str = "minLength";
/// Error code reported by [`Rule::Match`]; carries a `field` param.
pub const CODE_MATCH: &str = "match";

/// Read access to form values by field name, so rules can look at siblings.
pub trait FormFields {
    fn field(&self, name: &str) -> Option<&str>;
}

/// A single validation rule applied to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Fails when the value is empty or whitespace only.
    Required,
    /// Fails when the trimmed value has fewer than `n` characters.
    MinLength(usize),
    /// Fails when the value differs from the named sibling field.
    Match(&'static str),
}

impl Rule {
    pub fn check<V: FormFields + ?Sized>(&self, value: &str, values: &V) -> Result<(), ValidationError> {
        match self {
            Rule::Required => {
                if value.trim().is_empty() {
                    return Err(ValidationError::new(CODE_REQUIRED));
                }
            }
            Rule::MinLength(min) => {
                if value.trim().chars().count() < *min {
                    let mut err = ValidationError::new(CODE_MIN_LENGTH);
                    err.add_param(Cow::Borrowed("min"), min);
                    return Err(err);
                }
            }
            Rule::Match(other) => {
                if value != values.field(other).unwrap_or_default() {
                    let mut err = ValidationError::new(CODE_MATCH);
                    err.add_param(Cow::Borrowed("field"), other);
                    return Err(err);
                }
            }
        }
        Ok(())
    }
}

/// Ordered mapping from field name to its ordered rule list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationSchema {
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field with its rules. Rules run in the order given.
    pub fn field(mut self, name: &'static str, rules: Vec<Rule>) -> Self {
        self.fields.push((name, rules));
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &[Rule])> {
        self.fields.iter().map(|(name, rules)| (*name, rules.as_slice()))
    }

    pub fn rules(&self, name: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, rules)| rules.as_slice())
    }

    /// Run every field's rules. Each failing field contributes exactly one
    /// error: the first rule in its list that fails.
    pub fn validate<V: FormFields + ?Sized>(&self, values: &V) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        for (name, rules) in &self.fields {
            let value = values.field(name).unwrap_or_default();
            if let Some(err) = rules.iter().find_map(|rule| rule.check(value, values).err()) {
                errors.add(*name, err);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
