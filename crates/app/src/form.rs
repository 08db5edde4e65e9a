use std::future::Future;

use shared_types::{AppError, FieldErrors, FormFields, ValidationSchema};

use crate::i18n::{validation_message, Translator};

/// How a call to [`FormState::submit`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    Busy,
    /// Validation failed; the handler was not called.
    Invalid,
    /// The handler accepted the values and the form was reset.
    Submitted,
    /// The handler rejected the values; its errors are shown.
    Rejected,
}

/// Values, errors and the submitting flag of one form instance.
///
/// Submission is split into [`begin_submit`](Self::begin_submit) and
/// [`finish_submit`](Self::finish_submit) so a UI can release its borrow of
/// the state while the handler runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState<V> {
    values: V,
    errors: FieldErrors,
    submitting: bool,
}

impl<V> FormState<V>
where
    V: FormFields + Clone + Default,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: V) -> Self {
        Self {
            values,
            errors: FieldErrors::new(),
            submitting: false,
        }
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Change one field. The field's shown error goes away with the edit.
    pub fn edit(&mut self, field: &str, apply: impl FnOnce(&mut V)) {
        apply(&mut self.values);
        self.errors.remove(field);
    }

    /// Back to empty values with no errors.
    pub fn reset(&mut self) {
        self.values = V::default();
        self.errors.clear();
        self.submitting = false;
    }

    /// Validate and mark the form as submitting.
    ///
    /// Returns the values to hand to the submit handler. Fails with
    /// [`SubmitOutcome::Busy`] while a submission is in flight, or with
    /// [`SubmitOutcome::Invalid`] after rendering rule failures through `t`
    /// into the error map.
    pub fn begin_submit(
        &mut self,
        schema: &ValidationSchema,
        t: &dyn Translator,
    ) -> Result<V, SubmitOutcome> {
        if self.submitting {
            tracing::debug!("submit ignored, previous submission still in flight");
            return Err(SubmitOutcome::Busy);
        }
        if let Err(errors) = schema.validate(&self.values) {
            self.errors = FieldErrors::from_validation(&errors, |err| validation_message(t, err));
            tracing::debug!(fields = ?self.errors.iter().map(|(f, _)| f).collect::<Vec<_>>(), "validation failed");
            return Err(SubmitOutcome::Invalid);
        }
        self.errors.clear();
        self.submitting = true;
        Ok(self.values.clone())
    }

    /// Apply the submit handler's result: reset on success, show its errors
    /// and keep the values on failure.
    pub fn finish_submit(&mut self, result: Result<(), AppError>) -> SubmitOutcome {
        self.submitting = false;
        match result {
            Ok(()) => {
                tracing::info!("form submitted");
                self.reset();
                SubmitOutcome::Submitted
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind, message = %err.message, "submission rejected");
                self.errors = err.into();
                SubmitOutcome::Rejected
            }
        }
    }

    /// Run a whole submission against `on_submit`.
    pub async fn submit<F, Fut>(
        &mut self,
        schema: &ValidationSchema,
        t: &dyn Translator,
        on_submit: F,
    ) -> SubmitOutcome
    where
        F: FnOnce(V) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let values = match self.begin_submit(schema, t) {
            Ok(values) => values,
            Err(outcome) => return outcome,
        };
        let result = on_submit(values).await;
        self.finish_submit(result)
    }
}
