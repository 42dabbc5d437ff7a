//! Validation gate - presence checks run before any dispatch

use super::generation_form::GenerationForm;

/// A required field is empty; the form must not be dispatched
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{notice}")]
pub struct ValidationError {
    /// Blocking notice for the user
    pub notice: &'static str,
    pub missing_fields: Vec<&'static str>,
}

/// Whether every required field of the form is populated
pub fn can_submit<F: GenerationForm>(form: &F) -> bool {
    form.missing_fields().is_empty()
}

/// Like [`can_submit`], but says what is missing
pub fn check<F: GenerationForm>(form: &F) -> Result<(), ValidationError> {
    let missing_fields = form.missing_fields();
    if missing_fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            notice: F::SPEC.validation_notice,
            missing_fields,
        })
    }
}
