//! Synchronous validation of a form snapshot.

use super::{Field, FormFields};
use crate::domain::{trim_input, EmailAddress, RequiredText, ValidationError};
use crate::error::ValidationFailure;

/// Trimmed snapshot of the three field values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormInput {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let (name, email, message): (String, String, String) =
            (name.into(), email.into(), message.into());
        Self {
            name: trim_input(&name).to_string(),
            email: trim_input(&email).to_string(),
            message: trim_input(&message).to_string(),
        }
    }

    /// Read and trim every field from the form.
    pub fn read(form: &dyn FormFields) -> Self {
        Self::new(
            form.value(Field::Name),
            form.value(Field::Email),
            form.value(Field::Message),
        )
    }
}

/// A form snapshot that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidContact {
    pub name: RequiredText,
    pub email: EmailAddress,
    pub message: RequiredText,
}

/// Validate a snapshot.
///
/// All three checks run regardless of earlier failures, so the returned
/// [`ValidationFailure`] names every bad field.
pub fn validate(input: &FormInput) -> Result<ValidContact, ValidationFailure> {
    let name = RequiredText::new(&input.name);
    let email = EmailAddress::new(&input.email);
    let message = RequiredText::new(&input.message);

    match (name, email, message) {
        (Ok(name), Ok(email), Ok(message)) => Ok(ValidContact {
            name,
            email,
            message,
        }),
        (name, email, message) => {
            let problems: Vec<(Field, ValidationError)> = [
                (Field::Name, name.err()),
                (Field::Email, email.err()),
                (Field::Message, message.err()),
            ]
            .into_iter()
            .filter_map(|(field, err)| err.map(|e| (field, e)))
            .collect();

            Err(ValidationFailure::new(problems))
        }
    }
}
