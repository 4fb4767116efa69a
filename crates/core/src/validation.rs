//! Bridges `validator` derive output into [`CoreError::Validation`].
//!
//! `ValidationErrors` is keyed by a hash map, so messages are sorted by
//! field name before being joined. The same invalid input therefore always
//! produces the same error text.

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Separator used when several fields fail at once.
const MESSAGE_SEPARATOR: &str = "; ";

/// Run the derived validation rules for `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(validation_message(&errors)))
}

/// Flatten field errors into a single human-readable message.
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut entries: Vec<(String, String)> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        let field = field.to_string();
        for error in field_errors.iter() {
            entries.push((field.clone(), describe(&field, error)));
        }
    }
    entries.sort();
    entries.dedup();

    if entries.is_empty() {
        return "Invalid input".to_string();
    }

    entries
        .into_iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join(MESSAGE_SEPARATOR)
}

fn describe(field: &str, error: &ValidationError) -> String {
    match &error.message {
        Some(message) => message.to_string(),
        None => format!("{field} is invalid ({})", error.code),
    }
}
