//! Turning validation and decode failures into operator-facing messages.
//!
//! Shared by the server's JSON extractor and the client's form checks so both
//! report the same text for the same input.

use validator::ValidationErrors;

/// Joins every failed rule's message, ordered by field name. Rules without a
/// message read as "`field` is invalid".
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extracts `name` from a serde "missing field `name`" message.
pub fn missing_field(message: &str) -> Option<&str> {
    message
        .split("missing field `")
        .nth(1)
        .and_then(|s| s.split('`').next())
}
