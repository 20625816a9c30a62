//! Field descriptions for the entity forms and conversion of typed answers.

use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// Never prefilled; left blank on edit to keep the current one.
    Password,
    Integer,
    /// `YYYY-MM-DD`
    Date,
    /// RFC 3339, e.g. `2025-03-14T08:00:00Z`
    DateTime,
    /// Another document's `_id`.
    Reference,
    Choice(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }

    /// The prompt text, with a format hint where the input is not free text.
    pub fn prompt(&self) -> String {
        match self.kind {
            FieldKind::Date => format!("{} (YYYY-MM-DD)", self.label),
            FieldKind::DateTime => format!("{} (e.g. 2025-03-14T08:00:00Z)", self.label),
            FieldKind::Reference => format!("{} ID", self.label),
            _ => self.label.to_string(),
        }
    }

    /// Current value rendered for prefilling the prompt.
    pub fn display(&self, value: Option<&Value>) -> String {
        match (self.kind, value) {
            (FieldKind::Password, _) | (_, None) | (_, Some(Value::Null)) => String::new(),
            (_, Some(Value::String(s))) => s.clone(),
            (_, Some(other)) => other.to_string(),
        }
    }

    /// Converts a raw answer to JSON. Blank answers are `None` so the field is
    /// left out of the submitted body.
    pub fn coerce(&self, raw: &str) -> Result<Option<Value>, String> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }

        match self.kind {
            FieldKind::Integer => raw
                .parse::<u64>()
                .map(|n| Some(Value::Number(Number::from(n))))
                .map_err(|_| format!("{} must be a whole number", self.label)),
            FieldKind::Choice(options) if !options.contains(&raw) => Err(format!(
                "{} must be one of: {}",
                self.label,
                options.join(", ")
            )),
            _ => Ok(Some(Value::String(raw.to_string()))),
        }
    }
}

/// Builds a request body from `(field, raw answer)` pairs, skipping blanks.
pub fn build_body<'a>(
    answers: impl IntoIterator<Item = (&'a FormField, String)>,
) -> Result<Map<String, Value>, String> {
    let mut body = Map::new();
    for (field, raw) in answers {
        if let Some(value) = field.coerce(&raw)? {
            body.insert(field.name.to_string(), value);
        }
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const AGE: FormField = FormField::new("age", "Age", FieldKind::Integer);
    const STATUS: FormField =
        FormField::new("status", "Status", FieldKind::Choice(&["Present", "Absent"]));

    #[test]
    fn test_coerce_integer() {
        assert_eq!(AGE.coerce(" 12 ").unwrap(), Some(json!(12)));
        assert_eq!(AGE.coerce("twelve").unwrap_err(), "Age must be a whole number");
        assert_eq!(AGE.coerce("").unwrap(), None);
    }

    #[test]
    fn test_coerce_choice() {
        assert_eq!(STATUS.coerce("Absent").unwrap(), Some(json!("Absent")));
        assert!(STATUS.coerce("Late").is_err());
    }

    #[test]
    fn test_password_is_never_prefilled() {
        let password = FormField::new("password", "Password", FieldKind::Password);
        assert_eq!(password.display(Some(&json!("$2b$12$hash"))), "");
        assert_eq!(AGE.display(Some(&json!(12))), "12");
    }

    #[test]
    fn test_build_body_skips_blanks() {
        let body = build_body([(&AGE, "".to_string()), (&STATUS, "Present".to_string())]).unwrap();
        assert_eq!(Value::Object(body), json!({"status": "Present"}));
    }
}
