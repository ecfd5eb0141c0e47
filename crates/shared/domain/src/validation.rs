//! Record-level validation errors.
//!
//! A failed save reports every problem with the record at once: one entry per
//! offending field plus "base" errors that concern the record as a whole.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use validator::ValidationErrors;

/// Errors attached to a record that could not be saved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecordErrors {
    base: Vec<String>,
    fields: BTreeMap<String, Vec<String>>,
}

impl RecordErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an error to a single field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Add an error that is not tied to any field
    pub fn add_to_base(&mut self, message: impl Into<String>) {
        self.base.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.fields.is_empty()
    }

    /// Number of individual messages
    pub fn len(&self) -> usize {
        self.base.len() + self.fields.values().map(Vec::len).sum::<usize>()
    }

    /// Messages recorded against `field` (empty when the field is valid)
    pub fn on(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn base(&self) -> &[String] {
        &self.base
    }

    /// Names of the fields carrying at least one error
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Human-readable messages, base errors first, then `"<field> <message>"`
    pub fn full_messages(&self) -> Vec<String> {
        let mut messages = self.base.clone();
        for (field, errors) in &self.fields {
            messages.extend(errors.iter().map(|msg| format!("{} {}", field, msg)));
        }
        messages
    }

    /// `Ok(())` when nothing was recorded, otherwise the errors themselves
    pub fn into_result(self) -> Result<(), RecordErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for RecordErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

impl From<ValidationErrors> for RecordErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut record = RecordErrors::new();
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                record.add(field.to_string(), message);
            }
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_errors_are_ok() {
        assert!(RecordErrors::new().into_result().is_ok());
    }

    #[test]
    fn test_full_messages_lists_base_first() {
        let mut errors = RecordErrors::new();
        errors.add("comment_author", "can't be blank");
        errors.add_to_base("Sorry, comments are closed for this post");

        assert_eq!(
            errors.full_messages(),
            vec![
                "Sorry, comments are closed for this post".to_string(),
                "comment_author can't be blank".to_string(),
            ]
        );
        assert_eq!(errors.len(), 2);
    }
}
