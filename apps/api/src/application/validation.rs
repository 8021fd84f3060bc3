//! Request validation
//!
//! Validators collect every problem instead of stopping at the first one, so a
//! client gets the full field to messages map in a single 400 response.

use crate::domain::errors::{FootballError, FootballResult, ValidationErrors};

/// Minimum length of names, nationalities, countries and leagues
pub const MIN_TEXT_LENGTH: usize = 3;
/// Maximum length of names, nationalities, countries and leagues
pub const MAX_TEXT_LENGTH: usize = 100;

/// Implemented by every request that passes through the pipeline
pub trait Validate {
    fn validate(&self) -> FootballResult<()>;
}

/// Collects field errors for one request
#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, field: &str, message: String) {
        self.errors.entry(field.to_string()).or_default().push(message);
    }

    /// Value must not be blank
    pub fn not_empty(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, format!("'{}' must not be empty.", field));
        }
        self
    }

    /// Value must be between `min` and `max` characters long
    pub fn length(&mut self, field: &str, value: &str, min: usize, max: usize) -> &mut Self {
        let length = value.chars().count();
        if length < min || length > max {
            self.push(
                field,
                format!(
                    "'{}' must be between {} and {} characters. You entered {} characters.",
                    field, min, max, length
                ),
            );
        }
        self
    }

    /// Required text field: not blank and within the standard length bounds
    pub fn text(&mut self, field: &str, value: &str) -> &mut Self {
        self.not_empty(field, value)
            .length(field, value, MIN_TEXT_LENGTH, MAX_TEXT_LENGTH)
    }

    /// Optional text field: checked like `text` only when present
    pub fn optional_text(&mut self, field: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.text(field, value);
        }
        self
    }

    /// Value must be greater than zero
    pub fn positive(&mut self, field: &str, value: i32) -> &mut Self {
        if value <= 0 {
            self.push(field, format!("'{}' must be greater than 0.", field));
        }
        self
    }

    /// Optional number: checked like `positive` only when present
    pub fn optional_positive(&mut self, field: &str, value: Option<i32>) -> &mut Self {
        if let Some(value) = value {
            self.positive(field, value);
        }
        self
    }

    /// Entity id used for lookups
    pub fn id(&mut self, field: &str, value: &str) -> &mut Self {
        self.not_empty(field, value)
    }

    /// Entity id used for mutations, with the standard length bounds
    pub fn bounded_id(&mut self, field: &str, value: &str) -> &mut Self {
        self.text(field, value)
    }

    /// Ok when nothing was collected, otherwise a Validation error
    pub fn finish(&mut self) -> FootballResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(FootballError::Validation(std::mem::take(&mut self.errors)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_of(result: FootballResult<()>) -> ValidationErrors {
        match result {
            Err(FootballError::Validation(errors)) => errors,
            other => panic!("Expected validation errors, got {:?}", other),
        }
    }

    #[test]
    fn valid_values_pass() {
        let result = Validator::new()
            .text("name", "Ajax")
            .positive("age", 39)
            .id("id", "abc")
            .finish();

        assert!(result.is_ok());
    }

    #[test]
    fn empty_text_reports_both_rules() {
        let errors = errors_of(Validator::new().text("name", "").finish());

        assert_eq!(errors["name"].len(), 2);
        assert!(errors["name"][0].contains("must not be empty"));
        assert!(errors["name"][1].contains("between 3 and 100"));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert!(Validator::new().text("name", "Traoré").finish().is_ok());
        assert!(Validator::new().text("name", "éé").finish().is_err());
        assert!(Validator::new().text("name", &"x".repeat(101)).finish().is_err());
    }

    #[test]
    fn non_positive_numbers_fail() {
        let errors = errors_of(
            Validator::new()
                .positive("height_cm", 0)
                .positive("age", -3)
                .finish(),
        );

        assert_eq!(errors.len(), 2);
        assert_eq!(errors["age"], vec!["'age' must be greater than 0.".to_string()]);
    }

    #[test]
    fn optional_fields_are_skipped_when_absent() {
        let result = Validator::new()
            .optional_text("name", None)
            .optional_positive("age", None)
            .finish();
        assert!(result.is_ok());

        let errors = errors_of(
            Validator::new()
                .optional_text("name", Some("ab"))
                .optional_positive("age", Some(0))
                .finish(),
        );
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("age"));
    }
}
