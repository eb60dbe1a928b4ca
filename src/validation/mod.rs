// Field validation for request payloads.
//
// Every rule runs; failures are collected per field and reported together in a
// single 400 response, before anything touches the database.

pub mod escape;

use std::collections::HashMap;

use crate::error::ApiError;

pub use escape::{escape_html, MAX_ENTITY_LEN};

/// Length bounds (in characters, after trimming) and sanitizing for one field
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub field: &'static str,
    pub min: usize,
    pub max: usize,
    pub escape: bool,
}

pub const COMPANY_ID: FieldRule = FieldRule { field: "companyId", min: 1, max: 6, escape: false };
pub const COMPANY_NAME: FieldRule = FieldRule { field: "companyName", min: 1, max: 25, escape: true };
pub const COMPANY_CITY: FieldRule = FieldRule { field: "companyCity", min: 1, max: 25, escape: true };

impl FieldRule {
    /// Widest value `sanitize` can return, once every character is escaped
    pub fn stored_width(&self) -> usize {
        if self.escape {
            self.max * MAX_ENTITY_LEN
        } else {
            self.max
        }
    }

    /// Trim, bound-check, then escape. Returns the sanitized value or the failure message.
    pub fn sanitize(&self, raw: &str) -> Result<String, String> {
        let trimmed = raw.trim();
        let len = trimmed.chars().count();
        if len < self.min || len > self.max {
            return Err(format!(
                "{} must be between {} and {} characters",
                self.field, self.min, self.max
            ));
        }
        Ok(if self.escape {
            escape_html(trimmed)
        } else {
            trimmed.to_string()
        })
    }
}

/// Collects failures across all rules of one request
#[derive(Debug, Default)]
pub struct Validator {
    field_errors: HashMap<String, String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, rule: &FieldRule, value: Option<&str>) -> Option<String> {
        match value {
            Some(raw) => self.check(rule, raw),
            None => {
                self.fail(rule, format!("{} is required", rule.field));
                None
            }
        }
    }

    /// Absent values pass; present values must satisfy the rule
    pub fn optional(&mut self, rule: &FieldRule, value: Option<&str>) -> Option<String> {
        value.and_then(|raw| self.check(rule, raw))
    }

    pub fn is_valid(&self) -> bool {
        self.field_errors.is_empty()
    }

    pub fn into_error(self) -> ApiError {
        tracing::debug!("Validation failed: {:?}", self.field_errors);
        ApiError::validation_error("Validation failed", Some(self.field_errors))
    }

    fn check(&mut self, rule: &FieldRule, raw: &str) -> Option<String> {
        match rule.sanitize(raw) {
            Ok(value) => Some(value),
            Err(message) => {
                self.fail(rule, message);
                None
            }
        }
    }

    fn fail(&mut self, rule: &FieldRule, message: String) {
        self.field_errors.entry(rule.field.to_string()).or_insert(message);
    }
}
