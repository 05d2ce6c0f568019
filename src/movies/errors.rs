//! Error types for the movies subsystem
//!
//! - `ValidationErrors`: every field of a payload that failed its rule
//! - `StoreError`: lookups against the record store
//! - `SeedError`: startup loading of the seed document

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// One field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field path (e.g. "title", "genre[1]")
    pub field: String,
    /// Human-readable reason
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("Movie {} is required", field);
        Self { field, message }
    }

    pub fn type_mismatch(field: impl Into<String>, expected: &str, actual: &str) -> Self {
        let field = field.into();
        let message = format!("Movie {} must be {}, got {}", field, expected, actual);
        Self { field, message }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {}", self.field, self.message)
    }
}

/// All field failures for one payload, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a single failure.
    pub fn single(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn extend(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// True if some failure is reported for `field` (or one of its elements).
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| {
            e.field == field
                || e
                    .field
                    .strip_prefix(field)
                    .is_some_and(|rest| rest.starts_with('['))
        })
    }

    /// Ok(value) when nothing was recorded, Err(self) otherwise.
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "movie validation failed")?;
        for (i, err) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{}{}", sep, err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self::single(error)
    }
}

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record carries this id
    #[error("movie '{0}' not found")]
    NotFound(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Seed loading errors. All of them abort startup.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("seed is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("seed root must be an array of movies")]
    NotAnArray,

    #[error("seed entry {index} has no string 'id'")]
    MissingId { index: usize },

    #[error("seed entry {index} repeats id '{id}'")]
    DuplicateId { index: usize, id: String },

    #[error("seed entry {index} is invalid: {errors}")]
    Invalid {
        index: usize,
        errors: ValidationErrors,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_field() {
        let err = FieldError::missing_field("title");
        assert_eq!(err.field, "title");
        assert!(err.message.contains("title"));
    }

    #[test]
    fn test_validation_errors_serialize_as_list() {
        let mut errors = ValidationErrors::new();
        errors.push(FieldError::missing_field("title"));
        errors.push(FieldError::new("genre[0]", "unknown genre"));

        let json = serde_json::to_value(&errors).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["field"], "title");
        assert_eq!(json[1]["field"], "genre[0]");
    }

    #[test]
    fn test_has_field_matches_element_paths() {
        let errors = ValidationErrors::single(FieldError::new("genre[2]", "bad"));
        assert!(errors.has_field("genre"));
        assert!(!errors.has_field("gen"));
        assert!(!errors.has_field("title"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));
        let errors = ValidationErrors::single(FieldError::missing_field("year"));
        assert!(errors.into_result(7).is_err());
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::NotFound("abc".into());
        assert!(err.to_string().contains("abc"));
    }
}
