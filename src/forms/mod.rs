//! Form definitions backing the console routes.

use chrono::NaiveDate;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod ha;
pub mod optimization;
pub mod performance;
pub mod privileges;
pub mod rman;
pub mod roles;
pub mod security;
pub mod users;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("{0}")]
    Validation(#[from] ValidationErrors),

    #[error("{0}")]
    TypeConstraint(#[from] TypeConstraintError),

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("select at least one {0}")]
    NothingSelected(&'static str),

    #[error("{0}")]
    Invalid(String),

    #[error("malformed form data: {0}")]
    Malformed(String),
}

impl From<serde_html_form::de::Error> for FormError {
    fn from(err: serde_html_form::de::Error) -> Self {
        FormError::Malformed(err.to_string())
    }
}

/// Strips markup from operator-entered free text.
pub fn sanitize(text: &str) -> String {
    ammonia::clean(text.trim()).trim().to_string()
}

/// Treats blank inputs as absent.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Parses an HTML `date` input, treating a blank value as absent.
pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, FormError> {
    match value.trim() {
        "" => Ok(None),
        raw => NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| FormError::InvalidDate(raw.to_string())),
    }
}

/// Trims, drops blanks and deduplicates multi-select values keeping their order.
fn selected_values(values: Vec<String>) -> Vec<String> {
    let mut result: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        let value = value.trim();
        if !value.is_empty() && !result.iter().any(|v| v == value) {
            result.push(value.to_string());
        }
    }
    result
}
