//! Validation errors and typed field parsing
//!
//! Raw form fields arrive as `Option<String>`. These helpers turn them into
//! typed values or a [`ValidationError`] naming the offending field.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Maximum length for email addresses
const MAX_EMAIL_LEN: usize = 120;

/// Loose address shape: something@something.something, no whitespace
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Validation error for form and JSON input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is missing or blank
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Field did not parse as a number
    InvalidNumber { field: &'static str, value: String },

    /// Numeric field below zero
    Negative { field: &'static str },

    /// Rejected by a storage constraint (foreign key, check)
    Constraint { detail: String },

    /// Request body or path could not be decoded
    Malformed { detail: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
            Self::InvalidNumber { field, value } => {
                write!(f, "{} must be a number, got '{}'", field, value)
            }
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::Constraint { detail } => write!(f, "rejected by database: {}", detail),
            Self::Malformed { detail } => write!(f, "malformed request: {}", detail),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Trimmed, non-empty text of at most `max` characters.
pub fn required_text(
    field: &'static str,
    value: Option<String>,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.unwrap_or_default();
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(value.to_owned())
}

/// Free text; missing becomes empty.
pub fn optional_text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_owned()).unwrap_or_default()
}

/// Required positive row id.
pub fn required_id(field: &'static str, value: Option<String>) -> Result<i64, ValidationError> {
    let raw = required_text(field, value, 20)?;
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::InvalidNumber { field, value: raw }),
    }
}

/// Required finite, non-negative decimal.
pub fn non_negative_decimal(
    field: &'static str,
    value: Option<String>,
) -> Result<f64, ValidationError> {
    let raw = required_text(field, value, 32)?;
    let parsed = raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::InvalidNumber { field, value: raw })?;
    if parsed < 0.0 {
        return Err(ValidationError::Negative { field });
    }
    Ok(parsed)
}

/// Integer that defaults to zero when missing or blank.
pub fn integer_or_zero(field: &'static str, value: Option<String>) -> Result<i64, ValidationError> {
    optional_integer(field, value).map(|v| v.unwrap_or(0))
}

/// Optional integer; blank means absent.
pub fn optional_integer(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<i64>, ValidationError> {
    let raw = optional_text(value);
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| ValidationError::InvalidNumber { field, value: raw })
}

/// Validated email address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse an address, trimming surrounding whitespace.
    ///
    /// # Example
    /// ```
    /// use recordkeep_core::validation::EmailAddress;
    ///
    /// assert!(EmailAddress::new("sharma@gmail.com").is_ok());
    /// assert!(EmailAddress::new("not-an-address").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let s = required_text("email", Some(s.to_owned()), MAX_EMAIL_LEN)?;
        if !EMAIL_RE.is_match(&s) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like name@example.com",
            });
        }
        Ok(Self(s))
    }

    pub fn parse(value: Option<String>) -> Result<Self, ValidationError> {
        Self::new(value.as_deref().unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
