//! Form input validation run before anything is submitted to the backend.
//!
//! Failures are reported inline next to the offending field, so every error
//! carries the field name it belongs to.

use thiserror::Error;

/// Ethiopian country calling code.
const COUNTRY_CODE: &str = "251";

/// Subscriber numbers are 9 digits and start with 9 (Ethio Telecom) or 7 (Safaricom).
const SUBSCRIBER_DIGITS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty or whitespace.
    #[error("{field} is required")]
    Required { field: String },

    /// A phone number did not match any accepted format.
    #[error("invalid phone number '{0}'")]
    InvalidPhone(String),

    /// A field exceeded its maximum length in characters.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// The form field this error should be rendered next to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::Required { field } | Self::TooLong { field, .. } => field,
            Self::InvalidPhone(_) => "phone",
        }
    }

    /// Translation key for the inline message.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Required { .. } => "errors.validation.required",
            Self::InvalidPhone(_) => "errors.validation.phone",
            Self::TooLong { .. } => "errors.validation.too_long",
        }
    }

    /// Placeholder values for the message named by [`Self::key`].
    #[must_use]
    pub fn args(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Required { field } => vec![("field", field.clone())],
            Self::InvalidPhone(_) => Vec::new(),
            Self::TooLong { field, max } => vec![("field", field.clone()), ("max", max.to_string())],
        }
    }
}

/// Require a non-blank value, returning it trimmed.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] when `value` is empty after trimming.
pub fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(trimmed)
}

/// Require a non-blank value of at most `max` characters.
///
/// # Errors
///
/// Returns [`ValidationError::Required`] or [`ValidationError::TooLong`].
pub fn bounded<'a>(field: &str, value: &'a str, max: usize) -> Result<&'a str, ValidationError> {
    let trimmed = required(field, value)?;
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }
    Ok(trimmed)
}

/// Normalize an Ethiopian mobile number to E.164 (`+2519XXXXXXXX`).
///
/// Accepted inputs, ignoring spaces, hyphens, dots and parentheses:
/// `+2519XXXXXXXX`, `2519XXXXXXXX`, `09XXXXXXXX`, `9XXXXXXXX`, and the same
/// forms with a leading 7 instead of 9.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidPhone`] for anything else, and
/// [`ValidationError::Required`] for blank input.
pub fn phone(value: &str) -> Result<String, ValidationError> {
    let raw = required("phone", value)?;
    let compact: String = raw
        .chars()
        .filter(|ch| !matches!(ch, ' ' | '-' | '.' | '(' | ')'))
        .collect();

    let digits = compact.strip_prefix('+').unwrap_or(&compact);
    if !digits.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(ValidationError::InvalidPhone(raw.to_string()));
    }
    // A '+' is only meaningful in front of the country code.
    if compact.starts_with('+') && !digits.starts_with(COUNTRY_CODE) {
        return Err(ValidationError::InvalidPhone(raw.to_string()));
    }

    let subscriber = if digits.len() == COUNTRY_CODE.len() + SUBSCRIBER_DIGITS {
        digits.strip_prefix(COUNTRY_CODE)
    } else if digits.len() == SUBSCRIBER_DIGITS + 1 {
        digits.strip_prefix('0')
    } else if digits.len() == SUBSCRIBER_DIGITS {
        Some(digits)
    } else {
        None
    };

    match subscriber {
        Some(number) if number.starts_with('9') || number.starts_with('7') => {
            Ok(format!("+{COUNTRY_CODE}{number}"))
        }
        _ => Err(ValidationError::InvalidPhone(raw.to_string())),
    }
}
