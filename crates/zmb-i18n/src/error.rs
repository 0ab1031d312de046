//! Translation error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    /// A language code outside the supported set.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// A dictionary is not a JSON object of nested strings.
    #[error("invalid dictionary for '{language}': {reason}")]
    Dictionary { language: String, reason: String },
}
