//! General application configuration.

use serde::{Deserialize, Serialize};
use zmb_core::enums::Language;

use crate::error::ConfigError;

/// Longest one-time code the backend issues.
const MAX_OTP_LENGTH: usize = 12;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Default carousel rotation interval.
const fn default_carousel_interval_ms() -> u64 {
    5000
}

/// Default number of OTP digits.
const fn default_otp_length() -> usize {
    6
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Interface language for translated labels and messages.
    #[serde(default)]
    pub language: Language,

    /// Default page size for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Home page carousel rotation interval, in milliseconds.
    #[serde(default = "default_carousel_interval_ms")]
    pub carousel_interval_ms: u64,

    /// Number of digits in a one-time password.
    #[serde(default = "default_otp_length")]
    pub otp_length: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            default_limit: default_limit(),
            carousel_interval_ms: default_carousel_interval_ms(),
            otp_length: default_otp_length(),
        }
    }
}

impl GeneralConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `otp_length` is outside `1..=12`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_OTP_LENGTH).contains(&self.otp_length) {
            return Err(ConfigError::InvalidValue {
                field: "general.otp_length".to_string(),
                reason: format!("must be between 1 and {MAX_OTP_LENGTH}, got {}", self.otp_length),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.language, Language::En);
        assert_eq!(config.default_limit, 20);
        assert_eq!(config.carousel_interval_ms, 5000);
        assert_eq!(config.otp_length, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn otp_length_must_be_positive_and_bounded() {
        let mut config = GeneralConfig::default();
        config.otp_length = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "general.otp_length"
        ));
        config.otp_length = 13;
        assert!(config.validate().is_err());
        config.otp_length = 4;
        assert!(config.validate().is_ok());
    }
}
