//! Storefront backend endpoints.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_base_url() -> String {
    String::from("https://api.zumbara.com/api/v1")
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("zumbara-client/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// REST API root, without a trailing slash (e.g., `https://api.zumbara.com/api/v1`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Asset host that accepts multipart uploads (payment proofs, category images).
    #[serde(default)]
    pub upload_url: String,

    /// Per-request timeout enforced by the HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            upload_url: String::new(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Uploads need a separate asset host; the REST API alone always has a default.
    #[must_use]
    pub fn has_upload_host(&self) -> bool {
        !self.upload_url.is_empty()
    }

    /// `base_url` with any trailing slash removed.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Reject values the HTTP client cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for non-HTTP URLs or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_http_url("api.base_url", &self.base_url)?;
        if self.has_upload_host() {
            check_http_url("api.upload_url", &self.upload_url)?;
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

fn check_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.starts_with("https://") || value.starts_with("http://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("expected an http(s) URL, got '{value}'"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://api.zumbara.com/api/v1");
        assert!(!config.has_upload_host());
        assert_eq!(config.timeout_secs, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn base_strips_trailing_slash() {
        let config = ApiConfig {
            base_url: "http://localhost:4000/api/".into(),
            ..Default::default()
        };
        assert_eq!(config.base(), "http://localhost:4000/api");
    }

    #[test]
    fn rejects_non_http_upload_url() {
        let config = ApiConfig {
            upload_url: "ftp://files".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.upload_url"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "api.timeout_secs"
        ));
    }
}
