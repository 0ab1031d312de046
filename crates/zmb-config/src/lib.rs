//! # zmb-config
//!
//! Layered configuration loading for the Zumbara storefront client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ZUMBARA_*` prefix, `__` as separator)
//! 2. Project-level `.zumbara/config.toml`
//! 3. User-level `~/.config/zumbara/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ZUMBARA_API__BASE_URL` -> `api.base_url`,
//! `ZUMBARA_SESSION__TOKEN` -> `session.token`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use zmb_config::ZumbaraConfig;
//!
//! let config = ZumbaraConfig::load().expect("config");
//! println!("API: {}", config.api.base());
//! ```

mod api;
mod error;
mod general;
mod session;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use session::SessionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const ENV_PREFIX: &str = "ZUMBARA_";
const PROJECT_CONFIG: &str = ".zumbara/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ZumbaraConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ZumbaraConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT read `.env` files; the binary loads those before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source cannot be parsed and
    /// [`ConfigError::InvalidValue`] when the merged values fail validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Extract and validate from an arbitrary figment. Tests build their own
    /// provider chain and funnel it through here.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.api.validate()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// The upload host, or an error naming the missing section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when `api.upload_url` is empty.
    pub fn upload_url(&self) -> Result<&str, ConfigError> {
        if self.api.has_upload_host() {
            Ok(self.api.upload_url.trim_end_matches('/'))
        } else {
            Err(ConfigError::NotConfigured {
                section: "api.upload_url".to_string(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("zumbara").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ZumbaraConfig::default();
        assert!(!config.session.is_configured());
        assert!(!config.api.has_upload_host());
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn upload_url_requires_configuration() {
        let config = ZumbaraConfig::default();
        assert!(matches!(
            config.upload_url(),
            Err(ConfigError::NotConfigured { section }) if section == "api.upload_url"
        ));
    }

    #[test]
    fn upload_url_trims_trailing_slash() {
        let mut config = ZumbaraConfig::default();
        config.api.upload_url = "https://files.zumbara.com/".to_string();
        assert_eq!(config.upload_url().unwrap(), "https://files.zumbara.com");
    }
}
