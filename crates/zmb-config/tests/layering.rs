//! Integration tests for TOML + environment layering.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation and cwd.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use zmb_config::{ConfigError, ZumbaraConfig};
use zmb_core::enums::Language;

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "http://localhost:4000/api/v1"
upload_url = "http://localhost:4001"
timeout_secs = 3
user_agent = "zmb-test"
"#,
        )?;

        let figment = Figment::from(Serialized::defaults(ZumbaraConfig::default()))
            .merge(Toml::file("config.toml"));
        let config = ZumbaraConfig::from_figment(&figment).expect("config loads");

        assert_eq!(config.api.base(), "http://localhost:4000/api/v1");
        assert_eq!(config.api.upload_url, "http://localhost:4001");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.user_agent, "zmb-test");
        assert!(config.api.has_upload_host());
        Ok(())
    });
}

#[test]
fn loads_general_language_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
language = "am"
default_limit = 50
"#,
        )?;

        let config: ZumbaraConfig = Figment::from(Serialized::defaults(ZumbaraConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.language, Language::Am);
        assert_eq!(config.general.default_limit, 50);
        assert_eq!(config.general.otp_length, 6);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".zumbara")?;
        jail.create_file(
            ".zumbara/config.toml",
            r#"
[session]
token = "tok-from-project"
"#,
        )?;

        let config = ZumbaraConfig::load().expect("config loads");
        assert_eq!(config.session.token, "tok-from-project");
        assert!(config.session.is_configured());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".zumbara")?;
        jail.create_file(
            ".zumbara/config.toml",
            r#"
[api]
base_url = "http://from-toml"
"#,
        )?;
        jail.set_env("ZUMBARA_API__BASE_URL", "https://from-env.example/api");
        jail.set_env("ZUMBARA_GENERAL__LANGUAGE", "ar");

        let config = ZumbaraConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://from-env.example/api");
        assert_eq!(config.general.language, Language::Ar);
        Ok(())
    });
}

#[test]
fn single_underscore_env_is_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("ZUMBARA_API_BASE_URL", "https://wrong.example");

        let figment = Figment::from(Serialized::defaults(ZumbaraConfig::default()))
            .merge(Env::prefixed("ZUMBARA_").split("__"));
        let config = ZumbaraConfig::from_figment(&figment).expect("config loads");
        assert_eq!(config.api.base_url, "https://api.zumbara.com/api/v1");
        Ok(())
    });
}

#[test]
fn invalid_base_url_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ZUMBARA_API__BASE_URL", "api.zumbara.com");

        let err = ZumbaraConfig::load().expect_err("scheme-less URL should fail");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "api.base_url"));
        Ok(())
    });
}

#[test]
fn otp_length_comes_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("ZUMBARA_GENERAL__OTP_LENGTH", "4");

        let config = ZumbaraConfig::load().expect("config loads");
        assert_eq!(config.general.otp_length, 4);
        Ok(())
    });
}

#[test]
fn zero_otp_length_is_rejected() {
    Jail::expect_with(|jail| {
        jail.set_env("ZUMBARA_GENERAL__OTP_LENGTH", "0");

        let err = ZumbaraConfig::load().expect_err("zero-length code should fail");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "general.otp_length"));
        Ok(())
    });
}
