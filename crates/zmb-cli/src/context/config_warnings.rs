use zmb_config::ZumbaraConfig;

const ENV_PREFIX: &str = "ZUMBARA_";

/// Env vars read directly rather than through the config layers.
const STANDALONE_VARS: &[&str] = &["ZUMBARA_LOG"];

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &ZumbaraConfig) {
    for warning in collect_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_warnings<I>(config: &ZumbaraConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut warnings = Vec::new();

    for (key, _) in env {
        let Some(rest) = key.strip_prefix(ENV_PREFIX) else {
            continue;
        };
        if STANDALONE_VARS.contains(&key.as_str()) || rest.contains("__") {
            continue;
        }
        warnings.push(format!(
            "{key} is ignored. Nested keys need double underscores (example: ZUMBARA_API__BASE_URL)."
        ));
    }

    if !config.session.is_configured() {
        tracing::debug!("no session token configured; browsing anonymously");
    }

    warnings
}

#[cfg(test)]
mod tests {
    use zmb_config::{SessionConfig, ZumbaraConfig};

    use super::collect_warnings;

    fn signed_in() -> ZumbaraConfig {
        ZumbaraConfig {
            session: SessionConfig {
                token: "tok".to_string(),
            },
            ..ZumbaraConfig::default()
        }
    }

    #[test]
    fn warns_for_single_underscore_keys() {
        let warnings = collect_warnings(
            &signed_in(),
            vec![
                ("ZUMBARA_API_BASE_URL".to_string(), "http://x".to_string()),
                ("ZUMBARA_API__TIMEOUT_SECS".to_string(), "5".to_string()),
                ("ZUMBARA_LOG".to_string(), "debug".to_string()),
                ("HOME".to_string(), "/root".to_string()),
            ],
        );
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].starts_with("ZUMBARA_API_BASE_URL"));
    }

    #[test]
    fn anonymous_session_is_not_a_warning() {
        assert!(collect_warnings(&ZumbaraConfig::default(), Vec::new()).is_empty());
    }

    #[test]
    fn configured_environment_is_silent() {
        assert!(collect_warnings(&signed_in(), Vec::new()).is_empty());
    }
}
