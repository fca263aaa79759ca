//! Application configuration from environment variables.

use camino::Utf8PathBuf;
use mockable::Env;
use url::Url;

/// Variable naming the REST store's base URL. Unset or blank selects the
/// offline fallback backend.
pub const API_BASE_URL_ENV: &str = "SHOKUNIN_API_BASE_URL";

/// Variable overriding where the session file is persisted.
pub const SESSION_FILE_ENV: &str = "SHOKUNIN_SESSION_FILE";

const DEFAULT_SESSION_FILE: &str = "shokunin-session.json";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the remote store, when one is configured.
    pub api_base_url: Option<Url>,
    /// Where the session identity is persisted.
    pub session_file: Utf8PathBuf,
}

/// Errors raised while validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
        /// What a valid value looks like.
        expected: &'static str,
    },
}

/// Build configuration from environment variables.
///
/// Blank and whitespace-only values are treated as unset, so an empty
/// `SHOKUNIN_API_BASE_URL` selects the offline fallback rather than
/// failing URL parsing.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnv`] when the base URL is present but
/// does not parse as an absolute URL.
pub fn app_config_from_env<E: Env>(env: &E) -> Result<AppConfig, ConfigError> {
    let api_base_url = match env.string(API_BASE_URL_ENV) {
        Some(value) if !value.trim().is_empty() => {
            let parsed = Url::parse(value.trim()).map_err(|_| ConfigError::InvalidEnv {
                name: API_BASE_URL_ENV,
                value: value.clone(),
                expected: "an absolute http(s) URL",
            })?;
            Some(parsed)
        }
        _ => None,
    };

    let session_file = match env.string(SESSION_FILE_ENV) {
        Some(value) if !value.trim().is_empty() => Utf8PathBuf::from(value.trim()),
        _ => Utf8PathBuf::from(DEFAULT_SESSION_FILE),
    };

    Ok(AppConfig {
        api_base_url,
        session_file,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use rstest::rstest;

    fn env_with(base_url: Option<&str>, session_file: Option<&str>) -> MockEnv {
        let base_url = base_url.map(str::to_owned);
        let session_file = session_file.map(str::to_owned);
        let mut env = MockEnv::new();
        env.expect_string().returning(move |name| match name {
            API_BASE_URL_ENV => base_url.clone(),
            SESSION_FILE_ENV => session_file.clone(),
            _ => None,
        });
        env
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = app_config_from_env(&env_with(None, None)).expect("config builds");
        assert_eq!(config.api_base_url, None);
        assert_eq!(config.session_file, Utf8PathBuf::from(DEFAULT_SESSION_FILE));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_base_url_selects_the_fallback(#[case] value: &str) {
        let config = app_config_from_env(&env_with(Some(value), None)).expect("config builds");
        assert_eq!(config.api_base_url, None);
    }

    #[test]
    fn configured_values_are_picked_up() {
        let env = env_with(
            Some("https://api.example.com/v1/"),
            Some("/tmp/session.json"),
        );
        let config = app_config_from_env(&env).expect("config builds");
        assert_eq!(
            config.api_base_url.as_ref().map(Url::as_str),
            Some("https://api.example.com/v1/")
        );
        assert_eq!(config.session_file, Utf8PathBuf::from("/tmp/session.json"));
    }

    #[test]
    fn malformed_base_url_is_rejected() {
        let err = app_config_from_env(&env_with(Some("not a url"), None))
            .expect_err("malformed URL rejected");
        assert!(matches!(err, ConfigError::InvalidEnv { name, .. } if name == API_BASE_URL_ENV));
    }
}
