use serde::{Deserialize, Serialize};
use std::time::Duration;
use veriwork_types::DEFAULT_SESSION_EXPIRED_MESSAGE;

fn default_refresh_margin_secs() -> u64 {
    60
}
fn default_renew_url() -> String {
    "http://127.0.0.1:4000/auth/refresh".to_string()
}
fn default_expired_message() -> String {
    DEFAULT_SESSION_EXPIRED_MESSAGE.to_string()
}

/// Session-layer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Remaining lifetime, in seconds, below which a credential is renewed
    /// before use (defaults to 60).
    #[serde(default = "default_refresh_margin_secs")]
    pub refresh_margin_secs: u64,
    /// Renewal endpoint of the auth backend.
    #[serde(default = "default_renew_url")]
    pub renew_url: String,
    /// Wording shown when the session cannot be renewed.
    #[serde(default = "default_expired_message")]
    pub expired_message: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            refresh_margin_secs: default_refresh_margin_secs(),
            renew_url: default_renew_url(),
            expired_message: default_expired_message(),
        }
    }
}

impl SessionConfig {
    /// The refresh margin as a [`Duration`].
    #[must_use]
    pub fn refresh_margin(&self) -> Duration {
        Duration::from_secs(self.refresh_margin_secs)
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:4000".to_string()
}

/// API-backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all authenticated request paths are resolved against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Parses configuration from a YAML string, merged with defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the YAML is invalid or extraction fails.
    #[allow(clippy::result_large_err)]
    pub fn from_yaml(yaml: &str) -> Result<Self, figment::Error> {
        use figment::{
            Figment,
            providers::{Format as _, Serialized, Yaml},
        };
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::string(yaml))
            .extract()
    }

    /// Loads configuration from a file path, merged with defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`figment::Error`] if the file cannot be read or parsed.
    #[allow(clippy::result_large_err)]
    pub fn from_file(path: &std::path::Path) -> Result<Self, figment::Error> {
        use figment::{
            Figment,
            providers::{Format as _, Serialized, Yaml},
        };
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path))
            .extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    const SAMPLE_YAML: &str = r#"
session:
  refresh_margin_secs: 120
  renew_url: "https://auth.veriwork.dev/refresh"
api:
  base_url: "https://api.veriwork.dev"
"#;

    #[test]
    fn test_default_config() {
        let c = Config::default();
        assert_eq!(c.session.refresh_margin_secs, 60);
        assert_eq!(c.session.refresh_margin(), Duration::from_secs(60));
        assert_eq!(c.session.expired_message, DEFAULT_SESSION_EXPIRED_MESSAGE);
        assert_eq!(c.api.base_url, "http://127.0.0.1:4000");
    }

    #[test]
    fn test_from_yaml_overrides() {
        let c = Config::from_yaml(SAMPLE_YAML).unwrap();
        assert_eq!(c.session.refresh_margin_secs, 120);
        assert_eq!(c.session.renew_url, "https://auth.veriwork.dev/refresh");
        assert_eq!(c.api.base_url, "https://api.veriwork.dev");
    }

    #[test]
    fn test_from_yaml_defaults_applied() {
        let c = Config::from_yaml("api:\n  base_url: \"https://x.test\"").unwrap();
        assert_eq!(c.api.base_url, "https://x.test");
        assert_eq!(c.session.refresh_margin_secs, 60); // default preserved
        assert_eq!(c.session.expired_message, DEFAULT_SESSION_EXPIRED_MESSAGE);
    }

    #[test]
    fn test_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(SAMPLE_YAML.as_bytes()).unwrap();
        let c = Config::from_file(f.path()).unwrap();
        assert_eq!(c.session.refresh_margin_secs, 120);
    }

    #[test]
    fn test_from_file_missing_is_all_defaults() {
        let c = Config::from_file(std::path::Path::new("/nonexistent/veriwork.yaml")).unwrap();
        assert_eq!(c.session.refresh_margin_secs, 60);
    }
}
