//! Service configuration
//!
//! Each service client is configured from environment variables or from a
//! YAML document with one section per service:
//!
//! ```yaml
//! resource_controller:
//!   url: https://resource-controller.cloud.ibm.com
//!   bearer_token: eyJraWQiOi...
//!   timeout_secs: 60
//!   max_retries: 5
//!   backoff:
//!     type: linear
//!     initial_ms: 200
//! global_search:
//!   requests_per_second: 5
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use url::Url;

// ============================================================================
// Service Config
// ============================================================================

/// Connection settings for one service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service base URL; the service's default endpoint when absent
    #[serde(default)]
    pub url: Option<String>,

    /// Static bearer token sent as the `Authorization` header
    #[serde(default)]
    pub bearer_token: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Maximum number of retries per request
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub backoff: BackoffConfig,

    /// Client-side rate limit, 0 disables it
    #[serde(default = "default_rps")]
    pub requests_per_second: u32,

    /// Requests allowed in a burst
    #[serde(default = "default_burst")]
    pub burst_size: u32,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: None,
            bearer_token: None,
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            backoff: BackoffConfig::default(),
            requests_per_second: default_rps(),
            burst_size: default_burst(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_max_retries() -> u32 {
    3
}

fn default_rps() -> u32 {
    10
}

fn default_burst() -> u32 {
    10
}

/// Backoff configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    30_000
}

impl ServiceConfig {
    /// Load the settings of `service_name` from the process environment
    ///
    /// Reads `<NAME>_URL`, `<NAME>_BEARER_TOKEN`, `<NAME>_TIMEOUT` and
    /// `<NAME>_MAX_RETRIES`, where NAME is the upper-cased service name.
    pub fn from_env(service_name: &str) -> Result<Self> {
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// Load the settings of `service_name` through a variable lookup
    pub fn from_lookup<F>(service_name: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = env_prefix(service_name);
        let var = |suffix: &str| {
            let key = format!("{prefix}_{suffix}");
            lookup(&key)
                .filter(|value| !value.trim().is_empty())
                .map(|value| (key, value))
        };

        let mut config = Self::default();
        if let Some((_, url)) = var("URL") {
            config.url = Some(url);
        }
        if let Some((_, token)) = var("BEARER_TOKEN") {
            config.bearer_token = Some(token);
        }
        if let Some((key, value)) = var("TIMEOUT") {
            config.timeout_secs = parse_number(&key, &value)?;
        }
        if let Some((key, value)) = var("MAX_RETRIES") {
            config.max_retries = parse_number(&key, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse the section for `service_name` out of a YAML document
    ///
    /// A document without that section yields the defaults.
    pub fn from_yaml_str(yaml: &str, service_name: &str) -> Result<Self> {
        let mut sections: HashMap<String, ServiceConfig> = serde_yaml::from_str(yaml)?;
        let config = sections.remove(service_name).unwrap_or_default();
        config.validate()?;
        Ok(config)
    }

    /// Read a YAML document from disk and parse the section for `service_name`
    pub fn from_yaml_file(path: impl AsRef<Path>, service_name: &str) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml_str(&content, service_name)
    }

    /// Check values that serde cannot check on its own
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url) = self.url {
            Url::parse(url).map_err(|e| Error::invalid_value("url", e.to_string()))?;
        }
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value(
                "timeout_secs",
                "must be greater than zero",
            ));
        }
        if self.backoff.initial_ms > self.backoff.max_ms {
            return Err(Error::invalid_value(
                "backoff",
                "initial_ms must not exceed max_ms",
            ));
        }
        Ok(())
    }

    /// Transport configuration for these settings
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .max_retries(self.max_retries)
            .backoff(
                self.backoff.backoff_type,
                Duration::from_millis(self.backoff.initial_ms),
                Duration::from_millis(self.backoff.max_ms),
            );

        builder = if self.requests_per_second == 0 {
            builder.no_rate_limit()
        } else {
            builder.rate_limit(RateLimiterConfig::new(
                self.requests_per_second,
                self.burst_size,
            ))
        };
        if let Some(ref url) = self.url {
            builder = builder.base_url(url);
        }
        if let Some(ref token) = self.bearer_token {
            builder = builder.bearer_token(token);
        }

        builder.build()
    }
}

/// Environment variable prefix for a service name
fn env_prefix(service_name: &str) -> String {
    service_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

fn parse_number<T>(key: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| Error::invalid_value(key, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_default_service_config() {
        let config = ServiceConfig::default();
        assert!(config.url.is_none());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.backoff.backoff_type, BackoffType::Exponential);
        assert_eq!(config.requests_per_second, 10);
    }

    #[test_case("global_search", "GLOBAL_SEARCH" ; "snake case")]
    #[test_case("resource-controller", "RESOURCE_CONTROLLER" ; "kebab case")]
    #[test_case("Search2", "SEARCH2" ; "digits")]
    fn test_env_prefix(name: &str, expected: &str) {
        assert_eq!(env_prefix(name), expected);
    }

    #[test]
    fn test_from_lookup() {
        let config = ServiceConfig::from_lookup(
            "resource_controller",
            lookup(&[
                ("RESOURCE_CONTROLLER_URL", "http://localhost:8080"),
                ("RESOURCE_CONTROLLER_BEARER_TOKEN", "token-1"),
                ("RESOURCE_CONTROLLER_TIMEOUT", "45"),
                ("RESOURCE_CONTROLLER_MAX_RETRIES", " 1 "),
                ("GLOBAL_SEARCH_URL", "http://elsewhere"),
            ]),
        )
        .unwrap();

        assert_eq!(config.url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(config.bearer_token.as_deref(), Some("token-1"));
        assert_eq!(config.timeout_secs, 45);
        assert_eq!(config.max_retries, 1);
    }

    #[test]
    fn test_from_lookup_empty_values_ignored() {
        let config =
            ServiceConfig::from_lookup("global_search", lookup(&[("GLOBAL_SEARCH_URL", "  ")]))
                .unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test_case("GLOBAL_SEARCH_TIMEOUT", "soon" ; "timeout not a number")]
    #[test_case("GLOBAL_SEARCH_MAX_RETRIES", "-1" ; "negative retries")]
    fn test_from_lookup_invalid_number(key: &str, value: &str) {
        let err = ServiceConfig::from_lookup("global_search", lookup(&[(key, value)])).unwrap_err();
        match err {
            Error::InvalidConfigValue { field, .. } => assert_eq!(field, key),
            other => panic!("expected InvalidConfigValue, got {other:?}"),
        }
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        std::env::set_var("PLATFORM_SERVICES_CONFIG_TEST_URL", "http://from-env");
        let config = ServiceConfig::from_env("platform_services_config_test").unwrap();
        std::env::remove_var("PLATFORM_SERVICES_CONFIG_TEST_URL");

        assert_eq!(config.url.as_deref(), Some("http://from-env"));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r#"
resource_controller:
  url: "https://rc.example.com"
  timeout_secs: 60
  backoff:
    type: linear
    initial_ms: 200
global_search:
  requests_per_second: 0
"#;

        let rc = ServiceConfig::from_yaml_str(yaml, "resource_controller").unwrap();
        assert_eq!(rc.url.as_deref(), Some("https://rc.example.com"));
        assert_eq!(rc.timeout_secs, 60);
        assert_eq!(rc.max_retries, 3);
        assert_eq!(rc.backoff.backoff_type, BackoffType::Linear);
        assert_eq!(rc.backoff.initial_ms, 200);
        assert_eq!(rc.backoff.max_ms, 30_000);

        let gs = ServiceConfig::from_yaml_str(yaml, "global_search").unwrap();
        assert_eq!(gs.requests_per_second, 0);
        assert!(gs.http_config().rate_limit.is_none());

        let missing = ServiceConfig::from_yaml_str(yaml, "other_service").unwrap();
        assert_eq!(missing, ServiceConfig::default());
    }

    #[test_case("svc:\n  url: \"not a url\"\n", "url" ; "bad url")]
    #[test_case("svc:\n  timeout_secs: 0\n", "timeout_secs" ; "zero timeout")]
    #[test_case("svc:\n  backoff:\n    initial_ms: 5000\n    max_ms: 10\n", "backoff" ; "inverted backoff")]
    fn test_from_yaml_str_invalid(yaml: &str, field: &str) {
        let err = ServiceConfig::from_yaml_str(yaml, "svc").unwrap_err();
        assert!(
            matches!(err, Error::InvalidConfigValue { field: ref f, .. } if f == field),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_from_yaml_str_malformed() {
        let err = ServiceConfig::from_yaml_str("svc: [unterminated", "svc").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "global_search:\n  url: \"http://localhost:9000\"\n  max_retries: 0").unwrap();

        let config = ServiceConfig::from_yaml_file(file.path(), "global_search").unwrap();
        assert_eq!(config.url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(config.max_retries, 0);
    }

    #[test]
    fn test_from_yaml_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = ServiceConfig::from_yaml_file(dir.path().join("absent.yaml"), "svc").unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }

    #[test]
    fn test_http_config() {
        let config = ServiceConfig {
            url: Some("https://rc.example.com".to_string()),
            bearer_token: Some("token-1".to_string()),
            timeout_secs: 12,
            max_retries: 2,
            backoff: BackoffConfig {
                backoff_type: BackoffType::Constant,
                initial_ms: 50,
                max_ms: 500,
            },
            requests_per_second: 4,
            burst_size: 2,
        };

        let http = config.http_config();
        assert_eq!(http.base_url.as_deref(), Some("https://rc.example.com"));
        assert_eq!(http.bearer_token.as_deref(), Some("token-1"));
        assert_eq!(http.timeout, Duration::from_secs(12));
        assert_eq!(http.max_retries, 2);
        assert_eq!(http.backoff_type, BackoffType::Constant);
        assert_eq!(http.initial_backoff, Duration::from_millis(50));
        assert_eq!(http.max_backoff, Duration::from_millis(500));
        assert_eq!(http.rate_limit, Some(RateLimiterConfig::new(4, 2)));
    }
}
