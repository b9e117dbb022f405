// Copyright 2025-Present Datadog, Inc. https://www.datadoghq.com/
// SPDX-License-Identifier: Apache-2.0

use crate::error::ConfigError;
use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_URL: &str = "https://logs-01.loggly.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for a [`crate::LogglyClient`] and its HTTP transport
#[derive(Clone)]
pub struct ClientConfig {
    /// Loggly customer token, embedded in the request path
    pub token: Option<String>,
    /// Base URL of the ingestion API
    pub url: String,
    /// Initial tags, each entry possibly comma-separated
    pub tags: Vec<String>,
    /// Request timeout applied by the HTTP client
    pub timeout: Duration,
    /// HTTPS proxy URL
    pub https_proxy: Option<String>,
    /// Log level (e.g., trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            token: None,
            url: DEFAULT_URL.to_string(),
            tags: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            https_proxy: None,
            log_level: "info".to_string(),
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("url", &self.url)
            .field("tags", &self.tags)
            .field("timeout", &self.timeout)
            .field("https_proxy", &self.https_proxy)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the given token with default settings
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            ..Default::default()
        }
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_token(None)
    }

    /// Like [`ClientConfig::from_env`], but a `token` given here takes
    /// precedence over `LOGGLY_TOKEN`.
    pub fn from_env_with_token(token: Option<String>) -> Result<Self, ConfigError> {
        let token = token.or_else(|| env::var("LOGGLY_TOKEN").ok());
        let url = env::var("LOGGLY_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());
        let tags = env::var("LOGGLY_TAGS")
            .map(|val| vec![val])
            .unwrap_or_default();
        let timeout = match env::var("LOGGLY_TIMEOUT") {
            Ok(val) => val
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| {
                    ConfigError::InvalidConfig(format!(
                        "LOGGLY_TIMEOUT must be a number of seconds, got '{val}'"
                    ))
                })?,
            Err(_) => DEFAULT_TIMEOUT,
        };
        let https_proxy = env::var("LOGGLY_PROXY_HTTPS")
            .or_else(|_| env::var("HTTPS_PROXY"))
            .ok();
        let log_level = env::var("LOGGLY_LOG_LEVEL")
            .map(|val| val.to_lowercase())
            .unwrap_or_else(|_| "info".to_string());

        let config = Self {
            token,
            url,
            tags,
            timeout,
            https_proxy,
            log_level,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.token()?;

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::InvalidConfig(format!(
                "URL must start with http:// or https://, got: {}",
                self.url
            )));
        }

        if self.timeout.is_zero() {
            return Err(ConfigError::InvalidConfig(
                "timeout must be greater than 0".to_string(),
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::InvalidConfig(format!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.log_level
            )));
        }

        Ok(())
    }

    /// The configured token, or [`ConfigError::EmptyToken`] if it is missing or empty
    pub fn token(&self) -> Result<&str, ConfigError> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::EmptyToken),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const ENV_VARS: [&str; 7] = [
        "LOGGLY_TOKEN",
        "LOGGLY_URL",
        "LOGGLY_TAGS",
        "LOGGLY_TIMEOUT",
        "LOGGLY_PROXY_HTTPS",
        "HTTPS_PROXY",
        "LOGGLY_LOG_LEVEL",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config_requires_token() {
        let config = ClientConfig::default();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn test_new_config_is_valid() {
        let config = ClientConfig::new("a-token");
        assert!(config.validate().is_ok());
        assert_eq!(config.url, DEFAULT_URL);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_validate_empty_token() {
        let config = ClientConfig::new("");
        assert!(matches!(config.validate(), Err(ConfigError::EmptyToken)));
    }

    #[test]
    fn test_validate_invalid_url() {
        let config = ClientConfig {
            url: "logs-01.loggly.com".to_string(),
            ..ClientConfig::new("a-token")
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidConfig(msg)) if msg.contains("http://")
        ));
    }

    #[test]
    fn test_validate_zero_timeout() {
        let config = ClientConfig {
            timeout: Duration::ZERO,
            ..ClientConfig::new("a-token")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_valid_log_levels() {
        for level in VALID_LOG_LEVELS {
            let config = ClientConfig {
                log_level: level.to_string(),
                ..ClientConfig::new("a-token")
            };
            assert!(
                config.validate().is_ok(),
                "Log level '{}' should be valid",
                level
            );
        }

        let config = ClientConfig {
            log_level: "verbose".to_string(),
            ..ClientConfig::new("a-token")
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env() {
        clear_env();
        env::set_var("LOGGLY_TOKEN", "env-token");
        env::set_var("LOGGLY_URL", "http://127.0.0.1:8080");
        env::set_var("LOGGLY_TAGS", "android, demo");
        env::set_var("LOGGLY_TIMEOUT", "5");
        env::set_var("HTTPS_PROXY", "https://proxy.example.com");
        env::set_var("LOGGLY_LOG_LEVEL", "DEBUG");

        let config = ClientConfig::from_env().expect("valid configuration");
        clear_env();

        assert_eq!(config.token.as_deref(), Some("env-token"));
        assert_eq!(config.url, "http://127.0.0.1:8080");
        assert_eq!(config.tags, vec!["android, demo".to_string()]);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.https_proxy.as_deref(),
            Some("https://proxy.example.com")
        );
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_from_env_prefers_loggly_proxy() {
        clear_env();
        env::set_var("LOGGLY_TOKEN", "env-token");
        env::set_var("LOGGLY_PROXY_HTTPS", "https://loggly-proxy.example.com");
        env::set_var("HTTPS_PROXY", "https://proxy.example.com");

        let config = ClientConfig::from_env().expect("valid configuration");
        clear_env();

        assert_eq!(
            config.https_proxy.as_deref(),
            Some("https://loggly-proxy.example.com")
        );
    }

    #[test]
    #[serial]
    fn test_from_env_missing_token() {
        clear_env();
        assert!(matches!(
            ClientConfig::from_env(),
            Err(ConfigError::EmptyToken)
        ));
    }

    #[test]
    #[serial]
    fn test_from_env_with_token_overrides_env() {
        clear_env();
        env::set_var("LOGGLY_TOKEN", "env-token");
        env::set_var("LOGGLY_URL", "http://127.0.0.1:8080");

        let config = ClientConfig::from_env_with_token(Some("arg-token".to_string()))
            .expect("valid configuration");
        let fallback = ClientConfig::from_env_with_token(None).expect("valid configuration");
        clear_env();

        assert_eq!(config.token.as_deref(), Some("arg-token"));
        assert_eq!(config.url, "http://127.0.0.1:8080");
        assert_eq!(fallback.token.as_deref(), Some("env-token"));
    }

    #[test]
    #[serial]
    fn test_from_env_with_token_without_env_token() {
        clear_env();
        let config = ClientConfig::from_env_with_token(Some("arg-token".to_string()))
            .expect("valid configuration");
        assert_eq!(config.token.as_deref(), Some("arg-token"));
        assert!(env::var("LOGGLY_TOKEN").is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("secret-token-abc123");
        let output = format!("{config:?}");
        assert!(!output.contains("secret-token-abc123"));
        assert!(output.contains("<redacted>"));
        assert!(output.contains(DEFAULT_URL));
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_timeout() {
        clear_env();
        env::set_var("LOGGLY_TOKEN", "env-token");
        env::set_var("LOGGLY_TIMEOUT", "soon");

        let result = ClientConfig::from_env();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidConfig(msg)) if msg.contains("LOGGLY_TIMEOUT")
        ));
    }
}
