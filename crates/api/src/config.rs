use std::str::FromStr;

use axum::http::HeaderValue;
use cruddur_core::identity::DEFAULT_USER_HANDLE;

use crate::reporting::ROLLBAR_ENDPOINT;

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be a valid {expected}, got {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("{var} is not a usable CORS origin: {value:?}")]
    InvalidOrigin { var: &'static str, value: String },
}

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Error-reporting (Rollbar) settings.
#[derive(Debug, Clone)]
pub struct ReportingConfig {
    /// Project access token. Reporting is disabled when absent.
    pub access_token: Option<String>,
    /// Environment tag attached to every item (default: `development`).
    pub environment: String,
    /// Item ingestion URL (default: [`ROLLBAR_ENDPOINT`]).
    pub endpoint: String,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            environment: "development".into(),
            endpoint: ROLLBAR_ENDPOINT.into(),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `4567`).
    pub port: u16,
    /// Frontend origin allowed to call `/api/*`.
    pub frontend_url: Option<String>,
    /// Backend origin allowed to call `/api/*`.
    pub backend_url: Option<String>,
    /// Telemetry backend key. Only its presence is ever reported.
    pub honeycomb_api_key: Option<String>,
    pub reporting: ReportingConfig,
    /// Handle the placeholder identity resolver answers with.
    pub current_user_handle: String,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default        |
    /// |------------------------|----------------|
    /// | `HOST`                 | `0.0.0.0`      |
    /// | `PORT`                 | `4567`         |
    /// | `FRONTEND_URL`         | unset          |
    /// | `BACKEND_URL`          | unset          |
    /// | `HONEYCOMB_API_KEY`    | unset          |
    /// | `ROLLBAR_ACCESS_TOKEN` | unset          |
    /// | `ROLLBAR_ENVIRONMENT`  | `development`  |
    /// | `ROLLBAR_ENDPOINT`     | Rollbar API    |
    /// | `CURRENT_USER_HANDLE`  | `andrewbrown`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`           |
    /// | `LOG_FORMAT`           | `pretty`       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_or("PORT", var("PORT"), 4567_u16, "u16")?;
        let request_timeout_secs =
            parse_or("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 30_u64, "u64")?;

        let frontend_url = origin("FRONTEND_URL", var("FRONTEND_URL"))?;
        let backend_url = origin("BACKEND_URL", var("BACKEND_URL"))?;

        let log_format = match var("LOG_FORMAT") {
            None => LogFormat::default(),
            Some(value) => value.parse().map_err(|()| ConfigError::Invalid {
                var: "LOG_FORMAT",
                expected: "log format (pretty or json)",
                value,
            })?,
        };

        Ok(Self {
            host,
            port,
            frontend_url,
            backend_url,
            honeycomb_api_key: var("HONEYCOMB_API_KEY"),
            reporting: ReportingConfig {
                access_token: var("ROLLBAR_ACCESS_TOKEN"),
                environment: var("ROLLBAR_ENVIRONMENT").unwrap_or_else(|| "development".into()),
                endpoint: var("ROLLBAR_ENDPOINT").unwrap_or_else(|| ROLLBAR_ENDPOINT.into()),
            },
            current_user_handle: var("CURRENT_USER_HANDLE")
                .unwrap_or_else(|| DEFAULT_USER_HANDLE.into()),
            request_timeout_secs,
            log_format,
        })
    }

    /// Origins allowed to reach `/api/*`, in configuration order.
    pub fn cors_origins(&self) -> Vec<&str> {
        [self.frontend_url.as_deref(), self.backend_url.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }

    /// Exact match against the configured origins, as the CORS layer does.
    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        self.cors_origins().iter().any(|allowed| *allowed == origin)
    }
}

fn parse_or<T: FromStr>(
    var: &'static str,
    value: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        }),
    }
}

/// Normalize an origin URL (no trailing slash) and make sure it can be
/// sent back in a response header.
fn origin(var: &'static str, value: Option<String>) -> Result<Option<String>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let normalized = value.trim_end_matches('/').to_string();
    if normalized.is_empty() || HeaderValue::from_str(&normalized).is_err() {
        return Err(ConfigError::InvalidOrigin { var, value });
    }
    Ok(Some(normalized))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4567);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.current_user_handle, "andrewbrown");
        assert_eq!(config.reporting.environment, "development");
        assert_eq!(config.reporting.endpoint, ROLLBAR_ENDPOINT);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert!(config.cors_origins().is_empty());
    }

    #[test]
    fn origins_are_normalized() {
        let config = load(&[
            ("FRONTEND_URL", "http://localhost:3000/"),
            ("BACKEND_URL", "http://localhost:4567"),
        ])
        .unwrap();
        assert_eq!(
            config.cors_origins(),
            ["http://localhost:3000", "http://localhost:4567"]
        );
        assert!(config.is_allowed_origin("http://localhost:3000"));
        assert!(!config.is_allowed_origin("http://evil.example"));
    }

    #[test]
    fn origin_match_is_exact() {
        let config = load(&[("FRONTEND_URL", "http://localhost:3000/")]).unwrap();
        assert!(config.is_allowed_origin("http://localhost:3000"));
        assert!(!config.is_allowed_origin("http://localhost:3000/"));
        assert!(!config.is_allowed_origin("HTTP://LOCALHOST:3000"));
    }

    #[test]
    fn rollbar_endpoint_can_be_overridden() {
        let config = load(&[("ROLLBAR_ENDPOINT", "http://127.0.0.1:9/item/")]).unwrap();
        assert_eq!(config.reporting.endpoint, "http://127.0.0.1:9/item/");
    }

    #[test]
    fn empty_values_count_as_unset() {
        let config = load(&[("ROLLBAR_ACCESS_TOKEN", ""), ("FRONTEND_URL", "  ")]).unwrap();
        assert!(config.reporting.access_token.is_none());
        assert!(config.frontend_url.is_none());
    }

    #[test]
    fn rejects_non_numeric_port() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "PORT", .. });
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = load(&[("LOG_FORMAT", "xml")]).unwrap_err();
        assert_matches!(err, ConfigError::Invalid { var: "LOG_FORMAT", .. });
    }

    #[test]
    fn rejects_origin_with_control_characters() {
        let err = load(&[("FRONTEND_URL", "http://a\u{7f}b")]).unwrap_err();
        assert_matches!(err, ConfigError::InvalidOrigin { var: "FRONTEND_URL", .. });
    }
}
