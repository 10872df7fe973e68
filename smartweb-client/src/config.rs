//! Client configuration types.
//!
//! This module defines TOML-deserializable configuration for the client: where the SOAP service
//! lives, which credentials open the session, and how the HTTP transport behaves.
//!
//! ```toml
//! endpoint = "https://api.hostedshop.dk/service.php"
//!
//! [credentials]
//! username = "shop-api-user"
//! password = "secret"
//!
//! [http]
//! timeout_secs = 60
//! ```

use std::{fmt, path::Path, time::Duration};

use serde::Deserialize;
use url::Url;

use crate::error::{Result, SmartwebError};

/// Default SOAP endpoint of the hosted shop platform.
pub const DEFAULT_ENDPOINT: &str = "https://api.hostedshop.dk/service.php";

/// Default XML namespace of the remote operation elements.
pub const DEFAULT_NAMESPACE: &str = "http://api.hostedshop.dk/";

/// Root client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// SOAP endpoint URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// XML namespace for operation elements and the `SOAPAction` header.
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Credentials passed to `Solution_Connect`.
    pub credentials: Credentials,

    /// HTTP transport settings.
    #[serde(default)]
    pub http: HttpConfig,
}

impl ClientConfig {
    /// Creates a configuration for the default endpoint.
    #[must_use]
    pub fn new(credentials: Credentials) -> Self {
        Self {
            endpoint: default_endpoint(),
            namespace: default_namespace(),
            credentials,
            http: HttpConfig::default(),
        }
    }

    /// Overrides the endpoint URL.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Parses and validates a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns `SmartwebError::ConfigError` if TOML parsing or validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use smartweb_client::config::ClientConfig;
    ///
    /// let toml = r#"
    ///     [credentials]
    ///     username = "api"
    ///     password = "secret"
    /// "#;
    ///
    /// let config = ClientConfig::from_toml(toml).unwrap();
    /// assert_eq!(config.endpoint, "https://api.hostedshop.dk/service.php");
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| SmartwebError::ConfigError(format!("invalid TOML config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or its content is invalid.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SmartwebError::ConfigError(format!("cannot read config file: {e}")))?;
        Self::from_toml(&content)
    }

    /// Validates the configuration.
    ///
    /// Checks that:
    /// - the endpoint is an absolute `https` URL with a host
    /// - the namespace is not empty
    /// - the username is not empty
    /// - HTTP timeouts are within bounds
    ///
    /// # Errors
    ///
    /// Returns `SmartwebError::ConfigError` if any check fails.
    pub fn validate(&self) -> Result<()> {
        validate_endpoint(&self.endpoint)?;

        if self.namespace.trim().is_empty() {
            return Err(SmartwebError::ConfigError("namespace must not be empty".to_owned()));
        }

        if self.credentials.username.trim().is_empty() {
            return Err(SmartwebError::ConfigError("credentials.username must not be empty".to_owned()));
        }

        self.http.validate()
    }
}

/// Validates a SOAP endpoint URL.
pub(crate) fn validate_endpoint(endpoint: &str) -> Result<Url> {
    let url = Url::parse(endpoint)
        .map_err(|e| SmartwebError::ConfigError(format!("invalid endpoint '{endpoint}': {e}")))?;

    if url.scheme() != "https" {
        return Err(SmartwebError::ConfigError(format!(
            "endpoint must use HTTPS, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(SmartwebError::ConfigError(format!("endpoint has no host: {endpoint}")));
    }

    Ok(url)
}

/// Credentials for `Solution_Connect`.
///
/// Only used while the session is opened; the client does not keep them afterwards.
#[derive(Clone, Deserialize)]
pub struct Credentials {
    /// API user name (or shop identifier).
    pub username: String,
    /// API password.
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Creates credentials from a user name and password.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Maximum idle connections per host.
    #[serde(default = "default_pool_max_idle")]
    pub pool_max_idle_per_host: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// HTTP version preference.
    #[serde(default)]
    pub http_version: HttpVersion,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            pool_max_idle_per_host: default_pool_max_idle(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            http_version: HttpVersion::default(),
        }
    }
}

impl HttpConfig {
    /// Validates configuration values are within acceptable bounds.
    ///
    /// # Errors
    ///
    /// Returns error if timeout values are outside valid ranges:
    /// - `timeout_secs`: must be 1-600 seconds
    /// - `connect_timeout_secs`: must be 1-60 seconds
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(SmartwebError::ConfigError(
                "http.timeout_secs must be between 1 and 600".to_owned(),
            ));
        }
        if self.connect_timeout_secs == 0 || self.connect_timeout_secs > 60 {
            return Err(SmartwebError::ConfigError(
                "http.connect_timeout_secs must be between 1 and 60".to_owned(),
            ));
        }
        Ok(())
    }

    /// Returns timeout as Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Returns connect timeout as Duration.
    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// HTTP version preference.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HttpVersion {
    /// HTTP/1.1 only.
    Http1,
    /// Auto-negotiate (prefer HTTP/2 over ALPN, fall back to HTTP/1.1).
    #[default]
    Auto,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_owned()
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_owned()
}

fn default_pool_max_idle() -> usize {
    4
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}
