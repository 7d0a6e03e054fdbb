//! Gateway configuration with validation.
//!
//! Every section is `#[serde(default)]`, so a partial document (or none at
//! all) yields a runnable development setup. `from_env` layers `CD_*`
//! environment variables on top of the defaults.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{info, warn};

/// Secret used when none is configured. Rejected by `validate_for_production`.
pub const DEVELOPMENT_TOKEN_SECRET: &str = "calcdesk-development-secret";

/// Main gateway configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// Access-token configuration
    pub auth: AuthConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Request limits
    pub limits: LimitsConfig,
}

impl GatewayConfig {
    /// Defaults overridden by `CD_*` environment variables.
    ///
    /// Unparsable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = lookup("CD_HTTP_HOST") {
            match host.parse() {
                Ok(h) => config.http.host = h,
                Err(_) => warn!(value = %host, "CD_HTTP_HOST is not an IP address, ignoring"),
            }
        }
        if let Some(port) = lookup("CD_HTTP_PORT") {
            match port.parse() {
                Ok(p) => config.http.port = p,
                Err(_) => warn!(value = %port, "CD_HTTP_PORT is not a port number, ignoring"),
            }
        }
        if let Some(secret) = lookup("CD_TOKEN_SECRET") {
            config.auth.token_secret = secret;
            info!("Loaded token secret from environment");
        }
        if let Some(ttl) = lookup("CD_TOKEN_TTL_SECS") {
            match ttl.parse() {
                Ok(secs) => config.auth.token_ttl = Duration::from_secs(secs),
                Err(_) => warn!(value = %ttl, "CD_TOKEN_TTL_SECS is not a number, ignoring"),
            }
        }
        if let Some(max) = lookup("CD_MAX_OPERANDS") {
            match max.parse() {
                Ok(m) => config.limits.max_operands = m,
                Err(_) => warn!(value = %max, "CD_MAX_OPERANDS is not a number, ignoring"),
            }
        }

        config
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.token_secret.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        if self.auth.token_ttl.is_zero() {
            return Err(ConfigError::InvalidTimeout(
                "token_ttl cannot be 0".into(),
            ));
        }
        if self.limits.max_body_bytes == 0 {
            return Err(ConfigError::InvalidLimit(
                "max_body_bytes cannot be 0".into(),
            ));
        }
        if self.limits.max_operands < cd_01_calculations::MIN_OPERANDS {
            return Err(ConfigError::InvalidLimit(format!(
                "max_operands must be at least {}",
                cd_01_calculations::MIN_OPERANDS
            )));
        }
        Ok(())
    }

    /// `validate` plus checks that only matter outside development.
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.auth.token_secret == DEVELOPMENT_TOKEN_SECRET {
            return Err(ConfigError::DevelopmentSecret);
        }
        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Port (default: 8000)
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
        }
    }
}

/// Access-token configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC key for signing access tokens
    pub token_secret: String,
    /// Lifetime of an issued token
    #[serde(with = "humantime_serde")]
    pub token_ttl: Duration,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: DEVELOPMENT_TOKEN_SECRET.to_string(),
            token_ttl: cd_02_accounts::DEFAULT_TOKEN_TTL,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Enable CORS
    pub enabled: bool,
    /// Allowed origins ("*" for all)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed headers
    pub allowed_headers: Vec<String>,
    /// Max age for preflight cache, in seconds
    pub max_age: u64,
    /// Allow credentials (cookies carrying `access_token`)
    pub allow_credentials: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: ["GET", "POST", "PUT", "DELETE", "OPTIONS"]
                .map(String::from)
                .to_vec(),
            allowed_headers: vec!["Content-Type".to_string(), "Authorization".to_string()],
            max_age: 86400,
            allow_credentials: false,
        }
    }
}

/// Request limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest accepted request body
    pub max_body_bytes: usize,
    /// Largest accepted `inputs` list
    pub max_operands: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 64 * 1024,
            max_operands: cd_01_calculations::DEFAULT_MAX_OPERANDS,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Empty token secret
    #[error("token secret must not be empty")]
    MissingSecret,
    /// Development secret used where a real one is required
    #[error("token secret is the development default; set CD_TOKEN_SECRET")]
    DevelopmentSecret,
    /// Invalid size or count limit
    #[error("invalid limit: {0}")]
    InvalidLimit(String),
    /// Invalid timeout value
    #[error("invalid timeout: {0}")]
    InvalidTimeout(String),
}

/// Duration (de)serialization as `"<n>s"`, `"<n>ms"`, `"<n>m"` or bare seconds.
mod humantime_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{}s", duration.as_secs()))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_duration(&s).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse_duration(s: &str) -> Result<Duration, &'static str> {
        let s = s.trim();
        if let Some(ms) = s.strip_suffix("ms") {
            ms.trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| "invalid milliseconds")
        } else if let Some(secs) = s.strip_suffix('s') {
            secs.trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid seconds")
        } else if let Some(mins) = s.strip_suffix('m') {
            mins.trim()
                .parse::<u64>()
                .ok()
                .and_then(|m| m.checked_mul(60))
                .map(Duration::from_secs)
                .ok_or("invalid minutes")
        } else {
            s.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| "invalid duration format")
        }
    }
}
