//! Server configuration.
//!
//! Loaded from an optional TOML file; every field has a default so an empty
//! file (or no file) yields a working development setup. Command-line and
//! environment overrides are applied by the binary on top of this.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Deployment environment; selects the CORS allow-list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development.
    #[default]
    Development,
    /// Public deployment.
    Production,
    /// Automated tests.
    Test,
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            "test" => Ok(Self::Test),
            other => Err(Error::config(format!("unknown environment '{other}'"))),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Test => write!(f, "test"),
        }
    }
}

fn default_production_origins() -> Vec<String> {
    vec!["https://yourdomain.com".to_string()]
}

fn default_development_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://localhost:5173".to_string(),
    ]
}

/// CORS allow-lists keyed by environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    /// Whether the CORS layer is installed at all.
    pub enabled: bool,
    /// Origins allowed in production.
    pub production_origins: Vec<String>,
    /// Origins allowed in every other environment.
    pub development_origins: Vec<String>,
    /// Send `Access-Control-Allow-Credentials: true`.
    pub allow_credentials: bool,
    /// Preflight cache lifetime; 0 leaves the header off.
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            production_origins: default_production_origins(),
            development_origins: default_development_origins(),
            allow_credentials: true,
            max_age_seconds: 0,
        }
    }
}

impl CorsConfig {
    /// Origins allowed in `env`.
    pub fn origins_for(&self, env: Environment) -> &[String] {
        match env {
            Environment::Production => &self.production_origins,
            Environment::Development | Environment::Test => &self.development_origins,
        }
    }
}

/// Per-client fixed allowance over a window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateLimitConfig {
    /// Whether the limiter is installed at all.
    pub enabled: bool,
    /// Requests allowed per client per window.
    pub max_requests: u32,
    /// Window length in seconds.
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_requests: 100,
            window_secs: 15 * 60,
        }
    }
}

/// Complete server configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port.
    pub port: u16,
    /// Deployment environment.
    pub environment: Environment,
    /// CORS settings.
    pub cors: CorsConfig,
    /// Rate limiting settings.
    pub rate_limit: RateLimitConfig,
    /// Maximum accepted request body size.
    pub body_limit_bytes: usize,
    /// Requests running longer than this are answered with 504.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            environment: Environment::default(),
            cors: CorsConfig::default(),
            rate_limit: RateLimitConfig::default(),
            body_limit_bytes: 10 * 1024 * 1024,
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    /// Load from `path`, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
                Self::from_toml_str(&content).map_err(|e| {
                    Error::config(format!("failed to load {}: {e}", path.display()))
                })?
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse from TOML text. Does not validate.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Reject settings the middleware stack cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.rate_limit.enabled {
            if self.rate_limit.max_requests == 0 {
                return Err(Error::config("rate_limit.max_requests must be greater than 0"));
            }
            if self.rate_limit.window_secs == 0 {
                return Err(Error::config("rate_limit.window_secs must be greater than 0"));
            }
        }
        if self.request_timeout_secs == 0 {
            return Err(Error::config("request_timeout_secs must be greater than 0"));
        }
        if self.body_limit_bytes == 0 {
            return Err(Error::config("body_limit_bytes must be greater than 0"));
        }
        if self.cors.enabled
            && self.cors.allow_credentials
            && self
                .cors
                .origins_for(self.environment)
                .iter()
                .any(|o| o == "*")
        {
            return Err(Error::config(
                "cors: wildcard origin cannot be combined with allow_credentials",
            ));
        }
        Ok(())
    }

    /// `host:port` for binding.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
