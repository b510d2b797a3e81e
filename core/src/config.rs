//! Client configuration: credentials, endpoint location and the user the
//! client acts for.

use std::env;

use thiserror::Error;

pub const DEFAULT_VERSION: &str = "v1";
pub const DEFAULT_HOST: &str = "http://localhost";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_USER_ID: u64 = 1;

/// Bearer token sent with every request. There is no login flow yet, so the
/// value is fixed.
pub const PLACEHOLDER_ACCESS_TOKEN: &str = "placeholder-access-token";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Settings for a `WishlistClient`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub key: String,
    pub secret: String,
    pub version: String,
    pub host: String,
    pub port: u16,
    /// Id of the user whose wishlists `WishlistClient::wishlists` lists.
    pub user_id: u64,
}

impl ClientConfig {
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            secret: secret.into(),
            version: DEFAULT_VERSION.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            user_id: DEFAULT_USER_ID,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// `{host}:{port}/api/{version}`
    pub fn base_url(&self) -> String {
        format!(
            "{}:{}/api/{}",
            self.host.trim_end_matches('/'),
            self.port,
            self.version
        )
    }

    /// Load configuration from the process environment, reading a `.env`
    /// file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    ///
    /// `WISHLIST_API_KEY` and `WISHLIST_API_SECRET` are required; version,
    /// host, port and user id fall back to the defaults. Every value is
    /// trimmed of surrounding whitespace.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| lookup(var).map(|v| v.trim().to_string());

        let key = read("WISHLIST_API_KEY").ok_or(ConfigError::Missing("WISHLIST_API_KEY"))?;
        let secret =
            read("WISHLIST_API_SECRET").ok_or(ConfigError::Missing("WISHLIST_API_SECRET"))?;

        let mut config = Self::new(key, secret);
        if let Some(version) = read("WISHLIST_API_VERSION") {
            config.version = version;
        }
        if let Some(host) = read("WISHLIST_API_HOST") {
            config.host = host;
        }
        if let Some(port) = read("WISHLIST_API_PORT") {
            config.port = parse_var("WISHLIST_API_PORT", port)?;
        }
        if let Some(user_id) = read("WISHLIST_USER_ID") {
            config.user_id = parse_var("WISHLIST_USER_ID", user_id)?;
        }
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid { var, value })
}
