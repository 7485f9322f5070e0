//! Upstream URL resolution.

use eyesbot_config::{ConfigError, ROBOT_BASE_URL_ENV, RobotConfig, SECURE_URL_ENV};

/// The only flag value that selects plain HTTP.
pub const INSECURE_FLAG: &str = "False";

/// Transport scheme for upstream requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Secure unless the flag is exactly `"False"`.
    ///
    /// `"false"`, `"0"`, `""` and every other value select HTTPS.
    pub fn from_flag(flag: &str) -> Self {
        if flag == INSECURE_FLAG {
            Scheme::Http
        } else {
            Scheme::Https
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds `{scheme}://{host}/{path}` from an immutable robot configuration.
#[derive(Debug, Clone)]
pub struct UrlResolver {
    base_url: Option<String>,
    secure_url: Option<String>,
}

impl UrlResolver {
    pub fn new(config: &RobotConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            secure_url: config.secure_url.clone(),
        }
    }

    /// Resolve a relative path against the configured robot host.
    ///
    /// The path is appended verbatim. Fails when either robot setting is
    /// missing.
    pub fn resolve(&self, path: &str) -> Result<String, ConfigError> {
        let host = self
            .base_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingField(ROBOT_BASE_URL_ENV.to_string()))?;
        let scheme = self.scheme()?;
        Ok(format!("{}://{}/{}", scheme, host, path))
    }

    /// Scheme selected by the transport-security flag.
    pub fn scheme(&self) -> Result<Scheme, ConfigError> {
        self.secure_url
            .as_deref()
            .map(Scheme::from_flag)
            .ok_or_else(|| ConfigError::MissingField(SECURE_URL_ENV.to_string()))
    }
}
