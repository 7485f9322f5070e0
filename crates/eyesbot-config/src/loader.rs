//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::{Config, ROBOT_BASE_URL_ENV, SECURE_URL_ENV};

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Build the process configuration: defaults, then the optional file,
    /// then the `ROBOT_BASE_URL`/`SECURE_URL` environment overlay.
    pub fn resolve(path: Option<&Path>) -> Result<Config, ConfigError> {
        Self::resolve_with(path, |name| std::env::var(name).ok())
    }

    /// Same as [`ConfigLoader::resolve`] with an explicit variable lookup.
    pub fn resolve_with<F>(path: Option<&Path>, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.display().to_string()));
                }
                let content = fs::read_to_string(path)?;
                Self::load_str_with(&content, &lookup)?
            }
            None => Config::default(),
        };
        Self::apply_env_overrides(&mut config, &lookup);
        if let Some(dir) = config.logging.dir.as_deref() {
            config.logging.dir = Some(Self::expand_path(dir));
        }
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a string, expanding `${VAR}` through `lookup`.
    pub fn load_str_with<F>(content: &str, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let expanded = Self::expand_env_vars(content, lookup)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Overwrite robot settings with `ROBOT_BASE_URL` and `SECURE_URL` when set.
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(ROBOT_BASE_URL_ENV) {
            config.robot.base_url = Some(base_url);
        }
        if let Some(secure_url) = lookup(SECURE_URL_ENV) {
            config.robot.secure_url = Some(secure_url);
        }
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars<F>(content: &str, lookup: F) -> Result<String, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        let mut result = content.to_string();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value =
                lookup(var_name).ok_or_else(|| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.eyesbot`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
