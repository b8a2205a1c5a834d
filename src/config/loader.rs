//! Config loader - YAML file loading and environment overrides

use super::schema::AppConfig;
use crate::error::WordcondError;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "WORDCOND_CONFIG";
/// Environment variable overriding `matching.case_sensitive`
pub const CASE_SENSITIVE_ENV: &str = "WORDCOND_CASE_SENSITIVE";

/// Loads configuration from YAML files
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn new() -> Self {
        Self
    }

    /// Load a configuration from a YAML file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<AppConfig, WordcondError> {
        let content = fs::read_to_string(path)?;
        Self::parse_yaml(&content)
    }

    /// Parse a configuration from a YAML string
    pub fn parse_yaml(content: &str) -> Result<AppConfig, WordcondError> {
        let config: AppConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Explicit path, else `WORDCOND_CONFIG`, else defaults; then env overrides
    pub fn resolve(&self, path: Option<&Path>) -> Result<AppConfig, WordcondError> {
        self.resolve_with(
            path,
            std::env::var(CONFIG_ENV).ok().as_deref(),
            std::env::var(CASE_SENSITIVE_ENV).ok().as_deref(),
        )
    }

    /// `resolve` with the environment values passed in
    pub fn resolve_with(
        &self,
        path: Option<&Path>,
        config_env: Option<&str>,
        case_sensitive_env: Option<&str>,
    ) -> Result<AppConfig, WordcondError> {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| config_env.map(PathBuf::from));

        let config = match path {
            Some(p) => {
                log::info!("Loading config from {}", p.display());
                self.load(&p)?
            }
            None => AppConfig::default(),
        };

        Self::apply_overrides(config, case_sensitive_env)
    }

    /// Apply a `WORDCOND_CASE_SENSITIVE` value, if any
    pub fn apply_overrides(
        mut config: AppConfig,
        case_sensitive: Option<&str>,
    ) -> Result<AppConfig, WordcondError> {
        if let Some(raw) = case_sensitive {
            config.matching.case_sensitive = parse_bool(raw).ok_or_else(|| {
                WordcondError::config(format!(
                    "{} must be a boolean, got '{}'",
                    CASE_SENSITIVE_ENV, raw
                ))
            })?;
        }
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
