//! File and environment based logging configuration (YAML)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::backend::SeverityBackend;
use crate::error::{LoggingError, LoggingResult};
use crate::level::Level;

/// Explicit log directory; a leading `~` is expanded to the home directory
pub const ENV_LOG_DIR: &str = "LOGTREE_LOG_DIR";
/// Base directory; logs go to `$LOGTREE_HOME/log` unless `LOGTREE_LOG_DIR` is set
pub const ENV_HOME: &str = "LOGTREE_HOME";
/// Default severity name (`debug`, `info`, ...)
pub const ENV_DEFAULT_LEVEL: &str = "LOGTREE_DEFAULT_LEVEL";

/// Logging configuration
///
/// ```yaml
/// default_level: info
/// log_dir: /var/log/app
/// levels:
///   planner: warn
///   planner.costmap: debug
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Severity used when neither a logger nor its ancestors have a level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_level: Option<Level>,

    /// Directory where log files are written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Explicit levels keyed by exact logger name
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub levels: BTreeMap<String, Level>,
}

impl LoggingConfig {
    /// User-level config path (~/.config/logtree/logging.yaml)
    pub fn user_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        config_dir.join("logtree").join("logging.yaml")
    }

    /// Load config from a YAML file
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> LoggingResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        // An empty file deserializes to unit, not to a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a YAML file
    pub fn save(&self, path: impl AsRef<Path>) -> LoggingResult<()> {
        let path = path.as_ref();
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Build a config from the process environment
    ///
    /// Values that cannot be used are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build the process configuration: the user config file, overlaid
    /// with the environment
    ///
    /// A config file that cannot be read or parsed is ignored with a warning.
    pub fn discover() -> Self {
        Self::from_sources(Self::user_path(), |key| std::env::var(key).ok())
    }

    fn from_sources(path: impl AsRef<Path>, var: impl Fn(&str) -> Option<String>) -> Self {
        let path = path.as_ref();
        let file = Self::load(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "ignoring logging config file");
            Self::default()
        });
        file.merge(Self::from_vars(var))
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = var(ENV_LOG_DIR).filter(|v| !v.is_empty()) {
            config.log_dir = Some(expand_home(&dir));
        } else if let Some(home) = var(ENV_HOME).filter(|v| !v.is_empty()) {
            config.log_dir = Some(expand_home(&home).join("log"));
        }

        if let Some(value) = var(ENV_DEFAULT_LEVEL).filter(|v| !v.is_empty()) {
            match value.parse::<Level>() {
                Ok(level) => config.default_level = Some(level),
                Err(e) => tracing::warn!(variable = ENV_DEFAULT_LEVEL, error = %e, "ignoring default level"),
            }
        }

        config
    }

    /// Overlay `other` on top of this config
    ///
    /// Fields set in `other` win; explicit levels are merged per name.
    pub fn merge(mut self, other: LoggingConfig) -> Self {
        if other.default_level.is_some() {
            self.default_level = other.default_level;
        }
        if other.log_dir.is_some() {
            self.log_dir = other.log_dir;
        }
        self.levels.extend(other.levels);
        self
    }

    /// Reject values that cannot be applied
    pub fn validate(&self) -> LoggingResult<()> {
        if matches!(&self.log_dir, Some(dir) if dir.as_os_str().is_empty()) {
            return Err(LoggingError::Config("log_dir must not be empty".to_string()));
        }
        Ok(())
    }

    /// Directory log files go to: `log_dir` if configured, else `~/.logtree/log`
    pub fn resolve_log_dir(&self) -> PathBuf {
        match &self.log_dir {
            Some(dir) => dir.clone(),
            None => dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".logtree")
                .join("log"),
        }
    }

    /// Push the default severity and explicit levels into `backend`
    pub fn apply(&self, backend: &dyn SeverityBackend) -> LoggingResult<()> {
        self.validate()?;
        if let Some(level) = self.default_level {
            backend.set_default_severity(level)?;
        }
        for (name, level) in &self.levels {
            backend.set_severity(name, *level)?;
        }
        Ok(())
    }
}

fn expand_home(value: &str) -> PathBuf {
    match value.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(rest.trim_start_matches('/'))
        }
        _ => PathBuf::from(value),
    }
}
