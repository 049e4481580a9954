//! In-memory severity backend

use std::collections::HashMap;
use std::path::PathBuf;

use parking_lot::RwLock;

use super::traits::SeverityBackend;
use crate::config::LoggingConfig;
use crate::error::LoggingResult;
use crate::level::Level;

/// Default severity of a fresh backend
pub const DEFAULT_SEVERITY: Level = Level::Info;

/// In-memory severity backend
///
/// Keeps explicit levels in a map keyed by the exact logger name. This is the
/// backend installed process-wide unless another one is provided.
///
/// # Thread Safety
///
/// The store uses `RwLock` internally and is safe to use from multiple threads.
///
/// # Example
///
/// ```
/// use logtree_core::backend::{MemoryBackend, SeverityBackend};
/// use logtree_core::Level;
///
/// let backend = MemoryBackend::new();
/// backend.set_default_severity(Level::Warn).unwrap();
/// assert_eq!(backend.default_severity(), Level::Warn);
/// ```
#[derive(Debug)]
pub struct MemoryBackend {
    levels: RwLock<HashMap<String, Level>>,
    default_level: RwLock<Level>,
    log_dir: PathBuf,
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend {
    /// Create an empty backend logging to the default directory
    pub fn new() -> Self {
        Self::with_log_dir(LoggingConfig::default().resolve_log_dir())
    }

    /// Create an empty backend logging to `log_dir`
    pub fn with_log_dir(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            levels: RwLock::new(HashMap::new()),
            default_level: RwLock::new(DEFAULT_SEVERITY),
            log_dir: log_dir.into(),
        }
    }

    /// Create a backend and apply `config` to it
    ///
    /// Config entries that fail to apply are skipped with a warning so that a
    /// bad configuration never prevents logging.
    pub fn from_config(config: &LoggingConfig) -> Self {
        let backend = Self::with_log_dir(config.resolve_log_dir());
        if let Err(e) = config.apply(&backend) {
            tracing::warn!(error = %e, "ignoring invalid logging configuration");
        }
        backend
    }

    /// Remove every explicit level
    pub fn clear(&self) {
        self.levels.write().clear();
    }

    /// Number of names with an explicit level
    pub fn len(&self) -> usize {
        self.levels.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all explicit levels, sorted by name
    pub fn explicit_levels(&self) -> Vec<(String, Level)> {
        let mut levels: Vec<_> = self
            .levels
            .read()
            .iter()
            .map(|(name, level)| (name.clone(), *level))
            .collect();
        levels.sort();
        levels
    }
}

impl SeverityBackend for MemoryBackend {
    fn name(&self) -> &str {
        "memory"
    }

    fn set_severity(&self, logger: &str, level: Level) -> LoggingResult<()> {
        let mut levels = self.levels.write();
        if level.is_unset() {
            levels.remove(logger);
        } else {
            levels.insert(logger.to_string(), level);
        }
        tracing::debug!(logger, %level, "severity updated");
        Ok(())
    }

    fn get_severity(&self, logger: &str) -> LoggingResult<Level> {
        Ok(self.levels.read().get(logger).copied().unwrap_or(Level::Unset))
    }

    fn default_severity(&self) -> Level {
        *self.default_level.read()
    }

    fn set_default_severity(&self, level: Level) -> LoggingResult<()> {
        let level = if level.is_unset() { DEFAULT_SEVERITY } else { level };
        *self.default_level.write() = level;
        tracing::debug!(%level, "default severity updated");
        Ok(())
    }

    fn logging_directory(&self) -> LoggingResult<PathBuf> {
        Ok(self.log_dir.clone())
    }
}
