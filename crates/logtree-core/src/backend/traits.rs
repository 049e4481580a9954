//! Core trait for severity storage

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::LoggingResult;
use crate::level::Level;

/// Trait for severity backend implementations
///
/// A backend stores the explicit level of each logger name and knows the
/// default severity used when neither a logger nor any of its ancestors has
/// one. Each call is expected to be atomic on its own; no ordering is implied
/// across different names.
///
/// # Example
///
/// ```
/// use logtree_core::backend::{MemoryBackend, SeverityBackend};
/// use logtree_core::Level;
///
/// let backend = MemoryBackend::new();
/// backend.set_severity("planner", Level::Warn).unwrap();
/// backend.set_default_severity(Level::Error).unwrap();
/// assert_eq!(backend.get_severity("planner").unwrap(), Level::Warn);
/// assert_eq!(backend.get_severity("other").unwrap(), Level::Unset);
/// assert_eq!(backend.default_severity(), Level::Error);
/// ```
pub trait SeverityBackend: Send + Sync {
    /// Human-readable name of this backend
    fn name(&self) -> &str;

    /// Set the explicit level of an exact logger name
    ///
    /// Setting `Level::Unset` clears any explicit level.
    fn set_severity(&self, logger: &str, level: Level) -> LoggingResult<()>;

    /// Explicit level of an exact logger name
    ///
    /// Returns `Ok(Level::Unset)` when nothing is configured for that name;
    /// `Err` is reserved for a failing query.
    fn get_severity(&self, logger: &str) -> LoggingResult<Level>;

    /// Level used when no explicit level applies
    fn default_severity(&self) -> Level;

    /// Change the level used when no explicit level applies
    ///
    /// Passing `Level::Unset` restores the backend's built-in default.
    fn set_default_severity(&self, level: Level) -> LoggingResult<()>;

    /// Directory where log files are written
    fn logging_directory(&self) -> LoggingResult<PathBuf>;
}

/// Type alias for an Arc-wrapped backend
pub type SharedBackend = Arc<dyn SeverityBackend>;
