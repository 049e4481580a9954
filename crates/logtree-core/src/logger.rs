//! Named logger handle
//!
//! A `Logger` is a cheap, immutable handle around a shared dotted name. It
//! stores no severity itself: levels live in a `SeverityBackend`, either the
//! process-wide one or one passed explicitly to the `*_in` methods.
//!
//! A logger without a name is a dummy. Dummies are handed out when logging is
//! compiled out; every operation on them is a no-op that never reaches a
//! backend.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use once_cell::sync::OnceCell;

use crate::backend::{global_backend, SeverityBackend};
use crate::error::LoggingResult;
use crate::hierarchy;
use crate::level::Level;

struct NamedLogger {
    name: Box<str>,
    // Computed on the first ancestor walk and shared by every copy
    separators: OnceCell<Box<[usize]>>,
}

impl NamedLogger {
    fn ancestors(&self) -> impl Iterator<Item = &str> + '_ {
        let offsets = self
            .separators
            .get_or_init(|| hierarchy::separator_offsets(&self.name).into_boxed_slice());
        offsets.iter().rev().map(move |&offset| &self.name[..offset])
    }
}

/// Handle to a named logger
///
/// Obtain one through [`get_logger`](crate::get_logger) or
/// [`get_node_logger`](crate::get_node_logger). Cloning shares the name.
///
/// # Example
///
/// ```
/// use logtree_core::{get_logger, Level};
///
/// # if logtree_core::LOGGING_ENABLED {
/// let planner = get_logger("planner");
/// let costmap = planner.get_child("costmap");
/// assert_eq!(costmap.get_name(), Some("planner.costmap"));
///
/// planner.set_level(Level::Warn).unwrap();
/// assert_eq!(costmap.get_effective_level().unwrap(), Level::Warn);
/// # }
/// ```
#[derive(Clone)]
pub struct Logger {
    inner: Option<Arc<NamedLogger>>,
}

impl Logger {
    pub(crate) fn named(name: impl Into<Box<str>>) -> Self {
        Self {
            inner: Some(Arc::new(NamedLogger {
                name: name.into(),
                separators: OnceCell::new(),
            })),
        }
    }

    pub(crate) fn dummy() -> Self {
        Self { inner: None }
    }

    /// Full name of this logger, or `None` for a dummy logger
    pub fn get_name(&self) -> Option<&str> {
        self.inner.as_deref().map(|inner| &*inner.name)
    }

    /// Whether this logger has a name (i.e. is not a dummy)
    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Names of this logger's ancestors, closest first
    pub fn ancestors(&self) -> impl Iterator<Item = &str> + '_ {
        self.inner.iter().flat_map(|inner| inner.ancestors())
    }

    /// Logger named `<this name>.<suffix>`
    ///
    /// The child of a dummy logger is a dummy. Nothing is registered with the
    /// backend.
    pub fn get_child(&self, suffix: &str) -> Logger {
        match self.get_name() {
            Some(name) => Logger::named(hierarchy::child_name(name, suffix)),
            None => Logger::dummy(),
        }
    }

    /// Set this logger's own level in the process-wide backend
    ///
    /// `Level::Unset` clears it. A dummy logger ignores the call.
    pub fn set_level(&self, level: Level) -> LoggingResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.set_level_in(global_backend()?.as_ref(), level)
    }

    /// Set this logger's own level in `backend`
    pub fn set_level_in(&self, backend: &dyn SeverityBackend, level: Level) -> LoggingResult<()> {
        match self.get_name() {
            Some(name) => backend.set_severity(name, level),
            None => Ok(()),
        }
    }

    /// Set this logger's level from a raw severity value
    ///
    /// Fails with `LoggingError::InvalidArgument` for values that are not a
    /// `Level`, leaving the stored level untouched.
    pub fn set_severity(&self, severity: i32) -> LoggingResult<()> {
        self.set_level(Level::try_from(severity)?)
    }

    /// Raw severity variant of [`set_level_in`](Self::set_level_in)
    pub fn set_severity_in(&self, backend: &dyn SeverityBackend, severity: i32) -> LoggingResult<()> {
        self.set_level_in(backend, Level::try_from(severity)?)
    }

    /// Level that applies to this logger, resolved in the process-wide backend
    ///
    /// This is the logger's own level if set, otherwise the level of its
    /// closest ancestor that has one, otherwise the backend default. A dummy
    /// logger returns `Level::Unset`.
    pub fn get_effective_level(&self) -> LoggingResult<Level> {
        if !self.is_enabled() {
            return Ok(Level::Unset);
        }
        self.get_effective_level_in(global_backend()?.as_ref())
    }

    /// Effective level resolved in `backend`
    pub fn get_effective_level_in(&self, backend: &dyn SeverityBackend) -> LoggingResult<Level> {
        match &self.inner {
            Some(inner) => hierarchy::resolve_effective_level(backend, &inner.name, inner.ancestors()),
            None => Ok(Level::Unset),
        }
    }

    /// Whether a message at `level` passes this logger's effective level
    ///
    /// Always `false` for a dummy logger.
    pub fn is_enabled_for(&self, level: Level) -> LoggingResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }
        self.is_enabled_for_in(global_backend()?.as_ref(), level)
    }

    pub fn is_enabled_for_in(&self, backend: &dyn SeverityBackend, level: Level) -> LoggingResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }
        Ok(level >= self.get_effective_level_in(backend)?)
    }
}

impl PartialEq for Logger {
    fn eq(&self, other: &Self) -> bool {
        self.get_name() == other.get_name()
    }
}

impl Eq for Logger {}

impl Hash for Logger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get_name().hash(state);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("name", &self.get_name()).finish()
    }
}

impl fmt::Display for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.get_name().unwrap_or("<disabled>"))
    }
}
