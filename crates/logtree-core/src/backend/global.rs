//! Process-wide severity backend
//!
//! Loggers that are not handed a backend explicitly talk to the one stored
//! here. The slot is filled lazily on first use with a `MemoryBackend`
//! configured from the user config file and the environment (see
//! `LoggingConfig::discover`).
//! `install_backend` replaces it; `shutdown_backend` empties it, after which
//! every global operation fails with `LoggingError::Backend` until a backend
//! is installed again.

use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::memory::MemoryBackend;
use super::traits::SharedBackend;
use crate::config::LoggingConfig;
use crate::error::{LoggingError, LoggingResult};

static GLOBAL_BACKEND: Lazy<RwLock<Option<SharedBackend>>> = Lazy::new(|| {
    let backend: SharedBackend = Arc::new(MemoryBackend::from_config(&LoggingConfig::discover()));
    RwLock::new(Some(backend))
});

/// Install `backend` as the process-wide backend
///
/// Returns the backend that was installed before, if any.
///
/// # Example
///
/// ```
/// use logtree_core::backend::{install_backend, MemoryBackend};
/// use std::sync::Arc;
///
/// install_backend(Arc::new(MemoryBackend::new()));
/// ```
pub fn install_backend(backend: SharedBackend) -> Option<SharedBackend> {
    tracing::debug!(backend = backend.name(), "installing logging backend");
    GLOBAL_BACKEND.write().replace(backend)
}

/// Tear down the process-wide backend
///
/// Returns the backend that was removed, if any.
pub fn shutdown_backend() -> Option<SharedBackend> {
    let previous = GLOBAL_BACKEND.write().take();
    if previous.is_some() {
        tracing::debug!("logging backend shut down");
    }
    previous
}

/// The current process-wide backend
pub fn global_backend() -> LoggingResult<SharedBackend> {
    GLOBAL_BACKEND
        .read()
        .clone()
        .ok_or_else(|| LoggingError::backend("logging backend is not initialized"))
}
