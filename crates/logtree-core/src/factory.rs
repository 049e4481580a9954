//! Logger factory functions
//!
//! These are the only way to obtain a `Logger`. With the `logging` feature
//! disabled they hand out dummy loggers, so manipulating loggers costs
//! nothing in builds where log calls are compiled out.

use std::path::PathBuf;

use crate::backend::global_backend;
use crate::error::LoggingResult;
use crate::logger::Logger;
use crate::node::NodeIdentity;

/// Whether the factory functions create real (named) loggers
pub const LOGGING_ENABLED: bool = cfg!(feature = "logging");

/// Logger name used when a node cannot report its own
pub const DEFAULT_LOGGER_NAME: &str = "logtree";

/// Return a named logger
///
/// Any string is accepted; hierarchy is derived from its `.` separators only.
/// Returns a dummy logger if logging is disabled.
pub fn get_logger(name: &str) -> Logger {
    if LOGGING_ENABLED {
        Logger::named(name)
    } else {
        Logger::dummy()
    }
}

/// Return the logger of a node
///
/// Falls back to [`DEFAULT_LOGGER_NAME`] when the node identity cannot be
/// queried, so that obtaining a logger never fails.
///
/// # Example
///
/// ```
/// use logtree_core::get_node_logger;
/// use logtree_core::node::NodeInfo;
///
/// # if logtree_core::LOGGING_ENABLED {
/// let logger = get_node_logger(&NodeInfo::new("planner", "/robot"));
/// assert_eq!(logger.get_name(), Some("robot.planner"));
///
/// let fallback = get_node_logger(&NodeInfo::new("", "/robot"));
/// assert_eq!(fallback.get_name(), Some("logtree"));
/// # }
/// ```
pub fn get_node_logger<N: NodeIdentity + ?Sized>(node: &N) -> Logger {
    if !LOGGING_ENABLED {
        return Logger::dummy();
    }

    match node.logger_name() {
        Ok(name) => Logger::named(name),
        Err(e) => {
            tracing::warn!(
                error = %e,
                fallback = DEFAULT_LOGGER_NAME,
                "failed to get logger name from node, using fallback"
            );
            Logger::named(DEFAULT_LOGGER_NAME)
        }
    }
}

/// Directory the process-wide backend writes log files to
///
/// Fails with `LoggingError::Backend` if the backend is not initialized or
/// cannot report it.
pub fn get_logging_directory() -> LoggingResult<PathBuf> {
    global_backend()?.logging_directory()
}

#[cfg(all(test, feature = "logging"))]
mod tests {
    use super::*;
    use crate::backend::{install_backend, shutdown_backend, MemoryBackend, SeverityBackend};
    use crate::error::LoggingError;
    use crate::level::Level;
    use crate::node::NodeInfo;
    use serial_test::serial;
    use std::sync::Arc;

    struct BrokenNode;

    impl NodeIdentity for BrokenNode {
        fn logger_name(&self) -> LoggingResult<String> {
            Err(LoggingError::backend("node handle is invalid"))
        }
    }

    #[test]
    fn test_get_logger_keeps_name() {
        for name in ["", "a", "a.b.c", "a..b", ".lead", "trail.", "UPPER.case"] {
            assert_eq!(get_logger(name).get_name(), Some(name));
        }
    }

    #[test]
    fn test_child_name_law() {
        let logger = get_logger("robot");
        for suffix in ["arm", "", "x.y"] {
            let expected = format!("robot.{}", suffix);
            assert_eq!(logger.get_child(suffix).get_name(), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_get_node_logger() {
        let logger = get_node_logger(&NodeInfo::new("planner", "/robot/arm"));
        assert_eq!(logger.get_name(), Some("robot.arm.planner"));
    }

    #[test]
    fn test_get_node_logger_fallback() {
        assert_eq!(get_node_logger(&BrokenNode).get_name(), Some(DEFAULT_LOGGER_NAME));
        assert_eq!(
            get_node_logger(&NodeInfo::new("", "/")).get_name(),
            Some(DEFAULT_LOGGER_NAME)
        );

        let missing: Option<NodeInfo> = None;
        assert_eq!(get_node_logger(&missing).get_name(), Some(DEFAULT_LOGGER_NAME));
    }

    #[test]
    fn test_get_node_logger_dyn() {
        let node: Box<dyn NodeIdentity> = Box::new(NodeInfo::root("talker"));
        assert_eq!(get_node_logger(node.as_ref()).get_name(), Some("talker"));
    }

    #[test]
    #[serial]
    fn test_global_levels() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set_default_severity(Level::Info).unwrap();
        let previous = install_backend(backend.clone());

        let a = get_logger("global_levels");
        let abc = a.get_child("b").get_child("c");
        a.set_level(Level::Warn).unwrap();
        assert_eq!(abc.get_effective_level().unwrap(), Level::Warn);
        assert!(abc.is_enabled_for(Level::Error).unwrap());
        assert!(!abc.is_enabled_for(Level::Debug).unwrap());
        assert_eq!(backend.get_severity("global_levels").unwrap(), Level::Warn);

        assert!(a.set_severity(7).unwrap_err().is_invalid_argument());
        assert_eq!(backend.get_severity("global_levels").unwrap(), Level::Warn);

        if let Some(previous) = previous {
            install_backend(previous);
        }
    }

    #[test]
    #[serial]
    fn test_get_child_registers_nothing() {
        let backend = Arc::new(MemoryBackend::new());
        let previous = install_backend(backend.clone());

        let child = get_logger("unregistered").get_child("child");
        assert_eq!(child.get_effective_level().unwrap(), backend.default_severity());
        assert!(child.is_enabled_for(Level::Fatal).unwrap());
        assert!(backend.is_empty());

        if let Some(previous) = previous {
            install_backend(previous);
        }
    }

    #[test]
    #[serial]
    fn test_global_logging_directory() {
        let previous = install_backend(Arc::new(MemoryBackend::with_log_dir("/srv/logs")));
        assert_eq!(get_logging_directory().unwrap(), PathBuf::from("/srv/logs"));

        if let Some(previous) = previous {
            install_backend(previous);
        }
    }

    #[test]
    #[serial]
    fn test_uninitialized_backend() {
        let previous = shutdown_backend();
        let logger = get_logger("after_shutdown");

        assert!(logger.set_level(Level::Debug).unwrap_err().is_backend());
        assert!(logger.get_effective_level().unwrap_err().is_backend());
        assert!(logger.is_enabled_for(Level::Debug).unwrap_err().is_backend());
        assert!(get_logging_directory().unwrap_err().is_backend());

        // Construction never needs the backend
        assert_eq!(logger.get_child("x").get_name(), Some("after_shutdown.x"));

        if let Some(previous) = previous {
            install_backend(previous);
        }
    }
}

#[cfg(all(test, not(feature = "logging")))]
mod disabled_tests {
    use super::*;
    use crate::backend::shutdown_backend;
    use crate::level::Level;
    use crate::node::NodeInfo;
    use serial_test::serial;

    #[test]
    fn test_factories_return_dummies() {
        assert_eq!(get_logger("x").get_name(), None);
        assert_eq!(get_node_logger(&NodeInfo::root("talker")).get_name(), None);
        assert_eq!(get_logger("x").get_child("y").get_name(), None);
    }

    #[test]
    #[serial]
    fn test_dummy_operations_need_no_backend() {
        let previous = shutdown_backend();
        let logger = get_logger("x");

        logger.set_level(Level::Error).unwrap();
        assert_eq!(logger.get_effective_level().unwrap(), Level::Unset);
        assert!(!logger.is_enabled_for(Level::Fatal).unwrap());

        if let Some(previous) = previous {
            crate::backend::install_backend(previous);
        }
    }
}
