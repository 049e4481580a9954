//! logtree Core
//!
//! Hierarchical named loggers for middleware frameworks.
//! A logger is identified by a dotted name (`robot.arm.planner`); its
//! ancestors are the prefixes obtained by cutting that name at each `.`.
//! Levels are stored per exact name in a severity backend, and the effective
//! level of a logger is its own level, else its closest ancestor's, else the
//! backend default.
//!
//! ## Quick start
//!
//! ```rust
//! use logtree_core::{get_logger, Level};
//!
//! let arm = get_logger("robot.arm");
//! let planner = arm.get_child("planner");
//!
//! arm.set_level(Level::Debug).unwrap();
//! # if logtree_core::LOGGING_ENABLED {
//! assert_eq!(planner.get_effective_level().unwrap(), Level::Debug);
//! # }
//! ```
//!
//! ## Backends
//!
//! The `backend` module holds the process-wide severity store. It starts as
//! a `MemoryBackend` configured from the user config file and the environment
//! (`LoggingConfig::discover`), and can be replaced with
//! `install_backend` or torn down with `shutdown_backend`. Every level
//! operation also has an `*_in` variant taking a backend explicitly.
//!
//! ## Disabled logging
//!
//! Building without the default `logging` feature makes the factory functions
//! return dummy loggers whose operations never touch a backend.

pub mod backend;
pub mod config;
mod error;
mod factory;
pub mod hierarchy;
mod level;
mod logger;
pub mod node;

// Re-export commonly used types
pub use error::{LoggingError, LoggingResult};
pub use level::Level;
pub use logger::Logger;

pub use factory::{
    get_logger, get_node_logger, get_logging_directory,
    DEFAULT_LOGGER_NAME, LOGGING_ENABLED,
};

pub use backend::{
    SeverityBackend, SharedBackend, MemoryBackend,
    install_backend, shutdown_backend, global_backend,
};

pub use config::LoggingConfig;

pub use node::{NodeIdentity, NodeInfo};
