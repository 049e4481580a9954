//! Logging configuration
//!
//! Supports two configuration sources, merged in this order:
//! - YAML file (`~/.config/logtree/logging.yaml` or any explicit path)
//! - Environment variables (`LOGTREE_LOG_DIR`, `LOGTREE_HOME`, `LOGTREE_DEFAULT_LEVEL`)

mod file;

pub use file::{LoggingConfig, ENV_DEFAULT_LEVEL, ENV_HOME, ENV_LOG_DIR};
