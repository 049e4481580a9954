//! Severity backend abstractions and implementations
//!
//! This module provides the storage behind logger levels:
//! - `SeverityBackend` trait for plugging in a process-wide logging backend
//! - `MemoryBackend`, the built-in in-memory implementation
//! - The process-wide backend slot with its init/teardown lifecycle

mod traits;
mod memory;
pub mod global;

pub use traits::{SeverityBackend, SharedBackend};
pub use memory::{MemoryBackend, DEFAULT_SEVERITY};
pub use global::{global_backend, install_backend, shutdown_backend};
