//! Node identity used to derive node logger names

use crate::error::{LoggingError, LoggingResult};
use crate::hierarchy::SEPARATOR;

/// Something that owns a logger and can report the logger name to use
///
/// Implementations query whatever node abstraction the application has; an
/// error means the identity is malformed or unavailable.
pub trait NodeIdentity {
    /// Fully qualified logger name of this node
    fn logger_name(&self) -> LoggingResult<String>;
}

/// Plain node identity: a node name inside a `/`-separated namespace
///
/// The logger name is the namespace with its leading `/` dropped and the
/// remaining `/` turned into `.`, followed by the node name:
/// `/robot/arm` + `planner` gives `robot.arm.planner`, and the root namespace
/// `/` gives just `planner`.
///
/// # Example
///
/// ```
/// use logtree_core::node::{NodeIdentity, NodeInfo};
///
/// let node = NodeInfo::new("planner", "/robot/arm");
/// assert_eq!(node.logger_name().unwrap(), "robot.arm.planner");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub name: String,
    pub namespace: String,
}

impl NodeInfo {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }

    /// Node in the root namespace
    pub fn root(name: impl Into<String>) -> Self {
        Self::new(name, "/")
    }
}

impl NodeIdentity for NodeInfo {
    fn logger_name(&self) -> LoggingResult<String> {
        if self.name.is_empty() {
            return Err(LoggingError::backend("node name is empty"));
        }

        let namespace = if self.namespace.is_empty() {
            ""
        } else {
            self.namespace
                .strip_prefix('/')
                .ok_or_else(|| LoggingError::backend(format!("node namespace '{}' is not absolute", self.namespace)))?
        };
        let namespace = namespace.trim_end_matches('/');

        if namespace.is_empty() {
            return Ok(self.name.clone());
        }

        let mut logger_name: String = namespace
            .chars()
            .map(|c| if c == '/' { SEPARATOR } else { c })
            .collect();
        logger_name.push(SEPARATOR);
        logger_name.push_str(&self.name);
        Ok(logger_name)
    }
}

impl<T: NodeIdentity + ?Sized> NodeIdentity for &T {
    fn logger_name(&self) -> LoggingResult<String> {
        (**self).logger_name()
    }
}

/// `None` stands for a node that is not available
impl<T: NodeIdentity> NodeIdentity for Option<T> {
    fn logger_name(&self) -> LoggingResult<String> {
        match self {
            Some(node) => node.logger_name(),
            None => Err(LoggingError::backend("node is not available")),
        }
    }
}

impl<T: NodeIdentity + ?Sized> NodeIdentity for std::sync::Arc<T> {
    fn logger_name(&self) -> LoggingResult<String> {
        (**self).logger_name()
    }
}
