//! Error types for layout tree operations

use crate::model::{NodeId, NodeTag};

/// Errors raised by tree mutation and docking operations
///
/// `NodeNotFound` and `UnexpectedKind` indicate a malformed tree (a bug in the
/// caller or the model). `Unsupported` is an ordinary outcome: the requested
/// drop does not apply to that combination of nodes and the drop is simply
/// not handled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DockError {
    #[error("node {0:?} does not exist in the layout tree")]
    NodeNotFound(NodeId),

    #[error("node {node:?} is a {found:?}, expected {expected}")]
    UnexpectedKind {
        node: NodeId,
        found: NodeTag,
        expected: &'static str,
    },

    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    #[error("node {0:?} cannot be detached or moved there")]
    NotDetachable(NodeId),
}

impl DockError {
    /// Unsupported combinations are surfaced as "drop not handled"
    pub fn is_unsupported(&self) -> bool {
        matches!(self, DockError::Unsupported(_))
    }
}

pub type DockResult<T> = Result<T, DockError>;
