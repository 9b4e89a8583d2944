//! DOM operation errors

use crate::NodeId;

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// Node id does not belong to this tree
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// Content that cannot be placed under `parent`
    #[error("invalid content for {parent}: {reason}")]
    InvalidContent { parent: NodeId, reason: String },

    /// Appending `child` would make it its own ancestor
    #[error("cannot append {child} under {parent}: it is an ancestor of the target")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}
