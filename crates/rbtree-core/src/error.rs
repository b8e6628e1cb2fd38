use thiserror::Error;

use crate::types::NodeId;

/// Structural defect reported by [`crate::verify::verify`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvariantError {
    #[error("root node {root} is red")]
    RedRoot { root: NodeId },
    #[error("root node {root} has parent {parent}")]
    RootHasParent { root: NodeId, parent: NodeId },
    #[error("red node {parent} has red child {child}")]
    RedRedEdge { parent: NodeId, child: NodeId },
    #[error("black-height mismatch under node {node}: left {left}, right {right}")]
    BlackHeightMismatch {
        node: NodeId,
        left: usize,
        right: usize,
    },
    #[error("node {child} links to parent {actual:?}, expected {expected}")]
    BrokenParentLink {
        child: NodeId,
        expected: NodeId,
        actual: Option<NodeId>,
    },
    #[error("nodes {left} and {right} are out of order")]
    OutOfOrder { left: NodeId, right: NodeId },
    #[error("cached leftmost {cached:?} differs from actual {actual:?}")]
    StaleLeftmost {
        cached: Option<NodeId>,
        actual: Option<NodeId>,
    },
    #[error("cached rightmost {cached:?} differs from actual {actual:?}")]
    StaleRightmost {
        cached: Option<NodeId>,
        actual: Option<NodeId>,
    },
    #[error("header count {cached} differs from reachable node count {actual}")]
    CountMismatch { cached: usize, actual: usize },
}
