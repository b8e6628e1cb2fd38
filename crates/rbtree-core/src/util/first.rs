use crate::types::{Node, NodeId, NodeStore};

/// Leftmost node of the subtree rooted at `id`.
pub fn leftmost<S: NodeStore + ?Sized>(store: &S, mut id: NodeId) -> NodeId {
    while let Some(l) = store.node(id).l() {
        id = l;
    }
    id
}

/// Rightmost node of the subtree rooted at `id`.
pub fn rightmost<S: NodeStore + ?Sized>(store: &S, mut id: NodeId) -> NodeId {
    while let Some(r) = store.node(id).r() {
        id = r;
    }
    id
}

/// Leftmost node in the tree, `None` for an empty tree.
pub fn first<S: NodeStore + ?Sized>(store: &S, root: Option<NodeId>) -> Option<NodeId> {
    root.map(|id| leftmost(store, id))
}

/// Rightmost node in the tree, `None` for an empty tree.
pub fn last<S: NodeStore + ?Sized>(store: &S, root: Option<NodeId>) -> Option<NodeId> {
    root.map(|id| rightmost(store, id))
}
