use crate::types::{Node, NodeId, NodeStore};

use super::first::{leftmost, rightmost};

/// In-order successor, `None` when `curr` is the maximum.
pub fn next<S: NodeStore + ?Sized>(store: &S, mut curr: NodeId) -> Option<NodeId> {
    if let Some(r) = store.node(curr).r() {
        return Some(leftmost(store, r));
    }

    let mut p = store.node(curr).p();
    while let Some(pi) = p {
        if store.node(pi).r() == Some(curr) {
            curr = pi;
            p = store.node(pi).p();
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor, `None` when `curr` is the minimum.
pub fn prev<S: NodeStore + ?Sized>(store: &S, mut curr: NodeId) -> Option<NodeId> {
    if let Some(l) = store.node(curr).l() {
        return Some(rightmost(store, l));
    }

    let mut p = store.node(curr).p();
    while let Some(pi) = p {
        if store.node(pi).l() == Some(curr) {
            curr = pi;
            p = store.node(pi).p();
        } else {
            return Some(pi);
        }
    }
    None
}
