//! Red-black balancing engine.
//!
//! Every operation rewires links in a [`NodeStore`] and keeps the [`Header`]
//! (root, cached extremes, count) in step. None of them compare keys: the
//! caller locates positions, the engine only restores balance.

mod erase;
mod insert;
mod relocate;
mod rotate;

pub use erase::{erase, erase_rebalance};
pub use insert::{insert_and_rebalance, insert_rebalance, link_leaf};
pub use relocate::relocate_for_erase;
pub use rotate::{rotate_left, rotate_right};

use crate::header::Header;
use crate::types::{Color, Node, NodeId, NodeStore, RbNode};

/// Absent links count as black.
#[inline]
pub(crate) fn is_black<S: NodeStore + ?Sized>(store: &S, id: Option<NodeId>) -> bool {
    id.map_or(true, |i| store.node(i).is_black())
}

#[inline]
pub(crate) fn is_red<S: NodeStore + ?Sized>(store: &S, id: Option<NodeId>) -> bool {
    !is_black(store, id)
}

#[inline]
pub(crate) fn paint<S: NodeStore + ?Sized>(store: &mut S, id: NodeId, color: Color) {
    store.node_mut(id).set_color(color);
}

#[inline]
pub(crate) fn parent_of<S: NodeStore + ?Sized>(store: &S, id: NodeId) -> NodeId {
    store
        .node(id)
        .p()
        .unwrap_or_else(|| panic!("node {id} has no parent"))
}

/// Points the slot that held `old` (a child of `parent`, or the root) at `new`.
pub(crate) fn replace_child<S: NodeStore + ?Sized>(
    store: &mut S,
    header: &mut Header,
    parent: Option<NodeId>,
    old: NodeId,
    new: Option<NodeId>,
) {
    match parent {
        None => header.root = new,
        Some(p) => {
            if store.node(p).l() == Some(old) {
                store.node_mut(p).set_l(new);
            } else {
                store.node_mut(p).set_r(new);
            }
        }
    }
}
