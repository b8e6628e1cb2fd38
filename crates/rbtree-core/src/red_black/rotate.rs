use log::trace;

use super::replace_child;
use crate::header::Header;
use crate::types::{Node, NodeId, NodeStore};

/// Lifts the right child of `x` into its place.
///
/// ```text
///     x                y
///    / \              / \
///   a   y     =>     x   c
///      / \          / \
///     b   c        a   b
/// ```
///
/// Panics if `x` has no right child.
pub fn rotate_left<S: NodeStore + ?Sized>(store: &mut S, header: &mut Header, x: NodeId) {
    let y = store
        .node(x)
        .r()
        .unwrap_or_else(|| panic!("rotate_left: node {x} has no right child"));
    let inner = store.node(y).l();
    let xp = store.node(x).p();

    store.node_mut(x).set_r(inner);
    if let Some(b) = inner {
        store.node_mut(b).set_p(Some(x));
    }
    store.node_mut(y).set_p(xp);
    replace_child(store, header, xp, x, Some(y));
    store.node_mut(y).set_l(Some(x));
    store.node_mut(x).set_p(Some(y));

    trace!("rotate_left: {y} lifted over {x}");
}

/// Lifts the left child of `x` into its place. Mirror of [`rotate_left`].
///
/// Panics if `x` has no left child.
pub fn rotate_right<S: NodeStore + ?Sized>(store: &mut S, header: &mut Header, x: NodeId) {
    let y = store
        .node(x)
        .l()
        .unwrap_or_else(|| panic!("rotate_right: node {x} has no left child"));
    let inner = store.node(y).r();
    let xp = store.node(x).p();

    store.node_mut(x).set_l(inner);
    if let Some(b) = inner {
        store.node_mut(b).set_p(Some(x));
    }
    store.node_mut(y).set_p(xp);
    replace_child(store, header, xp, x, Some(y));
    store.node_mut(y).set_r(Some(x));
    store.node_mut(x).set_p(Some(y));

    trace!("rotate_right: {y} lifted over {x}");
}
