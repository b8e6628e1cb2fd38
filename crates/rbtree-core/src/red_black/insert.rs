use log::trace;

use super::{is_red, paint, parent_of, rotate_left, rotate_right};
use crate::header::Header;
use crate::types::{Color, Node, NodeId, NodeStore, RbNode, Side};

/// Attaches the detached node `x` as a red leaf.
///
/// With `parent == None` the tree must be empty and `x` becomes the root.
/// Otherwise the `side` slot of `parent` must be vacant. Updates the cached
/// extremes and the count; balance is not restored (see [`insert_rebalance`]).
pub fn link_leaf<S: NodeStore + ?Sized>(
    store: &mut S,
    header: &mut Header,
    x: NodeId,
    parent: Option<NodeId>,
    side: Side,
) {
    {
        let node = store.node_mut(x);
        node.set_p(parent);
        node.set_l(None);
        node.set_r(None);
        node.set_color(Color::Red);
    }

    match parent {
        None => {
            assert!(
                header.root.is_none(),
                "link_leaf: node {x} has no parent but the tree already has a root"
            );
            header.root = Some(x);
            header.leftmost = Some(x);
            header.rightmost = Some(x);
        }
        Some(p) => match side {
            Side::Left => {
                assert!(
                    store.node(p).l().is_none(),
                    "link_leaf: left slot of node {p} is occupied"
                );
                store.node_mut(p).set_l(Some(x));
                if header.leftmost == Some(p) {
                    header.leftmost = Some(x);
                }
            }
            Side::Right => {
                assert!(
                    store.node(p).r().is_none(),
                    "link_leaf: right slot of node {p} is occupied"
                );
                store.node_mut(p).set_r(Some(x));
                if header.rightmost == Some(p) {
                    header.rightmost = Some(x);
                }
            }
        },
    }

    header.count += 1;
}

/// Restores the red-black invariants after `x` was linked as a red leaf.
pub fn insert_rebalance<S: NodeStore + ?Sized>(store: &mut S, header: &mut Header, mut x: NodeId) {
    while !header.is_root(x) {
        let p = parent_of(store, x);
        if store.node(p).is_black() {
            break;
        }
        // A red parent is never the root, so the grandparent exists.
        let g = parent_of(store, p);

        if store.node(g).l() == Some(p) {
            let uncle = store.node(g).r();
            if is_red(store, uncle) {
                trace!("insert_rebalance: recolor at {g}");
                paint(store, p, Color::Black);
                if let Some(u) = uncle {
                    paint(store, u, Color::Black);
                }
                paint(store, g, Color::Red);
                x = g;
                continue;
            }
            if store.node(p).r() == Some(x) {
                trace!("insert_rebalance: inner child {x}, straighten at {p}");
                x = p;
                rotate_left(store, header, x);
            }
            let p = parent_of(store, x);
            let g = parent_of(store, p);
            trace!("insert_rebalance: outer child {x}, rotate at {g}");
            paint(store, p, Color::Black);
            paint(store, g, Color::Red);
            rotate_right(store, header, g);
            break;
        } else {
            let uncle = store.node(g).l();
            if is_red(store, uncle) {
                trace!("insert_rebalance: recolor at {g}");
                paint(store, p, Color::Black);
                if let Some(u) = uncle {
                    paint(store, u, Color::Black);
                }
                paint(store, g, Color::Red);
                x = g;
                continue;
            }
            if store.node(p).l() == Some(x) {
                trace!("insert_rebalance: inner child {x}, straighten at {p}");
                x = p;
                rotate_right(store, header, x);
            }
            let p = parent_of(store, x);
            let g = parent_of(store, p);
            trace!("insert_rebalance: outer child {x}, rotate at {g}");
            paint(store, p, Color::Black);
            paint(store, g, Color::Red);
            rotate_left(store, header, g);
            break;
        }
    }

    if let Some(root) = header.root {
        paint(store, root, Color::Black);
    }
}

/// [`link_leaf`] followed by [`insert_rebalance`].
pub fn insert_and_rebalance<S: NodeStore + ?Sized>(
    store: &mut S,
    header: &mut Header,
    x: NodeId,
    parent: Option<NodeId>,
    side: Side,
) {
    link_leaf(store, header, x, parent, side);
    insert_rebalance(store, header, x);
}
