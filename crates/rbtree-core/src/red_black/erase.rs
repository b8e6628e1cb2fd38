use log::trace;

use super::{is_black, paint, relocate_for_erase, replace_child, rotate_left, rotate_right};
use crate::header::Header;
use crate::types::{Color, Node, NodeId, NodeStore, RbNode};
use crate::util::{next, prev};

/// Unlinks `z`, which must have at most one child, and rebalances.
///
/// The cached extremes are advanced before the links they are computed from
/// are severed. Returns `z` detached: no parent, no children, red. The
/// caller owns it from here on (release it back to its allocator).
///
/// Panics if `z` has two children; run [`relocate_for_erase`] first, or use
/// [`erase`].
pub fn erase_rebalance<S: NodeStore + ?Sized>(
    store: &mut S,
    header: &mut Header,
    z: NodeId,
) -> NodeId {
    let zl = store.node(z).l();
    let zr = store.node(z).r();
    assert!(
        zl.is_none() || zr.is_none(),
        "erase_rebalance: node {z} has two children"
    );

    if header.leftmost == Some(z) {
        header.leftmost = next(store, z);
    }
    if header.rightmost == Some(z) {
        header.rightmost = prev(store, z);
    }

    let child = zl.or(zr);
    let parent = store.node(z).p();
    if let Some(c) = child {
        store.node_mut(c).set_p(parent);
    }
    replace_child(store, header, parent, z, child);
    header.count -= 1;

    let removed_black = store.node(z).is_black();
    {
        let node = store.node_mut(z);
        node.set_p(None);
        node.set_l(None);
        node.set_r(None);
        node.set_color(Color::Red);
    }

    if removed_black {
        erase_fixup(store, header, child, parent);
    }
    z
}

/// [`relocate_for_erase`] followed by [`erase_rebalance`]: removes any node.
pub fn erase<S: NodeStore + ?Sized>(store: &mut S, header: &mut Header, z: NodeId) -> NodeId {
    let z = relocate_for_erase(store, header, z);
    erase_rebalance(store, header, z)
}

/// Resolves the missing black on the path through `x`, a child slot of
/// `x_parent` (`x` may be absent).
fn erase_fixup<S: NodeStore + ?Sized>(
    store: &mut S,
    header: &mut Header,
    mut x: Option<NodeId>,
    mut x_parent: Option<NodeId>,
) {
    while x != header.root && is_black(store, x) {
        let Some(xp) = x_parent else {
            break;
        };

        if store.node(xp).l() == x {
            let mut w = sibling(xp, store.node(xp).r());
            if store.node(w).is_red() {
                trace!("erase_fixup: red sibling {w}, rotate at {xp}");
                paint(store, w, Color::Black);
                paint(store, xp, Color::Red);
                rotate_left(store, header, xp);
                w = sibling(xp, store.node(xp).r());
            }

            let near = store.node(w).l();
            let far = store.node(w).r();
            if is_black(store, near) && is_black(store, far) {
                trace!("erase_fixup: black sibling {w} with black children, move up");
                paint(store, w, Color::Red);
                x = Some(xp);
                x_parent = store.node(xp).p();
                continue;
            }

            if is_black(store, far) {
                trace!("erase_fixup: near red child under {w}, rotate at {w}");
                if let Some(n) = near {
                    paint(store, n, Color::Black);
                }
                paint(store, w, Color::Red);
                rotate_right(store, header, w);
                w = sibling(xp, store.node(xp).r());
            }

            trace!("erase_fixup: far red child under {w}, rotate at {xp}");
            let parent_color = store.node(xp).color();
            paint(store, w, parent_color);
            paint(store, xp, Color::Black);
            if let Some(f) = store.node(w).r() {
                paint(store, f, Color::Black);
            }
            rotate_left(store, header, xp);
            x = header.root;
            break;
        } else {
            let mut w = sibling(xp, store.node(xp).l());
            if store.node(w).is_red() {
                trace!("erase_fixup: red sibling {w}, rotate at {xp}");
                paint(store, w, Color::Black);
                paint(store, xp, Color::Red);
                rotate_right(store, header, xp);
                w = sibling(xp, store.node(xp).l());
            }

            let near = store.node(w).r();
            let far = store.node(w).l();
            if is_black(store, near) && is_black(store, far) {
                trace!("erase_fixup: black sibling {w} with black children, move up");
                paint(store, w, Color::Red);
                x = Some(xp);
                x_parent = store.node(xp).p();
                continue;
            }

            if is_black(store, far) {
                trace!("erase_fixup: near red child under {w}, rotate at {w}");
                if let Some(n) = near {
                    paint(store, n, Color::Black);
                }
                paint(store, w, Color::Red);
                rotate_left(store, header, w);
                w = sibling(xp, store.node(xp).l());
            }

            trace!("erase_fixup: far red child under {w}, rotate at {xp}");
            let parent_color = store.node(xp).color();
            paint(store, w, parent_color);
            paint(store, xp, Color::Black);
            if let Some(f) = store.node(w).l() {
                paint(store, f, Color::Black);
            }
            rotate_right(store, header, xp);
            x = header.root;
            break;
        }
    }

    if let Some(x) = x {
        paint(store, x, Color::Black);
    }
}

/// A doubly-black position always has a sibling: its black-height is at
/// least one on the other side.
#[inline]
fn sibling(parent: NodeId, w: Option<NodeId>) -> NodeId {
    w.unwrap_or_else(|| panic!("erase_fixup: deficit under {parent} has no sibling"))
}
