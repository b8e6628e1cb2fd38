use log::trace;

use super::replace_child;
use crate::header::Header;
use crate::types::{Node, NodeId, NodeStore, RbNode};
use crate::util::leftmost;

/// Moves `z` out of a two-children position so it can be unlinked.
///
/// When `z` has two children it trades places with its in-order successor
/// `y`: links, colors and any header reference follow the position, payloads
/// stay with their node. Afterwards `y` sits where `z` was and `z` has at
/// most one (right) child. Nodes with fewer than two children are left alone.
/// Returns `z`.
pub fn relocate_for_erase<S: NodeStore + ?Sized>(
    store: &mut S,
    header: &mut Header,
    z: NodeId,
) -> NodeId {
    let (Some(zl), Some(zr)) = (store.node(z).l(), store.node(z).r()) else {
        return z;
    };
    let y = leftmost(store, zr);
    let zp = store.node(z).p();
    let z_color = store.node(z).color();
    let yp = store.node(y).p();
    let yr = store.node(y).r();
    let y_color = store.node(y).color();

    // `y` takes the slot of `z`.
    replace_child(store, header, zp, z, Some(y));
    store.node_mut(y).set_p(zp);
    store.node_mut(y).set_l(Some(zl));
    store.node_mut(zl).set_p(Some(y));
    store.node_mut(y).set_color(z_color);

    if y == zr {
        store.node_mut(y).set_r(Some(z));
        store.node_mut(z).set_p(Some(y));
    } else {
        let yp = yp.unwrap_or_else(|| panic!("successor {y} below {z} has no parent"));
        store.node_mut(y).set_r(Some(zr));
        store.node_mut(zr).set_p(Some(y));
        store.node_mut(yp).set_l(Some(z));
        store.node_mut(z).set_p(Some(yp));
    }

    // `z` takes the old slot of `y`, which never has a left child.
    store.node_mut(z).set_l(None);
    store.node_mut(z).set_r(yr);
    if let Some(c) = yr {
        store.node_mut(c).set_p(Some(z));
    }
    store.node_mut(z).set_color(y_color);

    // `z` has a left subtree, so only the rightmost cache can name `y`.
    if header.rightmost == Some(y) {
        header.rightmost = Some(z);
    }

    trace!("relocate_for_erase: {z} swapped with successor {y}");
    z
}
