//! Independent structural checker.
//!
//! Recomputes everything the engine maintains incrementally: colors along
//! every edge, black-heights per path, parent back-links, cached extremes,
//! the node count and in-order sortedness.

use std::collections::HashMap;

use crate::error::InvariantError;
use crate::header::Header;
use crate::types::{Node, NodeId, NodeStore, RbNode};
use crate::util::{leftmost, next, rightmost};

/// Checks every red-black and header invariant.
///
/// `cmp(a, b)` compares the keys of nodes `a` and `b` (negative, zero or
/// positive). Returns the black-height of the root, not counting the root
/// itself; `0` for an empty tree.
pub fn verify<S, F>(store: &S, header: &Header, mut cmp: F) -> Result<usize, InvariantError>
where
    S: NodeStore + ?Sized,
    F: FnMut(NodeId, NodeId) -> i32,
{
    let Some(root) = header.root() else {
        if header.leftmost().is_some() {
            return Err(InvariantError::StaleLeftmost {
                cached: header.leftmost(),
                actual: None,
            });
        }
        if header.rightmost().is_some() {
            return Err(InvariantError::StaleRightmost {
                cached: header.rightmost(),
                actual: None,
            });
        }
        if header.len() != 0 {
            return Err(InvariantError::CountMismatch {
                cached: header.len(),
                actual: 0,
            });
        }
        return Ok(0);
    };

    if let Some(parent) = store.node(root).p() {
        return Err(InvariantError::RootHasParent { root, parent });
    }
    if store.node(root).is_red() {
        return Err(InvariantError::RedRoot { root });
    }

    let (black_height, count) = check_subtree(store, root)?;
    if count != header.len() {
        return Err(InvariantError::CountMismatch {
            cached: header.len(),
            actual: count,
        });
    }

    let min = leftmost(store, root);
    if header.leftmost() != Some(min) {
        return Err(InvariantError::StaleLeftmost {
            cached: header.leftmost(),
            actual: Some(min),
        });
    }
    let max = rightmost(store, root);
    if header.rightmost() != Some(max) {
        return Err(InvariantError::StaleRightmost {
            cached: header.rightmost(),
            actual: Some(max),
        });
    }

    let mut curr = min;
    while let Some(succ) = next(store, curr) {
        if cmp(curr, succ) > 0 {
            return Err(InvariantError::OutOfOrder {
                left: curr,
                right: succ,
            });
        }
        curr = succ;
    }

    Ok(black_height)
}

/// Returns `(black-height below root, node count)` of the subtree at `root`.
///
/// Walks with an explicit stack. A child is only descended into after its
/// back-link to the parent checks out, so the walk terminates even in a
/// malformed store.
fn check_subtree<S>(store: &S, root: NodeId) -> Result<(usize, usize), InvariantError>
where
    S: NodeStore + ?Sized,
{
    let mut preorder = Vec::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        let node = store.node(id);
        for c in [node.l(), node.r()].into_iter().flatten() {
            let child = store.node(c);
            if child.p() != Some(id) {
                return Err(InvariantError::BrokenParentLink {
                    child: c,
                    expected: id,
                    actual: child.p(),
                });
            }
            if node.is_red() && child.is_red() {
                return Err(InvariantError::RedRedEdge {
                    parent: id,
                    child: c,
                });
            }
            stack.push(c);
        }
        preorder.push(id);
    }

    // Reverse preorder settles every child before its parent.
    let mut below: HashMap<NodeId, (usize, usize)> = HashMap::with_capacity(preorder.len());
    for &id in preorder.iter().rev() {
        let node = store.node(id);
        let mut heights = [0usize; 2];
        let mut count = 1;
        for (slot, child) in [node.l(), node.r()].into_iter().enumerate() {
            let Some(c) = child else {
                continue;
            };
            let (h, n) = below[&c];
            heights[slot] = h + usize::from(store.node(c).is_black());
            count += n;
        }
        if heights[0] != heights[1] {
            return Err(InvariantError::BlackHeightMismatch {
                node: id,
                left: heights[0],
                right: heights[1],
            });
        }
        below.insert(id, (heights[0], count));
    }
    Ok(below[&root])
}

/// Number of nodes on the longest root-to-leaf path.
pub fn height<S: NodeStore + ?Sized>(store: &S, root: Option<NodeId>) -> usize {
    let mut deepest = 0;
    let mut stack: Vec<(NodeId, usize)> = root.map(|r| (r, 1)).into_iter().collect();
    while let Some((id, depth)) = stack.pop() {
        deepest = deepest.max(depth);
        let n = store.node(id);
        for c in [n.l(), n.r()].into_iter().flatten() {
            stack.push((c, depth + 1));
        }
    }
    deepest
}
