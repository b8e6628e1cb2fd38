//! Ordered key/value container on top of the engine.
//!
//! `RbTree` only decides *where* a key goes (through its comparator) and
//! owns the node arena; linking, balancing, unlinking and traversal are all
//! delegated to [`crate::red_black`] and [`crate::traversal`].

mod cursor;

pub use cursor::{Cursor, Iter};

use log::debug;

use crate::arena::{NodeArena, NodeHandle};
use crate::error::InvariantError;
use crate::header::Header;
use crate::node::RbTreeNode;
use crate::print::{print_node, Printable};
use crate::red_black::{erase, insert_and_rebalance};
use crate::traversal::increment;
use crate::types::{Node, NodeId, NodeStore, Position, Side};
use crate::verify::{height, verify};

fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

pub struct RbTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    pub comparator: C,
    header: Header,
    arena: NodeArena<RbTreeNode<K, V>>,
}

impl<K, V> RbTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let mut tree = Self::new();
        tree.arena = NodeArena::with_capacity(capacity);
        tree
    }
}

impl<K, V> Default for RbTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> RbTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            comparator,
            header: Header::new(),
            arena: NodeArena::new(),
        }
    }

    #[inline]
    fn compare(&self, a: &K, b: &K) -> i32 {
        (self.comparator)(a, b)
    }

    #[inline]
    fn key_at(&self, id: NodeId) -> &K {
        self.arena.node(id).key()
    }

    /// First node, in order, whose key equals `key`.
    fn find_node(&self, key: &K) -> Option<NodeId> {
        self.lower_bound_node(key)
            .filter(|&i| self.compare(key, self.key_at(i)) == 0)
    }

    /// First node whose key is not less than `key`.
    fn lower_bound_node(&self, key: &K) -> Option<NodeId> {
        let mut curr = self.header.root();
        let mut res = None;
        while let Some(i) = curr {
            if self.compare(self.key_at(i), key) < 0 {
                curr = self.arena.node(i).r();
            } else {
                res = Some(i);
                curr = self.arena.node(i).l();
            }
        }
        res
    }

    /// First node whose key is greater than `key`.
    fn upper_bound_node(&self, key: &K) -> Option<NodeId> {
        let mut curr = self.header.root();
        let mut res = None;
        while let Some(i) = curr {
            if self.compare(self.key_at(i), key) <= 0 {
                curr = self.arena.node(i).r();
            } else {
                res = Some(i);
                curr = self.arena.node(i).l();
            }
        }
        res
    }

    /// Leaf slot for `key`. With `unique`, an equal key yields `Err(node)`;
    /// otherwise equal keys descend right so duplicates keep insertion order.
    fn insert_slot(&self, key: &K, unique: bool) -> Result<(Option<NodeId>, Side), NodeId> {
        let Some(root) = self.header.root() else {
            return Ok((None, Side::Left));
        };

        // Appending past the maximum or prepending before the minimum skips
        // the descent.
        if let Some(max) = self.header.rightmost() {
            let cmp = self.compare(key, self.key_at(max));
            if cmp > 0 || (cmp == 0 && !unique) {
                return Ok((Some(max), Side::Right));
            }
        }
        if let Some(min) = self.header.leftmost() {
            if self.compare(key, self.key_at(min)) < 0 {
                return Ok((Some(min), Side::Left));
            }
        }

        let mut p = root;
        loop {
            let cmp = self.compare(key, self.key_at(p));
            if cmp == 0 && unique {
                return Err(p);
            }
            let node = self.arena.node(p);
            let (child, side) = if cmp < 0 {
                (node.l(), Side::Left)
            } else {
                (node.r(), Side::Right)
            };
            match child {
                Some(c) => p = c,
                None => return Ok((Some(p), side)),
            }
        }
    }

    fn attach(&mut self, key: K, value: V, parent: Option<NodeId>, side: Side) -> NodeHandle {
        let handle = self.arena.acquire(RbTreeNode::new(key, value));
        insert_and_rebalance(
            &mut self.arena,
            &mut self.header,
            handle.index(),
            parent,
            side,
        );
        debug!(
            "rbtree: linked node {} ({} live)",
            handle.index(),
            self.header.len()
        );
        handle
    }

    /// Inserts `key` unless an equal key is present, in which case that
    /// node's value is replaced. Returns the node's handle and whether a new
    /// node was created.
    pub fn insert_unique(&mut self, key: K, value: V) -> (NodeHandle, bool) {
        match self.insert_slot(&key, true) {
            Ok((parent, side)) => (self.attach(key, value, parent, side), true),
            Err(existing) => {
                self.arena.node_mut(existing).v = value;
                (self.arena.handle_of(existing), false)
            }
        }
    }

    /// Inserts `key` even if equal keys exist; it lands after all of them.
    pub fn insert_equal(&mut self, key: K, value: V) -> NodeHandle {
        let Ok((parent, side)) = self.insert_slot(&key, false) else {
            unreachable!("non-unique insertion always finds a leaf slot");
        };
        self.attach(key, value, parent, side)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_node(key).map(|i| self.arena.node(i).value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let i = self.find_node(key)?;
        Some(self.arena.node_mut(i).value_mut())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    pub fn find(&self, key: &K) -> Position {
        self.find_node(key).into()
    }

    pub fn lower_bound(&self, key: &K) -> Position {
        self.lower_bound_node(key).into()
    }

    pub fn upper_bound(&self, key: &K) -> Position {
        self.upper_bound_node(key).into()
    }

    /// Handle of the node at `pos`, `None` at `End`.
    pub fn handle(&self, pos: Position) -> Option<NodeHandle> {
        pos.node().map(|id| self.arena.handle_of(id))
    }

    /// Entry behind a handle, `None` once the node was removed.
    pub fn entry(&self, handle: NodeHandle) -> Option<(&K, &V)> {
        let id = self.arena.resolve(handle)?;
        let node = self.arena.node(id);
        Some((node.key(), node.value()))
    }

    fn remove_node(&mut self, id: NodeId) -> (K, V) {
        let handle = self.arena.handle_of(id);
        erase(&mut self.arena, &mut self.header, id);
        debug!("rbtree: unlinked node {id} ({} live)", self.header.len());
        self.arena
            .release(handle)
            .unwrap_or_else(|| panic!("erased node {id} is not live"))
            .into_entry()
    }

    /// Removes the first node, in order, whose key equals `key`.
    pub fn remove(&mut self, key: &K) -> Option<(K, V)> {
        let id = self.find_node(key)?;
        Some(self.remove_node(id))
    }

    /// Removes the node behind `handle`; `None` for a stale handle.
    pub fn remove_handle(&mut self, handle: NodeHandle) -> Option<(K, V)> {
        let id = self.arena.resolve(handle)?;
        Some(self.remove_node(id))
    }

    /// Removes the node at `pos` and returns its entry with the position of
    /// its successor. `None` at `End`.
    pub fn remove_at(&mut self, pos: Position) -> Option<((K, V), Position)> {
        let id = pos.node()?;
        let next = increment(&self.arena, pos);
        let entry = self.remove_node(id);
        Some((entry, next))
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.header.leftmost().map(|i| {
            let n = self.arena.node(i);
            (n.key(), n.value())
        })
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        self.header.rightmost().map(|i| {
            let n = self.arena.node(i);
            (n.key(), n.value())
        })
    }

    pub fn len(&self) -> usize {
        self.header.len()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    pub fn height(&self) -> usize {
        height(&self.arena, self.header.root())
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.header.reset();
    }

    pub fn begin(&self) -> Position {
        self.header.begin()
    }

    pub fn end(&self) -> Position {
        self.header.end()
    }

    pub fn rbegin(&self) -> Position {
        self.header.rbegin()
    }

    pub fn cursor(&self, pos: Position) -> Cursor<'_, K, V> {
        Cursor::new(&self.arena, &self.header, pos)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.arena, &self.header)
    }

    /// Runs the structural checker with this tree's comparator.
    pub fn verify(&self) -> Result<usize, InvariantError> {
        verify(&self.arena, &self.header, |a, b| {
            self.compare(self.key_at(a), self.key_at(b))
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn arena(&self) -> &NodeArena<RbTreeNode<K, V>> {
        &self.arena
    }

    /// Node at `id`. Panics if `id` is not live.
    pub fn node(&self, id: NodeId) -> &RbTreeNode<K, V> {
        self.arena.node(id)
    }
}

impl<K, V, C> Printable for RbTree<K, V, C>
where
    K: std::fmt::Display,
    C: Fn(&K, &K) -> i32,
{
    fn to_string_with_tab(&self, tab: Option<&str>) -> String {
        let label = |id: NodeId| self.key_at(id).to_string();
        format!(
            "RbTree(len={})\n{}",
            self.len(),
            print_node(&self.arena, self.header.root(), tab.unwrap_or(""), &label)
        )
    }
}

impl<'a, K, V, C> IntoIterator for &'a RbTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for RbTree<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V, C> Extend<(K, V)> for RbTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert_unique(k, v);
        }
    }
}
