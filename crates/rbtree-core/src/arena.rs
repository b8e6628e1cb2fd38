//! Slot arena that owns tree nodes and recycles freed slots.
//!
//! Node links are plain `u32` slot indices. Handed-out [`NodeHandle`]s also
//! carry the slot generation, which is bumped on every release, so a handle
//! to an erased node can be told apart from a handle to whatever reuses the
//! slot later.

use log::debug;

use crate::types::{NodeId, NodeStore, RbNode};

/// Stable reference to an acquired node.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeHandle {
    index: NodeId,
    generation: u32,
}

impl NodeHandle {
    #[inline]
    pub fn index(self) -> NodeId {
        self.index
    }

    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Clone, Debug)]
enum Slot<N> {
    Occupied { generation: u32, node: N },
    Vacant { generation: u32, next_free: Option<NodeId> },
}

#[derive(Clone, Debug)]
pub struct NodeArena<N> {
    slots: Vec<Slot<N>>,
    free_head: Option<NodeId>,
    live: usize,
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> NodeArena<N> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            live: 0,
        }
    }

    /// Stores `node`, reusing the most recently released slot if any.
    pub fn acquire(&mut self, node: N) -> NodeHandle {
        self.live += 1;
        if let Some(index) = self.free_head {
            let slot = &mut self.slots[index as usize];
            let Slot::Vacant {
                generation,
                next_free,
            } = *slot
            else {
                unreachable!("free list points at occupied slot {index}");
            };
            self.free_head = next_free;
            *slot = Slot::Occupied { generation, node };
            debug!("arena: reused slot {index} (generation {generation})");
            return NodeHandle { index, generation };
        }

        let index = NodeId::try_from(self.slots.len()).expect("node arena exceeds u32 slots");
        if self.slots.len() == self.slots.capacity() {
            debug!("arena: growing past {} slots", self.slots.len());
        }
        self.slots.push(Slot::Occupied {
            generation: 0,
            node,
        });
        NodeHandle {
            index,
            generation: 0,
        }
    }

    /// Frees the slot named by `handle` and returns its node. `None` if the
    /// handle is stale.
    pub fn release(&mut self, handle: NodeHandle) -> Option<N> {
        self.resolve(handle)?;
        let next_free = self.free_head;
        let vacant = Slot::Vacant {
            generation: handle.generation.wrapping_add(1),
            next_free,
        };
        let Slot::Occupied { node, .. } =
            std::mem::replace(&mut self.slots[handle.index as usize], vacant)
        else {
            unreachable!("resolved handle names a vacant slot");
        };
        self.free_head = Some(handle.index);
        self.live -= 1;
        Some(node)
    }

    /// Slot index of a live handle.
    pub fn resolve(&self, handle: NodeHandle) -> Option<NodeId> {
        match self.slots.get(handle.index as usize) {
            Some(Slot::Occupied { generation, .. }) if *generation == handle.generation => {
                Some(handle.index)
            }
            _ => None,
        }
    }

    pub fn contains(&self, handle: NodeHandle) -> bool {
        self.resolve(handle).is_some()
    }

    /// Current handle of the live node at `id`. Panics if the slot is vacant.
    pub fn handle_of(&self, id: NodeId) -> NodeHandle {
        match self.slots.get(id as usize) {
            Some(Slot::Occupied { generation, .. }) => NodeHandle {
                index: id,
                generation: *generation,
            },
            _ => panic!("node {id} is not live"),
        }
    }

    pub fn get(&self, id: NodeId) -> Option<&N> {
        match self.slots.get(id as usize) {
            Some(Slot::Occupied { node, .. }) => Some(node),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut N> {
        match self.slots.get_mut(id as usize) {
            Some(Slot::Occupied { node, .. }) => Some(node),
            _ => None,
        }
    }

    /// Number of live nodes.
    pub fn live(&self) -> usize {
        self.live
    }

    /// Number of slots, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every node. Slots are kept and their generations bumped, so no
    /// handle acquired before the clear resolves afterwards.
    pub fn clear(&mut self) {
        self.free_head = None;
        for (index, slot) in self.slots.iter_mut().enumerate().rev() {
            let generation = match slot {
                Slot::Occupied { generation, .. } => generation.wrapping_add(1),
                Slot::Vacant { generation, .. } => *generation,
            };
            *slot = Slot::Vacant {
                generation,
                next_free: self.free_head,
            };
            self.free_head = Some(index as NodeId);
        }
        self.live = 0;
    }
}

impl<N: RbNode> NodeStore for NodeArena<N> {
    type Node = N;

    #[inline]
    fn node(&self, id: NodeId) -> &N {
        self.get(id)
            .unwrap_or_else(|| panic!("node {id} is not live"))
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut N {
        self.get_mut(id)
            .unwrap_or_else(|| panic!("node {id} is not live"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RbTreeNode;

    type Arena = NodeArena<RbTreeNode<i32, &'static str>>;

    #[test]
    fn acquire_hands_out_sequential_slots() {
        let mut arena = Arena::new();
        let a = arena.acquire(RbTreeNode::new(1, "a"));
        let b = arena.acquire(RbTreeNode::new(2, "b"));
        assert_eq!((a.index(), b.index()), (0, 1));
        assert_eq!(arena.live(), 2);
        assert_eq!(arena.node(1).key(), &2);
    }

    #[test]
    fn release_returns_node_and_recycles_slot() {
        let mut arena = Arena::new();
        let a = arena.acquire(RbTreeNode::new(1, "a"));
        let node = arena.release(a).unwrap();
        assert_eq!(node.into_entry(), (1, "a"));
        assert_eq!(arena.live(), 0);

        let b = arena.acquire(RbTreeNode::new(2, "b"));
        assert_eq!(b.index(), a.index());
        assert_eq!(b.generation(), a.generation() + 1);
        assert_eq!(arena.capacity(), 1);
    }

    #[test]
    fn stale_handle_does_not_resolve() {
        let mut arena = Arena::new();
        let a = arena.acquire(RbTreeNode::new(1, "a"));
        arena.release(a);
        assert_eq!(arena.resolve(a), None);
        assert!(arena.release(a).is_none());

        let b = arena.acquire(RbTreeNode::new(2, "b"));
        assert!(!arena.contains(a));
        assert!(arena.contains(b));
        assert_eq!(arena.handle_of(b.index()), b);
    }

    #[test]
    fn free_list_is_lifo() {
        let mut arena = Arena::new();
        let handles: Vec<_> = (0..4).map(|i| arena.acquire(RbTreeNode::new(i, ""))).collect();
        arena.release(handles[1]);
        arena.release(handles[3]);
        assert_eq!(arena.acquire(RbTreeNode::new(9, "")).index(), 3);
        assert_eq!(arena.acquire(RbTreeNode::new(9, "")).index(), 1);
        assert_eq!(arena.acquire(RbTreeNode::new(9, "")).index(), 4);
    }

    #[test]
    fn clear_invalidates_every_handle() {
        let mut arena = Arena::new();
        let a = arena.acquire(RbTreeNode::new(1, "a"));
        let b = arena.acquire(RbTreeNode::new(2, "b"));
        arena.clear();
        assert_eq!(arena.live(), 0);
        assert!(!arena.contains(a));
        assert!(!arena.contains(b));

        // Slots are recycled lowest index first.
        let c = arena.acquire(RbTreeNode::new(3, "c"));
        assert_eq!(c.index(), 0);
        assert_ne!(c, a);
        assert_eq!(arena.capacity(), 2);
    }

    #[test]
    #[should_panic(expected = "is not live")]
    fn indexing_a_vacant_slot_panics() {
        let mut arena = Arena::new();
        let a = arena.acquire(RbTreeNode::new(1, "a"));
        arena.release(a);
        let _ = arena.node(a.index());
    }
}
