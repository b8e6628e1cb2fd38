use crate::arena::NodeArena;
use crate::header::Header;
use crate::node::RbTreeNode;
use crate::traversal::{decrement, increment};
use crate::types::{NodeStore, Position};

/// Read-only cursor over an [`RbTree`](super::RbTree).
#[derive(Debug)]
pub struct Cursor<'a, K, V> {
    arena: &'a NodeArena<RbTreeNode<K, V>>,
    header: &'a Header,
    pos: Position,
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(crate) fn new(
        arena: &'a NodeArena<RbTreeNode<K, V>>,
        header: &'a Header,
        pos: Position,
    ) -> Self {
        Self { arena, header, pos }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn is_end(&self) -> bool {
        self.pos.is_end()
    }

    /// Entry under the cursor, `None` at `End`.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        let node = self.arena.node(self.pos.node()?);
        Some((node.key(), node.value()))
    }

    pub fn key(&self) -> Option<&'a K> {
        self.get().map(|(k, _)| k)
    }

    pub fn value(&self) -> Option<&'a V> {
        self.get().map(|(_, v)| v)
    }

    pub fn move_next(&mut self) {
        self.pos = increment(self.arena, self.pos);
    }

    /// Steps back; from `End` this lands on the maximum.
    pub fn move_prev(&mut self) {
        self.pos = decrement(self.arena, self.header, self.pos);
    }
}

/// In-order iterator over an [`RbTree`](super::RbTree), double-ended.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    arena: &'a NodeArena<RbTreeNode<K, V>>,
    header: &'a Header,
    front: Position,
    back: Position,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(arena: &'a NodeArena<RbTreeNode<K, V>>, header: &'a Header) -> Self {
        Self {
            arena,
            header,
            front: header.begin(),
            back: header.rbegin(),
            remaining: header.len(),
        }
    }

    fn entry(&self, pos: Position) -> Option<(&'a K, &'a V)> {
        let node = self.arena.node(pos.node()?);
        Some((node.key(), node.value()))
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.entry(self.front)?;
        self.front = increment(self.arena, self.front);
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.entry(self.back)?;
        self.back = decrement(self.arena, self.header, self.back);
        self.remaining -= 1;
        Some(item)
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

#[cfg(test)]
mod tests {
    use crate::tree::RbTree;
    use crate::types::Position;

    fn sample() -> RbTree<i32, &'static str> {
        [(20, "b"), (10, "a"), (30, "c"), (40, "d")]
            .into_iter()
            .collect()
    }

    #[test]
    fn cursor_walks_both_ways_through_end() {
        let tree = sample();
        let mut cursor = tree.cursor(tree.begin());
        assert_eq!(cursor.get(), Some((&10, &"a")));
        cursor.move_next();
        cursor.move_next();
        cursor.move_next();
        assert_eq!(cursor.key(), Some(&40));
        cursor.move_next();
        assert!(cursor.is_end());
        assert_eq!(cursor.get(), None);
        cursor.move_next();
        assert_eq!(cursor.position(), Position::End);
        cursor.move_prev();
        assert_eq!(cursor.value(), Some(&"d"));
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let tree = sample();
        let mut iter = tree.iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some((&10, &"a")));
        assert_eq!(iter.next_back(), Some((&40, &"d")));
        assert_eq!(iter.next_back(), Some((&30, &"c")));
        assert_eq!(iter.next(), Some((&20, &"b")));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn reversed_iter_is_descending() {
        let tree = sample();
        let keys: Vec<i32> = tree.iter().rev().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![40, 30, 20, 10]);
    }

    #[test]
    fn empty_tree_cursor_starts_at_end() {
        let tree: RbTree<i32, ()> = RbTree::new();
        let mut cursor = tree.cursor(tree.begin());
        assert!(cursor.is_end());
        cursor.move_prev();
        assert!(cursor.is_end());
        assert_eq!(tree.iter().next(), None);
    }
}
