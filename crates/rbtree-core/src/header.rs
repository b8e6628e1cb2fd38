use crate::types::{NodeId, Position};

/// Anchor of a tree: the root plus cached extremes and the live-node count.
///
/// Both extremes are `None` exactly when the tree is empty. The end position
/// is not a node; cursors represent it as [`Position::End`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Header {
    pub(crate) root: Option<NodeId>,
    pub(crate) leftmost: Option<NodeId>,
    pub(crate) rightmost: Option<NodeId>,
    pub(crate) count: usize,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    #[inline]
    pub fn leftmost(&self) -> Option<NodeId> {
        self.leftmost
    }

    #[inline]
    pub fn rightmost(&self) -> Option<NodeId> {
        self.rightmost
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    #[inline]
    pub fn is_root(&self, id: NodeId) -> bool {
        self.root == Some(id)
    }

    /// First position of a forward walk, `End` for an empty tree.
    pub fn begin(&self) -> Position {
        self.leftmost.into()
    }

    pub fn end(&self) -> Position {
        Position::End
    }

    /// First position of a backward walk, `End` for an empty tree.
    pub fn rbegin(&self) -> Position {
        self.rightmost.into()
    }

    /// Forgets every node. The store is left untouched.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
