//! Link traits shared by every node representation the engine operates on.
//!
//! Nodes live in a store and refer to each other by `u32` index. The engine
//! only ever touches links and colors through these traits, so any payload
//! type can be threaded through the tree intrusively.

/// Index of a node inside its store.
pub type NodeId = u32;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// Parent/child links of a binary tree node.
pub trait Node {
    fn p(&self) -> Option<NodeId>;
    fn l(&self) -> Option<NodeId>;
    fn r(&self) -> Option<NodeId>;
    fn set_p(&mut self, v: Option<NodeId>);
    fn set_l(&mut self, v: Option<NodeId>);
    fn set_r(&mut self, v: Option<NodeId>);
}

/// A [`Node`] that also carries a red-black color.
pub trait RbNode: Node {
    fn color(&self) -> Color;
    fn set_color(&mut self, color: Color);

    #[inline]
    fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    #[inline]
    fn is_black(&self) -> bool {
        self.color() == Color::Black
    }
}

/// Index-addressed storage for tree nodes.
///
/// Looking up an index that does not name a live node is a caller bug and
/// panics.
pub trait NodeStore {
    type Node: RbNode;

    fn node(&self, id: NodeId) -> &Self::Node;
    fn node_mut(&mut self, id: NodeId) -> &mut Self::Node;
}

impl<N: RbNode> NodeStore for [N] {
    type Node = N;

    #[inline]
    fn node(&self, id: NodeId) -> &N {
        &self[id as usize]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut N {
        &mut self[id as usize]
    }
}

impl<N: RbNode> NodeStore for Vec<N> {
    type Node = N;

    #[inline]
    fn node(&self, id: NodeId) -> &N {
        &self[id as usize]
    }

    #[inline]
    fn node_mut(&mut self, id: NodeId) -> &mut N {
        &mut self[id as usize]
    }
}

/// Which child slot of a parent a node is attached to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Left,
    Right,
}

/// Cursor position: a live node, or the one-past position shared by both
/// traversal directions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Position {
    Node(NodeId),
    End,
}

impl Position {
    #[inline]
    pub fn node(self) -> Option<NodeId> {
        match self {
            Position::Node(id) => Some(id),
            Position::End => None,
        }
    }

    #[inline]
    pub fn is_end(self) -> bool {
        self == Position::End
    }
}

impl From<Option<NodeId>> for Position {
    fn from(id: Option<NodeId>) -> Self {
        id.map_or(Position::End, Position::Node)
    }
}
