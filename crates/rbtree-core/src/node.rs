use crate::types::{Color, Node, NodeId, RbNode};

/// Key/value red-black tree node.
#[derive(Clone, Debug)]
pub struct RbTreeNode<K, V> {
    pub(crate) p: Option<NodeId>,
    pub(crate) l: Option<NodeId>,
    pub(crate) r: Option<NodeId>,
    pub k: K,
    pub v: V,
    pub(crate) color: Color,
}

impl<K, V> RbTreeNode<K, V> {
    /// Detached red node, ready to be linked as a leaf.
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            color: Color::Red,
        }
    }

    pub fn key(&self) -> &K {
        &self.k
    }

    pub fn value(&self) -> &V {
        &self.v
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    pub fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }
}

impl<K, V> Node for RbTreeNode<K, V> {
    fn p(&self) -> Option<NodeId> {
        self.p
    }

    fn l(&self) -> Option<NodeId> {
        self.l
    }

    fn r(&self) -> Option<NodeId> {
        self.r
    }

    fn set_p(&mut self, v: Option<NodeId>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<NodeId>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<NodeId>) {
        self.r = v;
    }
}

impl<K, V> RbNode for RbTreeNode<K, V> {
    fn color(&self) -> Color {
        self.color
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }
}
