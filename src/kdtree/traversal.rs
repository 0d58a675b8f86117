//! Utilities to traverse the KDTree structure.

use crate::bbox::BoundingBox;
use crate::kdtree::index::{KDTree, NodeData, NodeKind};
use crate::r#type::Number;

/// A read-only view of one node in a [`KDTree`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a, N: Number> {
    /// The tree that this node is a reference onto
    tree: &'a KDTree<'a, N>,
    id: usize,
}

impl<'a, N: Number> Node<'a, N> {
    pub(crate) fn new(tree: &'a KDTree<'a, N>, id: usize) -> Self {
        Self { tree, id }
    }

    #[inline]
    fn data(&self) -> &'a NodeData {
        &self.tree.nodes[self.id]
    }

    /// The tight bounding box of every point in this node's subtree.
    pub fn bbox(&self) -> BoundingBox {
        self.data().bbox
    }

    /// The original indices of every point in this node's subtree.
    ///
    /// For a leaf these are exactly the points it stores.
    pub fn indices(&self) -> &'a [usize] {
        let data = self.data();
        &self.tree.ids[data.start..data.end]
    }

    /// The axis the children of this node are split over, 0 for x and 1 for y.
    ///
    /// `None` for a leaf.
    pub fn axis(&self) -> Option<usize> {
        match self.data().kind {
            NodeKind::Leaf => None,
            NodeKind::Internal { axis, .. } => Some(axis),
        }
    }

    /// The child node holding the points before the split. `None` for a leaf.
    pub fn left_child(&self) -> Option<Node<'a, N>> {
        match self.data().kind {
            NodeKind::Leaf => None,
            NodeKind::Internal { left, .. } => Some(Node::new(self.tree, left)),
        }
    }

    /// The child node holding the points after the split. `None` for a leaf.
    pub fn right_child(&self) -> Option<Node<'a, N>> {
        match self.data().kind {
            NodeKind::Leaf => None,
            NodeKind::Internal { right, .. } => Some(Node::new(self.tree, right)),
        }
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.data().kind, NodeKind::Leaf)
    }

    /// Returns `true` if this is an intermediate node with children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }
}
