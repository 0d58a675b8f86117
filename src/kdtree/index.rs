use crate::bbox::BoundingBox;
use crate::error::Result;
use crate::kdtree::builder::KDTreeBuilder;
use crate::kdtree::traversal::Node;
use crate::r#type::Number;

/// A static, balanced KD-tree over a borrowed set of 2D points.
///
/// The tree never copies coordinates: it holds the caller's `x` and `y` slices plus its own node
/// arena and a permutation of the point indices. Every node owns a contiguous range of that
/// permutation and the tight bounding box of the points in it.
///
/// Usually this will be created via [`KDTree::try_new`] or
/// [`KDTreeBuilder`][crate::kdtree::KDTreeBuilder]. Queries come from the
/// [`NearestNeighborIndex`][crate::NearestNeighborIndex] trait.
#[derive(Debug, Clone)]
pub struct KDTree<'a, N: Number> {
    pub(crate) x: &'a [N],
    pub(crate) y: &'a [N],
    /// Original point indices, grouped so that each node covers a contiguous range
    pub(crate) ids: Vec<usize>,
    pub(crate) nodes: Vec<NodeData>,
    pub(crate) root: usize,
    pub(crate) leaf_size: usize,
    pub(crate) depth: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub(crate) bbox: BoundingBox,
    /// Range into `KDTree::ids`
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) kind: NodeKind,
}

#[derive(Debug, Clone, Copy)]
pub(crate) enum NodeKind {
    Leaf,
    Internal {
        axis: usize,
        left: usize,
        right: usize,
    },
}

impl<'a, N: Number> KDTree<'a, N> {
    /// Build a tree over the given coordinates with the default leaf size.
    ///
    /// ```
    /// use nearest_neighbors::kdtree::KDTree;
    /// use nearest_neighbors::NearestNeighborIndex;
    ///
    /// let x = [-1, 1];
    /// let y = [-1, 1];
    /// let tree = KDTree::try_new(&x, &y).unwrap();
    ///
    /// let (indices, distances) = tree.knn(-1, -1, 1);
    /// assert_eq!(indices, vec![0]);
    /// assert_eq!(distances, vec![0.]);
    /// ```
    pub fn try_new(x: &'a [N], y: &'a [N]) -> Result<Self> {
        KDTreeBuilder::new(x, y).finish()
    }

    /// The maximum number of points held by one leaf.
    pub fn leaf_size(&self) -> usize {
        self.leaf_size
    }

    /// The number of edges on the longest root-to-leaf path. A single-leaf tree has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The total number of nodes, leaves included.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The number of leaf nodes.
    pub fn num_leaves(&self) -> usize {
        self.nodes
            .iter()
            .filter(|node| matches!(node.kind, NodeKind::Leaf))
            .count()
    }

    /// Access the root node of the KDTree for manual traversal.
    pub fn root(&self) -> Node<'_, N> {
        Node::new(self, self.root)
    }
}
