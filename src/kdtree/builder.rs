use log::debug;

use crate::bbox::BoundingBox;
use crate::error::{NearestNeighborsError, Result};
use crate::kdtree::index::{KDTree, NodeData, NodeKind};
use crate::kdtree::util::find_split;
use crate::r#type::Number;
use crate::util::validate_points;

/// The default leaf size used by [`KDTreeBuilder::new`]
pub const DEFAULT_LEAF_SIZE: usize = 10;

/// A builder to create a [`KDTree`].
///
/// ```
/// use nearest_neighbors::kdtree::KDTreeBuilder;
/// use nearest_neighbors::NearestNeighborIndex;
///
/// let x = [0., 1., 2., 3.];
/// let y = [0., 1., 0., 1.];
/// let tree = KDTreeBuilder::new_with_leaf_size(&x, &y, 2).finish().unwrap();
///
/// let (indices, _) = tree.knn(2.9, 0.9, 1);
/// assert_eq!(indices, vec![3]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KDTreeBuilder<'a, N: Number> {
    x: &'a [N],
    y: &'a [N],
    leaf_size: usize,
}

impl<'a, N: Number> KDTreeBuilder<'a, N> {
    /// Create a new builder over the given coordinates with the default leaf size.
    pub fn new(x: &'a [N], y: &'a [N]) -> Self {
        Self::new_with_leaf_size(x, y, DEFAULT_LEAF_SIZE)
    }

    /// Create a new builder over the given coordinates with the provided leaf size.
    pub fn new_with_leaf_size(x: &'a [N], y: &'a [N], leaf_size: usize) -> Self {
        Self { x, y, leaf_size }
    }

    /// Consume this builder, partitioning the points and generating a KDTree ready for queries.
    ///
    /// Fails with [`NearestNeighborsError::EmptyInput`] if either coordinate slice is empty, with
    /// [`NearestNeighborsError::LengthMismatch`] if their lengths differ, and with
    /// [`NearestNeighborsError::InvalidArgument`] for a zero leaf size or a non-finite coordinate.
    pub fn finish(self) -> Result<KDTree<'a, N>> {
        if self.leaf_size == 0 {
            return Err(NearestNeighborsError::InvalidArgument(
                "Leaf size must be at least 1".to_string(),
            ));
        }
        validate_points(self.x, self.y)?;

        let num_items = self.x.len();
        let mut ids: Vec<usize> = (0..num_items).collect();
        // A complete binary tree over ceil(n / leaf_size) leaves
        let mut nodes = Vec::with_capacity(2 * num_items.div_ceil(self.leaf_size));

        let (root, depth) = build(self.x, self.y, &mut ids, 0, self.leaf_size, &mut nodes);
        assert_eq!(
            nodes.len(),
            2 * num_items.div_ceil(self.leaf_size) - 1,
            "KD-tree is not a complete binary tree over full leaves"
        );

        debug!(
            "Built KD-tree over {} points: {} nodes, depth {}, leaf size {}",
            num_items,
            nodes.len(),
            depth,
            self.leaf_size
        );

        Ok(KDTree {
            x: self.x,
            y: self.y,
            ids,
            nodes,
            root,
            leaf_size: self.leaf_size,
            depth,
        })
    }
}

/// Recursively partition `ids`, which starts at `offset` in the full index buffer.
///
/// Nodes are appended to `nodes` children first. Returns the id of the node covering `ids` and
/// the height of its subtree.
fn build<N: Number>(
    x: &[N],
    y: &[N],
    ids: &mut [usize],
    offset: usize,
    leaf_size: usize,
    nodes: &mut Vec<NodeData>,
) -> (usize, usize) {
    let num_points = ids.len();
    let bbox = BoundingBox::from_points(x, y, ids);
    let start = offset;
    let end = offset + num_points;

    if num_points <= leaf_size {
        assert!(num_points > 0, "KD-tree leaf without points");
        nodes.push(NodeData {
            bbox,
            start,
            end,
            kind: NodeKind::Leaf,
        });
        return (nodes.len() - 1, 0);
    }

    let axis = bbox.widest_axis();
    let split = find_split(num_points, leaf_size);
    assert!(
        split > 0 && split < num_points,
        "split {} leaves an empty child of a {} point node",
        split,
        num_points
    );

    // Order by coordinate on the split axis. Equal coordinates are ordered by original index, so
    // the lower index goes left.
    let coord = |i: usize| {
        if axis == 0 {
            x[i].as_f64()
        } else {
            y[i].as_f64()
        }
    };
    ids.select_nth_unstable_by(split, |&a, &b| coord(a).total_cmp(&coord(b)).then(a.cmp(&b)));

    let (left_ids, right_ids) = ids.split_at_mut(split);
    let (left, left_height) = build(x, y, left_ids, start, leaf_size, nodes);
    let (right, right_height) = build(x, y, right_ids, start + split, leaf_size, nodes);

    nodes.push(NodeData {
        bbox,
        start,
        end,
        kind: NodeKind::Internal { axis, left, right },
    });
    (nodes.len() - 1, 1 + left_height.max(right_height))
}
