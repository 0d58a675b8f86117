use log::trace;
use tinyvec::TinyVec;

use crate::error::Result;
use crate::kdtree::index::{KDTree, NodeKind};
use crate::neighbors::{all_by_distance, NeighborBuffer};
use crate::r#trait::NearestNeighborIndex;
use crate::r#type::{distance, Number};
use crate::util::{validate_query, validate_radius};

impl<N: Number> NearestNeighborIndex<N> for KDTree<'_, N> {
    fn num_items(&self) -> usize {
        self.x.len()
    }

    /// Search the tree for the `k` points closest to `(qx, qy)`.
    ///
    /// Children are visited nearest bounding box first, and a far child is skipped once `k`
    /// points are known that are all at least as close as its bounding box.
    fn knn(&self, qx: N, qy: N, k: usize) -> (Vec<usize>, Vec<f64>) {
        if let Err(err) = validate_query(qx, qy) {
            panic!("{}", err);
        }
        if k == 0 {
            return (vec![], vec![]);
        }
        if k >= self.num_items() {
            return all_by_distance(self.x, self.y, qx, qy);
        }

        let mut search = KnnSearch {
            tree: self,
            qx,
            qy,
            fqx: qx.as_f64(),
            fqy: qy.as_f64(),
            buffer: NeighborBuffer::new(k),
            visited: 0,
        };
        search.visit(self.root);
        trace!("knn visited {} of {} nodes", search.visited, self.nodes.len());

        search.buffer.into_results()
    }

    /// Search the tree for points within `r` of `(qx, qy)`.
    ///
    /// Returns indices of found points, in traversal order.
    fn within(&self, qx: N, qy: N, r: f64) -> Result<Vec<usize>> {
        validate_query(qx, qy)?;
        validate_radius(r)?;
        let (fqx, fqy) = (qx.as_f64(), qy.as_f64());

        // Use TinyVec to avoid heap allocations
        let mut stack: TinyVec<[usize; 33]> = TinyVec::new();
        stack.push(self.root);

        let mut result = vec![];
        let mut visited = 0;

        while let Some(node_id) = stack.pop() {
            visited += 1;
            let node = &self.nodes[node_id];

            // nothing in this box can be close enough
            if node.bbox.distance_to_point(fqx, fqy) > r {
                continue;
            }

            match node.kind {
                NodeKind::Leaf => {
                    for &i in &self.ids[node.start..node.end] {
                        if distance(self.x[i], self.y[i], qx, qy) <= r {
                            result.push(i);
                        }
                    }
                }
                NodeKind::Internal { left, right, .. } => {
                    // Note: these are pushed in backwards order to what gets popped
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        trace!("within visited {} of {} nodes", visited, self.nodes.len());

        Ok(result)
    }
}

/// Per-query state of a KNN search.
struct KnnSearch<'t, 'a, N: Number> {
    tree: &'t KDTree<'a, N>,
    qx: N,
    qy: N,
    fqx: f64,
    fqy: f64,
    buffer: NeighborBuffer,
    visited: usize,
}

impl<N: Number> KnnSearch<'_, '_, N> {
    fn visit(&mut self, node_id: usize) {
        self.visited += 1;
        let tree = self.tree;
        let node = &tree.nodes[node_id];

        match node.kind {
            NodeKind::Leaf => {
                for &i in &tree.ids[node.start..node.end] {
                    let dist = distance(tree.x[i], tree.y[i], self.qx, self.qy);
                    self.buffer.push(i, dist);
                }
            }
            NodeKind::Internal { left, right, .. } => {
                let left_dist = tree.nodes[left].bbox.distance_to_point(self.fqx, self.fqy);
                let right_dist = tree.nodes[right].bbox.distance_to_point(self.fqx, self.fqy);

                // Ties go left
                let (near, far, far_dist) = if left_dist <= right_dist {
                    (left, right, right_dist)
                } else {
                    (right, left, left_dist)
                };

                self.visit(near);
                if !self.buffer.is_full() || far_dist < self.buffer.worst_distance() {
                    self.visit(far);
                }
            }
        }
    }
}
