//! A linear scan over every point, used as the reference answer for the KD-tree.

use crate::error::Result;
use crate::neighbors::{all_by_distance, NeighborBuffer};
use crate::r#trait::NearestNeighborIndex;
use crate::r#type::{distance, Number};
use crate::util::{validate_points, validate_query, validate_radius};

/// An index that answers every query by checking every point.
///
/// Queries cost `O(n)`. Results follow the exact same ordering rules as
/// [`KDTree`][crate::kdtree::KDTree], with points discovered in index order.
///
/// ```
/// use nearest_neighbors::{BruteForce, NearestNeighborIndex};
///
/// let x = [0., 3., 1.];
/// let y = [0., 4., 1.];
/// let index = BruteForce::try_new(&x, &y).unwrap();
///
/// let (indices, distances) = index.knn(0., 0., 2);
/// assert_eq!(indices, vec![0, 2]);
/// assert!((distances[1] - 2f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BruteForce<'a, N: Number> {
    x: &'a [N],
    y: &'a [N],
}

impl<'a, N: Number> BruteForce<'a, N> {
    /// Wrap a point set.
    ///
    /// Validation matches [`KDTree::try_new`][crate::kdtree::KDTree::try_new].
    pub fn try_new(x: &'a [N], y: &'a [N]) -> Result<Self> {
        validate_points(x, y)?;
        Ok(Self { x, y })
    }
}

impl<N: Number> NearestNeighborIndex<N> for BruteForce<'_, N> {
    fn num_items(&self) -> usize {
        self.x.len()
    }

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

        let mut buffer = NeighborBuffer::new(k);
        for (i, (&px, &py)) in self.x.iter().zip(self.y).enumerate() {
            buffer.push(i, distance(px, py, qx, qy));
        }
        buffer.into_results()
    }

    fn within(&self, qx: N, qy: N, r: f64) -> Result<Vec<usize>> {
        validate_query(qx, qy)?;
        validate_radius(r)?;
        Ok(self
            .x
            .iter()
            .zip(self.y)
            .enumerate()
            .filter(|(_, (px, py))| distance(**px, **py, qx, qy) <= r)
            .map(|(i, _)| i)
            .collect())
    }
}
