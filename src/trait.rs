use geo_traits::CoordTrait;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::Result;
use crate::r#type::Number;

/// A trait for nearest-neighbor and radius queries over a static 2D point set.
///
/// Both [`KDTree`][crate::kdtree::KDTree] and [`BruteForce`][crate::BruteForce] implement this
/// trait with identical result semantics, so one can stand in for the other.
pub trait NearestNeighborIndex<N: Number>: Sized {
    /// The number of points in this index.
    fn num_items(&self) -> usize;

    /// Find the `k` points closest to `(qx, qy)`.
    ///
    /// Returns the indices of the found points together with their Euclidean distances, in
    /// ascending order of distance. The result has `min(k, n)` entries. Among points at equal
    /// distance, the one discovered first comes first.
    ///
    /// # Panics
    ///
    /// Panics if `qx` or `qy` is NaN or infinite.
    fn knn(&self, qx: N, qy: N, k: usize) -> (Vec<usize>, Vec<f64>);

    /// Find every point within Euclidean distance `r` of `(qx, qy)`, inclusive.
    ///
    /// The result is in no particular order. Fails with
    /// [`InvalidArgument`][crate::NearestNeighborsError::InvalidArgument] if `r` is negative or
    /// NaN, or if `qx` or `qy` is not finite.
    fn within(&self, qx: N, qy: N, r: f64) -> Result<Vec<usize>>;

    /// Find the `k` points closest to a coordinate.
    fn knn_coord(&self, coord: &impl CoordTrait<T = N>, k: usize) -> (Vec<usize>, Vec<f64>) {
        self.knn(coord.x(), coord.y(), k)
    }

    /// Find every point within distance `r` of a coordinate.
    fn within_coord(&self, coord: &impl CoordTrait<T = N>, r: f64) -> Result<Vec<usize>> {
        self.within(coord.x(), coord.y(), r)
    }

    /// Run [`knn`][NearestNeighborIndex::knn] for many query points in parallel.
    ///
    /// Results are in the order of `queries`.
    #[cfg(feature = "rayon")]
    fn knn_batch(&self, queries: &[(N, N)], k: usize) -> Vec<(Vec<usize>, Vec<f64>)>
    where
        Self: Sync,
    {
        queries
            .par_iter()
            .map(|&(qx, qy)| self.knn(qx, qy, k))
            .collect()
    }

    /// Run [`within`][NearestNeighborIndex::within] for many query points in parallel.
    ///
    /// Results are in the order of `queries`.
    #[cfg(feature = "rayon")]
    fn within_batch(&self, queries: &[(N, N)], r: f64) -> Result<Vec<Vec<usize>>>
    where
        Self: Sync,
    {
        crate::util::validate_radius(r)?;
        queries
            .par_iter()
            .map(|&(qx, qy)| self.within(qx, qy, r))
            .collect()
    }
}
