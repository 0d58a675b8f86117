//! The bounded, distance-sorted result buffer shared by every KNN implementation.

use crate::r#type::{distance, Number};

/// Index stored in slots that have not been filled by a real point yet.
const SENTINEL_INDEX: usize = usize::MAX;

/// A fixed-capacity buffer of `(index, distance)` pairs kept in ascending distance order.
///
/// The buffer starts out as `k` sentinel slots of infinite distance. Each real candidate is
/// placed after every entry with a distance less than or equal to its own, so among equal
/// distances the first one pushed stays first. Once all `k` slots hold real entries the buffer
/// only accepts candidates that are strictly closer than its current worst entry.
#[derive(Debug, Clone)]
pub(crate) struct NeighborBuffer {
    indices: Vec<usize>,
    distances: Vec<f64>,
    /// Number of leading slots that hold real entries
    filled: usize,
}

impl NeighborBuffer {
    pub(crate) fn new(k: usize) -> Self {
        Self {
            indices: vec![SENTINEL_INDEX; k],
            distances: vec![f64::INFINITY; k],
            filled: 0,
        }
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.distances.len()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.filled == self.capacity()
    }

    /// The distance a candidate has to beat to enter a full buffer.
    ///
    /// Infinite while there are still free slots.
    #[inline]
    pub(crate) fn worst_distance(&self) -> f64 {
        if self.is_full() {
            self.distances.last().copied().unwrap_or(f64::NEG_INFINITY)
        } else {
            f64::INFINITY
        }
    }

    /// Offer a candidate. Returns `true` if it was kept.
    pub(crate) fn push(&mut self, index: usize, distance: f64) -> bool {
        let k = self.capacity();
        // Only search the real entries so a candidate at infinite distance still lands ahead of
        // the sentinels.
        let pos = self.distances[..self.filled].partition_point(|&d| d <= distance);
        if pos >= k {
            return false;
        }

        self.indices.insert(pos, index);
        self.distances.insert(pos, distance);
        self.indices.truncate(k);
        self.distances.truncate(k);
        self.filled = (self.filled + 1).min(k);
        true
    }

    /// Consume the buffer, dropping any sentinel slots that were never filled.
    pub(crate) fn into_results(mut self) -> (Vec<usize>, Vec<f64>) {
        self.indices.truncate(self.filled);
        self.distances.truncate(self.filled);
        debug_assert!(self.indices.iter().all(|&i| i != SENTINEL_INDEX));
        (self.indices, self.distances)
    }
}

/// Every point with its distance to `(qx, qy)`, sorted ascending.
///
/// The sort is stable, so equal distances stay in index order. This is the same order a
/// [`NeighborBuffer`] produces when points are pushed in index order.
pub(crate) fn all_by_distance<N: Number>(
    x: &[N],
    y: &[N],
    qx: N,
    qy: N,
) -> (Vec<usize>, Vec<f64>) {
    let mut pairs: Vec<(usize, f64)> = x
        .iter()
        .zip(y)
        .enumerate()
        .map(|(i, (&px, &py))| (i, distance(px, py, qx, qy)))
        .collect();
    pairs.sort_by(|a, b| a.1.total_cmp(&b.1));
    pairs.into_iter().unzip()
}
