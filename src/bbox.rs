//! Axis-aligned bounding boxes used to prune tree traversal.

use crate::error::{NearestNeighborsError, Result};
use crate::r#type::Number;

/// A tight, axis-aligned rectangle in `f64` space.
///
/// `mins[axis] <= maxes[axis]` holds on both axes for every box this crate hands out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    mins: [f64; 2],
    maxes: [f64; 2],
}

impl BoundingBox {
    /// Create a new box from its per-axis minimums and maximums.
    ///
    /// Fails with [`NearestNeighborsError::InvalidBounds`] if `mins[axis] > maxes[axis]` on any
    /// axis, or if either value is NaN.
    pub fn try_new(mins: [f64; 2], maxes: [f64; 2]) -> Result<Self> {
        for axis in 0..2 {
            // Negated so that NaN is rejected as well
            if !(mins[axis] <= maxes[axis]) {
                return Err(NearestNeighborsError::InvalidBounds {
                    axis,
                    min: mins[axis],
                    max: maxes[axis],
                });
            }
        }
        Ok(Self { mins, maxes })
    }

    /// Compute the exact box around the points `ids` refers to.
    ///
    /// Panics if `ids` is empty or no finite extent can be computed from its points.
    pub(crate) fn from_points<N: Number>(x: &[N], y: &[N], ids: &[usize]) -> Self {
        assert!(!ids.is_empty(), "bounding box of an empty point set");

        let mut mins = [f64::INFINITY; 2];
        let mut maxes = [f64::NEG_INFINITY; 2];
        for &i in ids {
            let px = x[i].as_f64();
            let py = y[i].as_f64();
            mins[0] = mins[0].min(px);
            maxes[0] = maxes[0].max(px);
            mins[1] = mins[1].min(py);
            maxes[1] = maxes[1].max(py);
        }

        assert!(
            mins[0] <= maxes[0] && mins[1] <= maxes[1],
            "corrupted bounding box {:?} to {:?}",
            mins,
            maxes
        );
        Self { mins, maxes }
    }

    /// Per-axis minimums, `[min_x, min_y]`.
    pub fn mins(&self) -> [f64; 2] {
        self.mins
    }

    /// Per-axis maximums, `[max_x, max_y]`.
    pub fn maxes(&self) -> [f64; 2] {
        self.maxes
    }

    /// The extent of this box along `axis` (0 for x, 1 for y).
    #[inline]
    pub fn spread(&self, axis: usize) -> f64 {
        self.maxes[axis] - self.mins[axis]
    }

    /// The axis with the larger spread. Exact ties go to the x axis.
    #[inline]
    pub fn widest_axis(&self) -> usize {
        if self.spread(0) >= self.spread(1) {
            0
        } else {
            1
        }
    }

    /// Whether the point lies inside or on the boundary of this box.
    pub fn contains(&self, qx: f64, qy: f64) -> bool {
        qx >= self.mins[0] && qx <= self.maxes[0] && qy >= self.mins[1] && qy <= self.maxes[1]
    }

    /// Euclidean distance from the point to the nearest point of this box.
    ///
    /// This is zero when the point is inside the box and otherwise a lower bound on the distance
    /// from the point to anything the box contains.
    #[inline]
    pub fn distance_to_point(&self, qx: f64, qy: f64) -> f64 {
        let dx = axis_dist(qx, self.mins[0], self.maxes[0]);
        let dy = axis_dist(qy, self.mins[1], self.maxes[1]);
        dx.hypot(dy)
    }
}

/// 1D distance from a value to a range.
#[inline]
fn axis_dist(k: f64, min: f64, max: f64) -> f64 {
    if k < min {
        min - k
    } else if k <= max {
        0.0
    } else {
        k - max
    }
}
