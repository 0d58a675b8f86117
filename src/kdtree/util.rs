//! Utilities for building KD-trees.

/// Number of points that go to the left child when splitting a node of `num_points` points.
///
/// The split is chosen so that the finished tree is a complete binary tree over
/// `ceil(num_points / leaf_size)` leaves: one subtree always holds an exact power-of-two number of
/// full leaves and the left subtree is never smaller than the right one. Tree depth is therefore
/// `ceil(log2(num_leaves))`, and it can be derived from the point count alone.
///
/// Only meaningful for `num_points > leaf_size`.
pub(crate) fn find_split(num_points: usize, leaf_size: usize) -> usize {
    debug_assert!(leaf_size > 0);
    debug_assert!(num_points > leaf_size);

    // A partially filled leaf still counts as a leaf
    let num_leaves = num_points.div_ceil(leaf_size);

    // Largest power of two not above num_leaves, and how many leaves go past it
    let k = num_leaves.ilog2();
    let full = 1usize << k;
    let rest = num_leaves - full;

    if num_points <= 2 * leaf_size {
        // Less than two full leaves: fill the left one
        leaf_size
    } else if rest > full / 2 {
        // The bottom row reaches into the right subtree, so the left one is complete
        full * leaf_size
    } else if rest == 0 {
        // Perfectly balanced
        (full / 2) * leaf_size
    } else {
        // The bottom row stays in the left subtree, so the right one is complete
        num_points - (full / 2) * leaf_size
    }
}
