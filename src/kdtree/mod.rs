//! A static, balanced K-D Tree for exact nearest-neighbor and radius queries.
//!
//! Construction splits each node along its wider axis at a position derived only from the point
//! count, so every tree over `n` points has exactly `ceil(n / leaf_size)` leaves and depth
//! `ceil(log2(ceil(n / leaf_size)))`.

#![warn(missing_docs)]

mod builder;
mod index;
mod r#trait;
mod traversal;
mod util;

pub use builder::{KDTreeBuilder, DEFAULT_LEAF_SIZE};
pub use index::KDTree;
pub use traversal::Node;

#[cfg(test)]
mod test;
