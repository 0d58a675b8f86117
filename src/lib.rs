#![doc = include_str!("../README.md")]

mod bbox;
mod brute_force;
mod error;
pub mod kdtree;
mod neighbors;
mod r#trait;
mod r#type;
mod util;

pub use bbox::BoundingBox;
pub use brute_force::BruteForce;
pub use error::{NearestNeighborsError, Result};
pub use r#trait::NearestNeighborIndex;
pub use r#type::Number;

#[cfg(test)]
pub(crate) mod test;
