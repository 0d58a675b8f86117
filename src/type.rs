use std::fmt::Debug;

use num_traits::{Num, NumCast, ToPrimitive};

/// A trait for types that can be used as point coordinates.
///
/// Every distance is computed in `f64`, so coordinates are widened before any subtraction. This
/// keeps unsigned coordinates from underflowing and lets integer and floating point inputs share
/// one code path.
///
/// This trait is sealed and cannot be implemented for external types.
pub trait Number:
    private::Sealed + Num + NumCast + ToPrimitive + PartialOrd + Copy + Debug + Send + Sync
{
    /// Widen this coordinate to `f64` for distance computations.
    ///
    /// `to_f64` never fails for the primitive types this trait is implemented for. 64-bit
    /// integers beyond 2^53 lose precision, as with an `as` cast. Should it ever fail, the NaN
    /// it maps to is rejected by point and query validation before it reaches a distance.
    #[inline]
    fn as_f64(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Number for i8 {}
impl Number for u8 {}
impl Number for i16 {}
impl Number for u16 {}
impl Number for i32 {}
impl Number for u32 {}
impl Number for i64 {}
impl Number for u64 {}
impl Number for f32 {}
impl Number for f64 {}

/// Euclidean distance between two points given as raw coordinates.
#[inline]
pub(crate) fn distance<N: Number>(ax: N, ay: N, bx: N, by: N) -> f64 {
    let dx = ax.as_f64() - bx.as_f64();
    let dy = ay.as_f64() - by.as_f64();
    dx.hypot(dy)
}

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}
