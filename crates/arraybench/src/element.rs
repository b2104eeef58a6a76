use std::fmt::{Debug, Display};
use std::ops::Add;

use rand::Rng;

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point element type stored in the in-crate buffers.
///
/// Sealed to `f32` and `f64`: the allocator relies on the all-zero bit
/// pattern being a valid value.
pub trait Element:
    sealed::Sealed
    + Copy
    + Default
    + Send
    + Sync
    + Debug
    + Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Uniform draw from `[0, 1)` at this type's own precision.
    fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

macro_rules! impl_element_float {
    ($($t:ty),*) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0.0;

                #[inline(always)]
                fn sample_unit<R: Rng + ?Sized>(rng: &mut R) -> Self {
                    rng.gen::<$t>()
                }
            }
        )*
    };
}

impl_element_float!(f32, f64);
