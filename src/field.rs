// src/field.rs
// The scalar base of every algebra in the tower.
// Only the two IEEE-754 binary precisions qualify.

use approx::RelativeEq;
use num_traits::Float;
use std::fmt::{Debug, Display};

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point precision usable as the real base of a Cayley-Dickson algebra.
///
/// Implemented for `f32` and `f64` only.
pub trait Field:
    Float
    + Default
    + Debug
    + Display
    + RelativeEq<Epsilon = Self>
    + Send
    + Sync
    + 'static
    + sealed::Sealed
{
    /// One half, the exponent used by `sqrt`.
    fn half() -> Self {
        Self::one() / (Self::one() + Self::one())
    }
}

impl Field for f32 {}
impl Field for f64 {}
