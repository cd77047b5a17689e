// src/value.rs
// The operation set shared by every algebra in the Cayley-Dickson tower.
// The generic function layer is written against this trait alone.

use crate::error::DimensionError;
use crate::field::Field;
use num_traits::Zero;
use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A Cayley-Dickson algebra value.
///
/// Implemented by [`Real`](crate::Real) for dimension 1 and, inductively,
/// by [`Construction<A>`](crate::Construction) whenever `A: Value`.
///
/// Values are immutable: every operation returns a new value. Negation,
/// addition and multiplication come from the `std::ops` supertraits; `Mul`
/// is the Cayley-Dickson product, which is not commutative from the
/// quaternions on and not associative from the octonions on.
pub trait Value:
    Copy
    + PartialEq
    + Default
    + Debug
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
{
    /// The real field the algebra is built over.
    type Field: Field;

    /// Number of field elements in a value (2^n for an n-fold construction).
    const DIM: usize;

    /// Returns the real part of the value.
    fn real(&self) -> Self::Field;

    /// Returns the imaginary vector part of the value.
    fn imag(&self) -> Self;

    /// Returns the value element-wise scaled by `f`.
    fn scale(&self, f: Self::Field) -> Self;

    /// Returns the Cayley-Dickson conjugate of the value.
    fn conj(&self) -> Self;

    /// Builds a value by drawing its field elements from `f` in flat order.
    fn from_fn<G: FnMut() -> Self::Field>(f: &mut G) -> Self;

    /// Appends the field elements of the value to `out` in flat order.
    fn extend_elems(&self, out: &mut Vec<Self::Field>);

    /// Returns the field elements of the value.
    ///
    /// The real part comes first. For a construction the elements of the
    /// low half precede those of the high half.
    fn elems(&self) -> Vec<Self::Field> {
        let mut out = Vec::with_capacity(Self::DIM);
        self.extend_elems(&mut out);
        out
    }

    /// Builds a value from its flat field elements, the inverse of [`Value::elems`].
    fn from_elems(elems: &[Self::Field]) -> Result<Self, DimensionError> {
        if elems.len() != Self::DIM {
            return Err(DimensionError {
                expected: Self::DIM,
                found: elems.len(),
            });
        }
        let mut it = elems.iter().copied();
        Ok(Self::from_fn(&mut || it.next().unwrap_or_else(<Self::Field as Zero>::zero)))
    }

    /// Returns the value with real part `f` and every other element zero.
    fn from_real(f: Self::Field) -> Self {
        let mut first = Some(f);
        Self::from_fn(&mut || first.take().unwrap_or_else(<Self::Field as Zero>::zero))
    }

    /// Returns the value with every element equal to `f`.
    fn splat(f: Self::Field) -> Self {
        Self::from_fn(&mut || f)
    }

    /// Reports whether the value is the additive identity.
    fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}
