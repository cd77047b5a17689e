// src/construction.rs
// Implements the Cayley-Dickson doubling: an algebra of dimension 2^(n+1)
// is a pair of algebras of dimension 2^n.
//
// (a, b)*    = (a*, -b)
// (a, b)(c, d) = (ac - d*b, da + bc*)

use crate::value::Value;
use approx::{AbsDiffEq, RelativeEq};
use itertools::Itertools;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A Cayley-Dickson algebra construction over `A`.
///
/// `low` holds the real-like half and `high` the imaginary-like half.
/// Flat element order is the elements of `low` followed by those of `high`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Construction<A> {
    pub low: A,
    pub high: A,
}

impl<A: Value> Construction<A> {
    /// Pairs two values of dimension 2^n into one of dimension 2^(n+1).
    #[inline(always)]
    pub fn new(low: A, high: A) -> Self {
        Construction { low, high }
    }
}

impl<A: Value> Value for Construction<A> {
    type Field = A::Field;

    const DIM: usize = 2 * A::DIM;

    #[inline(always)]
    fn real(&self) -> A::Field {
        self.low.real()
    }

    // Only the leading scalar of the low half is real; the high half is
    // kept whole.
    #[inline(always)]
    fn imag(&self) -> Self {
        Construction::new(self.low.imag(), self.high)
    }

    #[inline(always)]
    fn scale(&self, f: A::Field) -> Self {
        Construction::new(self.low.scale(f), self.high.scale(f))
    }

    #[inline(always)]
    fn conj(&self) -> Self {
        Construction::new(self.low.conj(), -self.high)
    }

    fn from_fn<G: FnMut() -> A::Field>(f: &mut G) -> Self {
        let low = A::from_fn(f);
        let high = A::from_fn(f);
        Construction::new(low, high)
    }

    fn extend_elems(&self, out: &mut Vec<A::Field>) {
        self.low.extend_elems(out);
        self.high.extend_elems(out);
    }
}

// --- ARITHMETIC ---

impl<A: Value> Neg for Construction<A> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Construction::new(-self.low, -self.high)
    }
}

impl<A: Value> Add for Construction<A> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Construction::new(self.low + other.low, self.high + other.high)
    }
}

impl<A: Value> Sub for Construction<A> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        self + (-other)
    }
}

// Operand order in each half-product matters once A stops commuting.
impl<A: Value> Mul for Construction<A> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        let (a, b) = (self.low, self.high);
        let (c, d) = (other.low, other.high);

        // 1. ac - d* b
        let first = a * c + -(d.conj() * b);
        // 2. da + b c*
        let second = d * a + b * c.conj();

        Construction::new(first, second)
    }
}

impl<A: Value> fmt::Display for Construction<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.elems().iter().format(", "))
    }
}

// --- APPROXIMATE COMPARISON ---

impl<A> AbsDiffEq for Construction<A>
where
    A: Value + AbsDiffEq<Epsilon = <A as Value>::Field>,
{
    type Epsilon = <A as Value>::Field;

    fn default_epsilon() -> Self::Epsilon {
        A::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.low.abs_diff_eq(&other.low, epsilon) && self.high.abs_diff_eq(&other.high, epsilon)
    }
}

impl<A> RelativeEq for Construction<A>
where
    A: Value + RelativeEq<Epsilon = <A as Value>::Field>,
{
    fn default_max_relative() -> Self::Epsilon {
        A::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.low.relative_eq(&other.low, epsilon, max_relative)
            && self.high.relative_eq(&other.high, epsilon, max_relative)
    }
}
