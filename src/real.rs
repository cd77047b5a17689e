// src/real.rs
// The 1-dimensional leaf of the Cayley-Dickson tower.
// Reals are self-conjugate and have no imaginary part.

use crate::field::Field;
use crate::value::Value;
use approx::{AbsDiffEq, RelativeEq};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A real algebra value.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Real<F>(pub F);

impl<F: Field> Value for Real<F> {
    type Field = F;

    const DIM: usize = 1;

    #[inline(always)]
    fn real(&self) -> F {
        self.0
    }

    #[inline(always)]
    fn imag(&self) -> Self {
        Real(F::zero())
    }

    #[inline(always)]
    fn scale(&self, f: F) -> Self {
        Real(self.0 * f)
    }

    #[inline(always)]
    fn conj(&self) -> Self {
        *self
    }

    fn from_fn<G: FnMut() -> F>(f: &mut G) -> Self {
        Real(f())
    }

    fn extend_elems(&self, out: &mut Vec<F>) {
        out.push(self.0);
    }
}

impl<F: Field> From<F> for Real<F> {
    fn from(f: F) -> Self {
        Real(f)
    }
}

// --- ARITHMETIC ---

impl<F: Field> Neg for Real<F> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Real(-self.0)
    }
}

impl<F: Field> Add for Real<F> {
    type Output = Self;
    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Real(self.0 + other.0)
    }
}

impl<F: Field> Sub for Real<F> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Real(self.0 - other.0)
    }
}

impl<F: Field> Mul for Real<F> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, other: Self) -> Self {
        Real(self.0 * other.0)
    }
}

impl<F: Field> fmt::Display for Real<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// --- APPROXIMATE COMPARISON ---

impl<F: Field> AbsDiffEq for Real<F> {
    type Epsilon = F;

    fn default_epsilon() -> F {
        F::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: F) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<F: Field> RelativeEq for Real<F> {
    fn default_max_relative() -> F {
        F::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: F, max_relative: F) -> bool {
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}
