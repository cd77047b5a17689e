// src/named.rs
// Complex numbers, quaternions, octonions and sedenions as nested constructions.
// Constructor arguments are given in flat element order.

use crate::construction::Construction;
use crate::field::Field;
use crate::real::Real;

/// A complex algebra value.
pub type Complex<F> = Construction<Real<F>>;

/// A quaternion algebra value.
pub type Quaternion<F> = Construction<Complex<F>>;

/// An octonion algebra value.
pub type Octonion<F> = Construction<Quaternion<F>>;

/// A sedenion algebra value.
pub type Sedenion<F> = Construction<Octonion<F>>;

/// An f64-based complex number.
pub type C = Complex<f64>;
/// An f64-based quaternion.
pub type H = Quaternion<f64>;
/// An f64-based octonion.
pub type O = Octonion<f64>;
/// An f64-based sedenion.
pub type S = Sedenion<f64>;

impl<F: Field> Complex<F> {
    /// Returns a + bi.
    pub fn new_complex(a: F, b: F) -> Self {
        Construction::new(Real(a), Real(b))
    }
}

impl<F: Field> Quaternion<F> {
    /// Returns a + bi + cj + dk.
    pub fn new_quaternion(a: F, b: F, c: F, d: F) -> Self {
        Construction::new(Complex::new_complex(a, b), Complex::new_complex(c, d))
    }
}

impl<F: Field> Octonion<F> {
    #[allow(clippy::too_many_arguments)]
    pub fn new_octonion(
        a: F,
        b: F,
        c: F,
        d: F,
        e: F,
        f: F,
        g: F,
        h: F,
    ) -> Self {
        Construction::new(
            Quaternion::new_quaternion(a, b, c, d),
            Quaternion::new_quaternion(e, f, g, h),
        )
    }
}

impl<F: Field> Sedenion<F> {
    #[allow(clippy::too_many_arguments)]
    pub fn new_sedenion(
        a: F,
        b: F,
        c: F,
        d: F,
        e: F,
        f: F,
        g: F,
        h: F,
        i: F,
        j: F,
        k: F,
        l: F,
        m: F,
        n: F,
        o: F,
        p: F,
    ) -> Self {
        Construction::new(
            Octonion::new_octonion(a, b, c, d, e, f, g, h),
            Octonion::new_octonion(i, j, k, l, m, n, o, p),
        )
    }
}
