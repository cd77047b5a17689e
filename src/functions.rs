// src/functions.rs
// Elementary functions written once against `Value`, valid for every
// algebra in the tower regardless of dimension.
// Out-of-domain inputs are not intercepted: inf and NaN flow through.

use crate::field::Field;
use crate::value::Value;
use num_traits::{Float, One, Zero};
use tracing::trace;

/// Returns Re(x x*), the squared modulus of x.
pub fn norm_sq<A: Value>(x: A) -> A::Field {
    (x * x.conj()).real()
}

/// Returns the absolute value (also called the modulus) of x.
pub fn abs<A: Value>(x: A) -> A::Field {
    norm_sq(x).sqrt()
}

/// Returns an element of the algebra with the real part equal to f.
pub fn lift<A: Value>(f: A::Field) -> A {
    A::from_real(f)
}

/// Returns an infinity for the algebra, with all elements positive infinity.
pub fn inf<A: Value>() -> A {
    A::splat(<A::Field as Float>::infinity())
}

/// Returns the inverse of x.
///
/// Elements with zero norm (zero itself, or a zero divisor from the
/// sedenions on) give non-finite elements.
pub fn inv<A: Value>(x: A) -> A {
    let xc = x.conj();
    let n = (x * xc).real();
    if n.is_zero() {
        trace!(dim = A::DIM, "inverting an element with zero norm");
    }
    xc.scale(<A::Field as One>::one() / n)
}

/// Returns e**x, the base-e exponential of x.
pub fn exp<A: Value>(x: A) -> A {
    let w = x.real();
    let uv = x.imag();
    if uv.is_zero() {
        return lift(w.exp());
    }
    let v = abs(uv);
    let e = w.exp();
    let (s, c) = v.sin_cos();
    lift::<A>(e * c) + uv.scale(e * s / v)
}

/// Returns the natural logarithm of x.
///
/// The imaginary part lies on the principal branch, with angle in [0, pi].
pub fn log<A: Value>(x: A) -> A {
    let w = x.real();
    let uv = x.imag();
    if uv.is_zero() {
        return lift(w.ln());
    }
    let v = abs(uv);
    lift::<A>(abs(x).ln()) + uv.scale(v.atan2(w) / v)
}

/// Returns x**r, the base-x exponential of r.
///
/// At x = 0, for generalized compatibility with `f64::powf`:
///
/// - `pow(0, r)` for Re(r) = 0 returns `lift(1)`, whatever Im(r) is
/// - `pow(0, r)` for Re(r) < 0 returns `lift(inf)` if Im(r) is zero,
///   otherwise [`inf`]
/// - `pow(0, r)` for Re(r) > 0 returns zero
pub fn pow<A: Value>(x: A, r: A) -> A {
    if x.is_zero() {
        let w = r.real();
        if w.is_zero() {
            trace!(dim = A::DIM, "zero base with zero exponent");
            return lift(<A::Field as One>::one());
        }
        if w < <A::Field as Zero>::zero() {
            trace!(dim = A::DIM, "zero base with negative exponent");
            if r.imag().is_zero() {
                return lift(<A::Field as Float>::infinity());
            }
            return inf();
        }
        if w > <A::Field as Zero>::zero() {
            return A::default();
        }
    }
    exp(log(x) * r)
}

/// Returns x**r for a real exponent r.
///
/// At x = 0, for generalized compatibility with `f64::powf`:
///
/// - `pow_float(0, ±0)` returns `lift(1)`
/// - `pow_float(0, r)` for r < 0 returns [`inf`]
/// - `pow_float(0, r)` for r > 0 returns zero
pub fn pow_float<A: Value>(x: A, r: A::Field) -> A {
    if x.is_zero() {
        if r.is_zero() {
            trace!(dim = A::DIM, "zero base with zero exponent");
            return lift(<A::Field as One>::one());
        }
        if r < <A::Field as Zero>::zero() {
            trace!(dim = A::DIM, "zero base with negative exponent");
            return inf();
        }
        if r > <A::Field as Zero>::zero() {
            return A::default();
        }
    }
    exp(log(x).scale(r))
}

/// Returns the square root of x.
pub fn sqrt<A: Value>(x: A) -> A {
    if x.is_zero() {
        return A::default();
    }
    pow_float(x, <A::Field as Field>::half())
}

/// Returns the associator (xy)z - x(yz).
///
/// Zero for every triple in the reals, complexes and quaternions; nonzero
/// in general from the octonions on.
pub fn associator<A: Value>(x: A, y: A, z: A) -> A {
    (x * y) * z - x * (y * z)
}

/// Returns the commutator xy - yx.
pub fn commutator<A: Value>(x: A, y: A) -> A {
    x * y - y * x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::named::{Complex, Octonion, C, H, O};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{E, FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

    #[test]
    fn test_abs_and_norm() {
        let x = H::new_quaternion(1.0, 2.0, 3.0, 4.0);
        assert_eq!(norm_sq(x), 30.0);
        assert_abs_diff_eq!(abs(x), 30f64.sqrt(), epsilon = 1e-12);
        assert_eq!(abs(C::new_complex(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_lift_and_inf() {
        let l: O = lift(2.5);
        assert_eq!(l.elems(), vec![2.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

        let i: Octonion<f32> = inf();
        assert!(i.elems().iter().all(|&e| e == f32::INFINITY));
    }

    #[test]
    fn test_inv() {
        let x = H::new_quaternion(1.0, 2.0, 3.0, 4.0);
        let one: H = lift(1.0);
        assert_abs_diff_eq!(x * inv(x), one, epsilon = 1e-12);
        assert_abs_diff_eq!(inv(x) * x, one, epsilon = 1e-12);

        // Zero norm propagates rather than failing
        let z = inv(H::default());
        assert!(z.elems().iter().all(|e| !e.is_finite()));
    }

    #[test]
    fn test_exp_euler() {
        let x = exp(C::new_complex(0.0, PI));
        assert_abs_diff_eq!(x, C::new_complex(-1.0, 0.0), epsilon = 1e-12);

        let y = exp(H::new_quaternion(0.0, FRAC_PI_2, 0.0, 0.0));
        assert_abs_diff_eq!(y, H::new_quaternion(0.0, 1.0, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_exp_real() {
        assert_abs_diff_eq!(exp(lift::<H>(1.0)), lift::<H>(E), epsilon = 1e-15);
        assert_eq!(exp(H::default()), lift::<H>(1.0));
    }

    #[test]
    fn test_exp_quaternion() {
        let r3 = 3f64.sqrt();
        let s = E * r3.sin() / r3;
        let want = H::new_quaternion(E * r3.cos(), s, s, s);
        assert_abs_diff_eq!(exp(H::new_quaternion(1.0, 1.0, 1.0, 1.0)), want, epsilon = 1e-12);
    }

    #[test]
    fn test_log() {
        let x = log(C::new_complex(1.0, 1.0));
        assert_abs_diff_eq!(x, C::new_complex(SQRT_2.ln(), FRAC_PI_4), epsilon = 1e-12);

        assert_eq!(log(lift::<H>(1.0)), H::default());
        // Negative reals have no imaginary direction to rotate into
        assert!(log(lift::<H>(-1.0)).real().is_nan());
        assert_eq!(log(H::default()).real(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_pow_zero_base() {
        let zero = H::default();
        assert_eq!(pow(zero, H::default()), lift::<H>(1.0));
        assert_eq!(pow(zero, H::new_quaternion(0.0, 3.0, 0.0, 0.0)), lift::<H>(1.0));
        assert_eq!(pow(zero, lift::<H>(-1.0)), lift::<H>(f64::INFINITY));
        assert_eq!(pow(zero, H::new_quaternion(-1.0, 1.0, 0.0, 0.0)), inf::<H>());
        assert_eq!(pow(zero, lift::<H>(2.0)), zero);
        assert_eq!(pow(zero, H::new_quaternion(0.5, 1.0, 0.0, 0.0)), zero);
    }

    #[test]
    fn test_pow() {
        let i = H::new_quaternion(0.0, 1.0, 0.0, 0.0);
        assert_abs_diff_eq!(pow(i, lift::<H>(2.0)), lift::<H>(-1.0), epsilon = 1e-12);
        let x = H::new_quaternion(0.5, -1.0, 2.0, 0.25);
        assert_abs_diff_eq!(pow(x, lift::<H>(1.0)), x, epsilon = 1e-12);
        assert_abs_diff_eq!(pow(x, lift::<H>(3.0)), x * x * x, epsilon = 1e-12);
    }

    #[test]
    fn test_pow_float_zero_base() {
        let zero = O::default();
        assert_eq!(pow_float(zero, 0.0), lift::<O>(1.0));
        assert_eq!(pow_float(zero, -0.0), lift::<O>(1.0));
        assert_eq!(pow_float(zero, -1.0), inf::<O>());
        assert_eq!(pow_float(zero, 1.0), zero);
    }

    #[test]
    fn test_pow_float() {
        let x = C::new_complex(1.0, 1.0);
        assert_abs_diff_eq!(pow_float(x, 2.0), x * x, epsilon = 1e-12);
        assert_abs_diff_eq!(pow_float(x, -1.0), inv(x), epsilon = 1e-12);
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(sqrt(H::default()), H::default());
        assert_eq!(sqrt(Complex::<f32>::default()), Complex::default());
        assert_abs_diff_eq!(sqrt(lift::<H>(4.0)), lift::<H>(2.0), epsilon = 1e-12);

        let i = H::new_quaternion(0.0, 1.0, 0.0, 0.0);
        let r = sqrt(i);
        let h = 0.5f64.sqrt();
        assert_abs_diff_eq!(r, H::new_quaternion(h, h, 0.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(r * r, i, epsilon = 1e-12);
    }

    #[test]
    fn test_associator() {
        let x = H::new_quaternion(1.0, 2.0, 3.0, 4.0);
        let y = H::new_quaternion(-1.0, 0.5, 2.0, 1.0);
        let z = H::new_quaternion(0.0, 1.0, -3.0, 2.0);
        assert!(associator(x, y, z).is_zero());

        let e = |k: usize| {
            let mut c = [0.0; 8];
            c[k] = 1.0;
            O::from_elems(&c).unwrap()
        };
        let a = associator(e(1), e(2), e(4));
        assert_eq!(a.elems(), vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0]);
    }

    #[test]
    fn test_commutator() {
        let a = C::new_complex(1.0, 2.0);
        let b = C::new_complex(-3.0, 0.5);
        assert!(commutator(a, b).is_zero());

        let i = H::new_quaternion(0.0, 1.0, 0.0, 0.0);
        let j = H::new_quaternion(0.0, 0.0, 1.0, 0.0);
        assert_eq!(commutator(i, j), H::new_quaternion(0.0, 0.0, 0.0, 2.0));
    }
}
