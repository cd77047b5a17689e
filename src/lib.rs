// src/lib.rs
//! Cayley-Dickson construction of the complex numbers, quaternions,
//! octonions, sedenions and every higher 2^n-ion algebra over `f32` or
//! `f64`, with elementary functions that work at any dimension.
//!
//! ```
//! use cayley_dickson::{abs, exp, lift, Value, H};
//!
//! let q = H::new_quaternion(1.0, 2.0, 3.0, 4.0);
//! assert_eq!((q * q.conj()).real(), 30.0);
//! assert_eq!(abs(exp(lift::<H>(0.0))), 1.0);
//! ```

pub mod construction;
pub mod error;
pub mod field;
pub mod functions;
pub mod named;
pub mod real;
pub mod sample;
pub mod value;

pub use construction::Construction;
pub use error::DimensionError;
pub use field::Field;
pub use functions::{
    abs, associator, commutator, exp, inf, inv, lift, log, norm_sq, pow, pow_float, sqrt,
};
pub use named::{Complex, Octonion, Quaternion, Sedenion, C, H, O, S};
pub use real::Real;
pub use sample::{sample_normal, sample_uniform, sample_unit};
pub use value::Value;
