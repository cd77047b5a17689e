// src/sample.rs
// Random algebra elements, drawn coordinate by coordinate in flat order.

use crate::functions::abs;
use crate::value::Value;
use num_traits::{Float, Zero};
use rand::prelude::*;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand_distr::{Distribution, StandardNormal};

/// Sample every coordinate from the standard normal distribution.
pub fn sample_normal<A, R>(rng: &mut R) -> A
where
    A: Value,
    R: Rng + ?Sized,
    StandardNormal: Distribution<A::Field>,
{
    A::from_fn(&mut || StandardNormal.sample(rng))
}

/// Sample every coordinate uniformly from `[low, high)`.
///
/// # Panics
///
/// Panics if `low >= high`, as [`Uniform::new`] does.
pub fn sample_uniform<A, R>(rng: &mut R, low: A::Field, high: A::Field) -> A
where
    A: Value,
    A::Field: SampleUniform,
    R: Rng + ?Sized,
{
    let dist = Uniform::new(low, high);
    A::from_fn(&mut || dist.sample(rng))
}

/// Sample a unit-modulus element with a uniformly distributed direction.
///
/// Normal coordinates are isotropic, so scaling a normal sample to unit
/// length gives a uniform point on the 2^n-sphere.
pub fn sample_unit<A, R>(rng: &mut R) -> A
where
    A: Value,
    R: Rng + ?Sized,
    StandardNormal: Distribution<A::Field>,
{
    loop {
        let x: A = sample_normal(rng);
        let n = abs(x);
        // A zero draw has no direction; try again.
        if n > <A::Field as Zero>::zero() {
            return x.scale(n.recip());
        }
    }
}
