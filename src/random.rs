//! Random sampling from the distribution family.
//!
//! Provides seeded RNG construction and direct sampling algorithms for
//! each supported distribution.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

use crate::distributions::{
    Binomial, Distribution, HyperGeometric, NegativeBinomial, Poisson, Uniform,
};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_prob::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws a value uniformly from `[min, max)`.
pub fn sample_uniform<R: Rng>(dist: &Uniform, rng: &mut R) -> f64 {
    rng.random_range(dist.min()..dist.max())
}

/// Draws a binomial count by running `n` Bernoulli trials.
///
/// # Complexity
/// Time: O(n) per draw.
pub fn sample_binomial<R: Rng>(dist: &Binomial, rng: &mut R) -> u64 {
    let mut successes = 0;
    for _ in 0..dist.n() {
        if rng.random::<f64>() < dist.p() {
            successes += 1;
        }
    }
    successes
}

/// Draws a hypergeometric count by sequential draws without replacement.
///
/// Each draw succeeds with probability `remaining successes / remaining
/// population`, updating both as the urn empties.
pub fn sample_hypergeometric<R: Rng>(dist: &HyperGeometric, rng: &mut R) -> u64 {
    let mut remaining_population = dist.population();
    let mut remaining_successes = dist.successes();
    let mut hits = 0;
    for _ in 0..dist.draws() {
        let p_success = remaining_successes as f64 / remaining_population as f64;
        if rng.random::<f64>() < p_success {
            hits += 1;
            remaining_successes -= 1;
        }
        remaining_population -= 1;
    }
    hits
}

/// Draws a negative binomial count: failures observed before the `r`-th
/// success.
///
/// Terminates with probability 1 since the constructor guarantees
/// `p > 0`.
pub fn sample_negative_binomial<R: Rng>(dist: &NegativeBinomial, rng: &mut R) -> u64 {
    let mut failures = 0;
    let mut successes = 0;
    while successes < dist.r() {
        if rng.random::<f64>() < dist.p() {
            successes += 1;
        } else {
            failures += 1;
        }
    }
    failures
}

/// Draws a Poisson count with Knuth's product method.
///
/// Multiplies uniforms until the product drops below exp(−λ); the number
/// of factors is the draw. Expected cost is O(λ) per draw, and exp(−λ)
/// underflows for λ beyond roughly 700, so this suits moderate rates.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.1, Algorithm Q.
pub fn sample_poisson<R: Rng>(dist: &Poisson, rng: &mut R) -> u64 {
    let limit = (-dist.lambda()).exp();
    let mut count = 0;
    let mut product = rng.random::<f64>();
    while product > limit {
        count += 1;
        product *= rng.random::<f64>();
    }
    count
}

/// Draws from any distribution in the family, widening discrete counts
/// to `f64` to match the enum's evaluation surface.
pub fn sample<R: Rng>(dist: &Distribution, rng: &mut R) -> f64 {
    match dist {
        Distribution::Uniform(d) => sample_uniform(d, rng),
        Distribution::Binomial(d) => sample_binomial(d, rng) as f64,
        Distribution::HyperGeometric(d) => sample_hypergeometric(d, rng) as f64,
        Distribution::NegativeBinomial(d) => sample_negative_binomial(d, rng) as f64,
        Distribution::Poisson(d) => sample_poisson(d, rng) as f64,
    }
}
