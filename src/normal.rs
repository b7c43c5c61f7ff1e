//! Normal-model inference.
//!
//! A normal approximation of a sampling distribution, specified either
//! directly by its moments or fitted from a raw sample, with z-score,
//! left-tail area, and one-sided hypothesis comparison helpers.
//!
//! This is deliberately a separate abstraction from
//! [`Distribution`](crate::distributions::Distribution): the family there
//! measures a single random variable, while [`NormalModel`] standardizes
//! against the **standard error** `sd/√n` and answers questions about a
//! sample mean.
//!
//! # Examples
//!
//! ```
//! use u_prob::normal::{NormalModel, Tail};
//!
//! let m = NormalModel::from_moments(50.0, 10.0, 250.0).unwrap();
//! let p = m.hyp_test(51.0, Tail::Greater);
//! assert!(p > 0.0 && p < 0.5);
//! ```

use crate::distributions::DistributionError;
use crate::special;
use crate::stats;

/// Direction of a one-sided hypothesis comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tail {
    /// `P(X ≤ x)` — the left tail.
    Less,
    /// `P(X > x)` — the right tail.
    Greater,
}

/// Normal approximation of a sampling distribution.
///
/// Immutable after construction. Either moment-specified
/// ([`NormalModel::from_moments`]) or fitted from observations
/// ([`NormalModel::from_sample`]); both modes standardize against the
/// standard error `sample_sd = sd/√n`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalModel {
    mean: f64,
    sd: f64,
    n: f64,
    sample_sd: f64,
}

impl NormalModel {
    /// Creates a model from known moments.
    ///
    /// # Errors
    /// Returns `Err` if any input is not finite, `sd ≤ 0`, or `n < 1`.
    /// A zero `sd` (or `n`) would zero the standard error and make every
    /// standardized value undefined, so it is rejected up front.
    pub fn from_moments(mean: f64, sd: f64, n: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() || !sd.is_finite() || !n.is_finite() {
            return Err(DistributionError::InvalidParameters(format!(
                "NormalModel requires finite moments, got mean={mean}, sd={sd}, n={n}"
            )));
        }
        if sd <= 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "NormalModel requires sd > 0, got sd={sd}"
            )));
        }
        if n < 1.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "NormalModel requires n ≥ 1, got n={n}"
            )));
        }
        Ok(Self {
            mean,
            sd,
            n,
            sample_sd: sd / n.sqrt(),
        })
    }

    /// The standard model: mean 0, sd 1, n 1.
    pub fn standard() -> Self {
        Self {
            mean: 0.0,
            sd: 1.0,
            n: 1.0,
            sample_sd: 1.0,
        }
    }

    /// Fits a model from raw observations.
    ///
    /// Computes the sample mean (Kahan summation) and the **unbiased**
    /// sample variance (Welford, `n − 1` denominator), then
    /// `sd = √variance` and `sample_sd = sd/√n`.
    ///
    /// # Errors
    /// Returns `Err` if fewer than two observations are given (the
    /// unbiased variance divides by `n − 1`), any observation is not
    /// finite, or all observations are equal (`sd == 0`).
    pub fn from_sample(values: &[f64]) -> Result<Self, DistributionError> {
        let n = values.len();
        if n < 2 {
            return Err(DistributionError::InvalidParameters(format!(
                "NormalModel requires at least 2 observations, got {n}"
            )));
        }
        let mean = stats::mean(values).ok_or_else(|| {
            DistributionError::InvalidParameters(
                "NormalModel observations must be finite".into(),
            )
        })?;
        let variance = stats::variance(values).ok_or_else(|| {
            DistributionError::InvalidParameters(
                "NormalModel observations must be finite".into(),
            )
        })?;
        let sd = variance.sqrt();
        if sd <= 0.0 {
            return Err(DistributionError::InvalidParameters(
                "NormalModel observations are all equal (sd = 0)".into(),
            ));
        }
        let nf = n as f64;
        Ok(Self {
            mean,
            sd,
            n: nf,
            sample_sd: sd / nf.sqrt(),
        })
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn sd(&self) -> f64 {
        self.sd
    }

    pub fn n(&self) -> f64 {
        self.n
    }

    /// Standard error of the mean: `sd/√n`.
    pub fn sample_sd(&self) -> f64 {
        self.sample_sd
    }

    /// Standard normal **density** at the standardized value
    /// `(x − mean)/sample_sd`.
    ///
    /// The name is historical: despite saying "score", this returns
    /// φ(z), not z itself. It is what bell-curve plots consume for their
    /// y-values.
    pub fn z_score(&self, x: f64) -> f64 {
        special::standard_normal_pdf((x - self.mean) / self.sample_sd)
    }

    /// Left-tail area `P(X ≤ x)` under the model: Φ((x − mean)/sample_sd).
    pub fn l_area(&self, x: f64) -> f64 {
        special::standard_normal_cdf((x - self.mean) / self.sample_sd)
    }

    /// One-sided hypothesis comparison at `x`.
    ///
    /// [`Tail::Less`] returns `l_area(x)`; [`Tail::Greater`] returns its
    /// complement. The two always sum to 1.
    pub fn hyp_test(&self, x: f64, tail: Tail) -> f64 {
        match tail {
            Tail::Less => self.l_area(x),
            Tail::Greater => 1.0 - self.l_area(x),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn tails_always_sum_to_one(
            mean in -1e3_f64..1e3,
            sd in 0.1_f64..1e3,
            n in 1.0_f64..1e4,
            x in -1e4_f64..1e4,
        ) {
            let m = NormalModel::from_moments(mean, sd, n).unwrap();
            let sum = m.hyp_test(x, Tail::Less) + m.hyp_test(x, Tail::Greater);
            prop_assert!((sum - 1.0).abs() < 1e-12);
        }

        #[test]
        fn l_area_in_01(
            mean in -1e3_f64..1e3,
            sd in 0.1_f64..1e3,
            x in -1e4_f64..1e4,
        ) {
            let m = NormalModel::from_moments(mean, sd, 25.0).unwrap();
            let a = m.l_area(x);
            prop_assert!((0.0..=1.0).contains(&a));
        }

        #[test]
        fn from_sample_mean_within_bounds(
            data in proptest::collection::vec(-1e5_f64..1e5, 2..=50),
        ) {
            // Degenerate all-equal samples are rejected; skip them.
            if let Ok(m) = NormalModel::from_sample(&data) {
                let lo = data.iter().cloned().fold(f64::INFINITY, f64::min);
                let hi = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                prop_assert!(m.mean() >= lo - 1e-9 && m.mean() <= hi + 1e-9);
                prop_assert!(m.sd() > 0.0);
            }
        }
    }
}
