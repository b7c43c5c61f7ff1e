//! Probability distributions.
//!
//! Domain-agnostic probability distribution types with analytical
//! moments (mean, variance) and PDF/CDF evaluation.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | [`Uniform`] | min, max | (a+b)/2 | (b−a)²/12 |
//! | [`Binomial`] | n, p | n·p | n·p·(1−p) |
//! | [`HyperGeometric`] | N, M, n | n·M/N | via Binomial(n, M/N) |
//! | [`NegativeBinomial`] | r, p | r(1−p)/p | r(1−p)/p² |
//! | [`Poisson`] | λ | λ | λ |
//!
//! The discrete types measure probability at integer points and share the
//! summation-based [`discrete_cdf`]; the continuous [`Uniform`] is part of
//! the same family for API symmetry and carries a closed-form CDF.
//!
//! The whole family is also available as the closed [`Distribution`] enum,
//! which dispatches `mean`/`variance`/`std_dev`/`pdf`/`cdf` over any
//! variant behind a single `f64` surface.
//!
//! # Design Notes
//!
//! This module is **domain-agnostic**. There is no concept of "trial",
//! "defect", or any consumer domain. Parameters are plain `f64`/`u64`
//! values.

use crate::special;

/// Error type for invalid distribution parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum DistributionError {
    /// Parameters violate distribution constraints.
    InvalidParameters(String),
}

impl std::fmt::Display for DistributionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionError::InvalidParameters(msg) => {
                write!(f, "invalid distribution parameters: {msg}")
            }
        }
    }
}

impl std::error::Error for DistributionError {}

// ============================================================================
// Shared summation CDF
// ============================================================================

/// Default cumulative mass for discrete distributions: Σ pmf(i) for `i ∈ 0..k`.
///
/// The upper bound is **exclusive**, so this is `P(X < k)`, not the
/// conventional `P(X ≤ k)`. The continuous [`Uniform`] overrides with a
/// closed-form `P(X ≤ x)`; callers mixing the two conventions should check
/// which variant they hold. Cost is O(k); distributions with bounded
/// support clamp `k` before summing.
///
/// # Examples
/// ```
/// use u_prob::distributions::{discrete_cdf, Binomial};
/// let b = Binomial::new(4, 0.5).unwrap();
/// // P(X < 2) = pmf(0) + pmf(1)
/// let lhs = discrete_cdf(|k| b.pmf(k), 2);
/// assert!((lhs - (b.pmf(0) + b.pmf(1))).abs() < 1e-15);
/// ```
pub fn discrete_cdf<F: Fn(i64) -> f64>(pmf: F, k: i64) -> f64 {
    (0..k).map(pmf).sum()
}

// ============================================================================
// Uniform Distribution
// ============================================================================

/// Continuous uniform distribution on `[min, max]`.
///
/// # Mathematical Definition
/// - PDF: f(x) = 1/(max−min) for x ∈ [min, max]
/// - CDF: F(x) = (x−min)/(max−min)
/// - Mean: (min+max)/2
/// - Variance: (max−min)²/12
#[derive(Debug, Clone, PartialEq)]
pub struct Uniform {
    min: f64,
    max: f64,
}

impl Uniform {
    /// Creates a new uniform distribution on `[min, max]`.
    ///
    /// # Errors
    /// Returns `Err` if `min >= max` or either parameter is not finite.
    pub fn new(min: f64, max: f64) -> Result<Self, DistributionError> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(DistributionError::InvalidParameters(format!(
                "Uniform requires min < max, got min={min}, max={max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mean(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    pub fn variance(&self) -> f64 {
        let range = self.max - self.min;
        range * range / 12.0
    }

    /// Standard deviation = √(variance).
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// PDF: f(x) = 1/(max−min) for x ∈ [min, max], 0 otherwise.
    pub fn pdf(&self, x: f64) -> f64 {
        if x >= self.min && x <= self.max {
            1.0 / (self.max - self.min)
        } else {
            0.0
        }
    }

    /// CDF: F(x) = (x−min)/(max−min), clamped to [0, 1].
    ///
    /// Closed form, `P(X ≤ x)` — this sidesteps the O(n) summation the
    /// discrete types use and gives exact continuous-uniform semantics.
    pub fn cdf(&self, x: f64) -> f64 {
        if x < self.min {
            0.0
        } else if x >= self.max {
            1.0
        } else {
            (x - self.min) / (self.max - self.min)
        }
    }

    /// Inverse CDF (quantile function): x = min + p·(max−min).
    ///
    /// Returns `None` if `p` is outside `[0, 1]`.
    pub fn quantile(&self, p: f64) -> Option<f64> {
        if !(0.0..=1.0).contains(&p) {
            return None;
        }
        Some(self.min + p * (self.max - self.min))
    }
}

// ============================================================================
// Binomial Distribution
// ============================================================================

/// Binomial distribution B(n, p): successes in `n` independent trials.
///
/// # Mathematical Definition
/// - PMF: P(X = k) = C(n,k)·p^k·(1−p)^(n−k) for k ∈ {0, …, n}
/// - Mean: n·p
/// - Variance: n·p·(1−p)
#[derive(Debug, Clone, PartialEq)]
pub struct Binomial {
    n: u64,
    p: f64,
}

impl Binomial {
    /// Creates a new binomial distribution with `n` trials and success
    /// probability `p`.
    ///
    /// # Errors
    /// Returns `Err` if `n < 1` or `p` is outside `[0, 1]` or not finite.
    pub fn new(n: u64, p: f64) -> Result<Self, DistributionError> {
        if n < 1 {
            return Err(DistributionError::InvalidParameters(format!(
                "Binomial requires n ≥ 1, got n={n}"
            )));
        }
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(DistributionError::InvalidParameters(format!(
                "Binomial requires p ∈ [0, 1], got p={p}"
            )));
        }
        Ok(Self { n, p })
    }

    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    pub fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    pub fn variance(&self) -> f64 {
        self.n as f64 * self.p * (1.0 - self.p)
    }

    /// Standard deviation = √(variance).
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// PMF: C(n,k)·p^k·(1−p)^(n−k), 0 outside `[0, n]`.
    ///
    /// Uses the exact integer binomial coefficient while it fits in
    /// 128 bits, falling back to log-space evaluation via `ln_choose`
    /// for very large `n`. The `p ∈ {0, 1}` endpoints are point masses
    /// and handled exactly.
    pub fn pmf(&self, k: i64) -> f64 {
        if k < 0 || k as u64 > self.n {
            return 0.0;
        }
        let k = k as u64;
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }

        let kf = k as f64;
        let nf = self.n as f64;
        match special::checked_choose(self.n, k) {
            Some(c) => c as f64 * self.p.powf(kf) * (1.0 - self.p).powf(nf - kf),
            None => (special::ln_choose(self.n, k)
                + kf * self.p.ln()
                + (nf - kf) * (1.0 - self.p).ln())
            .exp(),
        }
    }

    /// Cumulative mass `P(X < k)` via [`discrete_cdf`].
    pub fn cdf(&self, k: i64) -> f64 {
        // Everything past the support contributes zero mass.
        let k = k.min(self.n as i64 + 1);
        discrete_cdf(|i| self.pmf(i), k)
    }
}

// ============================================================================
// HyperGeometric Distribution
// ============================================================================

/// Hypergeometric distribution: successes in `draws` draws without
/// replacement from a population of size `population` containing
/// `successes` successes.
///
/// # Mathematical Definition
/// - PMF: P(X = k) = C(M,k)·C(N−M, n−k) / C(N,n)
/// - Moments: taken from the Binomial(n, M/N) approximation
///   (the moment formulas only — never its PMF).
#[derive(Debug, Clone, PartialEq)]
pub struct HyperGeometric {
    population: u64,
    successes: u64,
    draws: u64,
    /// Binomial(draws, successes/population); supplies the moments.
    approx: Binomial,
}

impl HyperGeometric {
    /// Creates a new hypergeometric distribution.
    ///
    /// # Errors
    /// Returns `Err` if `successes > population`, `draws > population`,
    /// or `draws < 1` (the moment-supplying Binomial needs at least one
    /// trial).
    pub fn new(population: u64, successes: u64, draws: u64) -> Result<Self, DistributionError> {
        if successes > population {
            return Err(DistributionError::InvalidParameters(format!(
                "HyperGeometric requires successes ≤ population, got successes={successes}, population={population}"
            )));
        }
        if draws > population {
            return Err(DistributionError::InvalidParameters(format!(
                "HyperGeometric requires draws ≤ population, got draws={draws}, population={population}"
            )));
        }
        let approx = Binomial::new(draws, successes as f64 / population as f64)?;
        Ok(Self {
            population,
            successes,
            draws,
            approx,
        })
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Mean of the Binomial(draws, successes/population) approximation.
    pub fn mean(&self) -> f64 {
        self.approx.mean()
    }

    /// Variance of the Binomial(draws, successes/population) approximation.
    pub fn variance(&self) -> f64 {
        self.approx.variance()
    }

    /// Standard deviation = √(variance).
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// PMF: C(M,k)·C(N−M, n−k) / C(N,n), 0 outside `[0, draws]`.
    ///
    /// The combinatorial terms are evaluated in exact 128-bit integer
    /// arithmetic before any float conversion; only when a term
    /// overflows u128 does evaluation fall back to log space.
    pub fn pmf(&self, k: i64) -> f64 {
        if k < 0 || k as u64 > self.draws {
            return 0.0;
        }
        let k = k as u64;
        let misses = self.population - self.successes;

        let exact = special::checked_choose(self.successes, k)
            .zip(special::checked_choose(misses, self.draws - k))
            .zip(special::checked_choose(self.population, self.draws));
        match exact {
            Some(((c1, c2), c3)) => match c1.checked_mul(c2) {
                Some(num) => num as f64 / c3 as f64,
                // The product overflows but each factor is still exact.
                None => c1 as f64 / c3 as f64 * c2 as f64,
            },
            None => (special::ln_choose(self.successes, k)
                + special::ln_choose(misses, self.draws - k)
                - special::ln_choose(self.population, self.draws))
            .exp(),
        }
    }

    /// Cumulative mass `P(X < k)` via [`discrete_cdf`].
    pub fn cdf(&self, k: i64) -> f64 {
        let k = k.min(self.draws as i64 + 1);
        discrete_cdf(|i| self.pmf(i), k)
    }
}

// ============================================================================
// Negative Binomial Distribution
// ============================================================================

/// Negative binomial distribution: failures before the `r`-th success in
/// independent trials with success probability `p`.
///
/// # Mathematical Definition
/// - PMF: P(X = k) = C(k+r−1, r−1)·p^r·(1−p)^k for k ≥ 0
/// - Mean: r(1−p)/p
/// - Variance: r(1−p)/p²
#[derive(Debug, Clone, PartialEq)]
pub struct NegativeBinomial {
    r: u64,
    p: f64,
}

impl NegativeBinomial {
    /// Creates a new negative binomial distribution with `r` required
    /// successes and success probability `p`.
    ///
    /// # Errors
    /// Returns `Err` if `r < 1` or `p` is outside `(0, 1]` or not finite.
    /// `p == 0` is rejected: both moments divide by `p`, and with no
    /// chance of success the failure count never terminates.
    pub fn new(r: u64, p: f64) -> Result<Self, DistributionError> {
        if r < 1 {
            return Err(DistributionError::InvalidParameters(format!(
                "NegativeBinomial requires r ≥ 1, got r={r}"
            )));
        }
        if !p.is_finite() || !(p > 0.0 && p <= 1.0) {
            return Err(DistributionError::InvalidParameters(format!(
                "NegativeBinomial requires p ∈ (0, 1], got p={p}"
            )));
        }
        Ok(Self { r, p })
    }

    pub fn r(&self) -> u64 {
        self.r
    }

    pub fn p(&self) -> f64 {
        self.p
    }

    /// Mean = r(1−p)/p.
    pub fn mean(&self) -> f64 {
        self.r as f64 * (1.0 - self.p) / self.p
    }

    /// Variance = r(1−p)/p².
    pub fn variance(&self) -> f64 {
        self.r as f64 * (1.0 - self.p) / (self.p * self.p)
    }

    /// Standard deviation = √(variance).
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// PMF: C(k+r−1, r−1)·p^r·(1−p)^k, 0 for `k < 0`.
    pub fn pmf(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        let k = k as u64;
        if self.p == 1.0 {
            // Every trial succeeds: zero failures with certainty.
            return if k == 0 { 1.0 } else { 0.0 };
        }

        let kf = k as f64;
        let rf = self.r as f64;
        let exact = (k)
            .checked_add(self.r - 1)
            .and_then(|m| special::checked_choose(m, self.r - 1));
        match exact {
            Some(c) => c as f64 * self.p.powf(rf) * (1.0 - self.p).powf(kf),
            None => (special::ln_gamma(kf + rf)
                - special::ln_gamma(rf)
                - special::ln_gamma(kf + 1.0)
                + rf * self.p.ln()
                + kf * (1.0 - self.p).ln())
            .exp(),
        }
    }

    /// Cumulative mass `P(X < k)` via [`discrete_cdf`].
    ///
    /// The support is unbounded above, so cost grows linearly in `k`.
    pub fn cdf(&self, k: i64) -> f64 {
        discrete_cdf(|i| self.pmf(i), k)
    }
}

// ============================================================================
// Poisson Distribution
// ============================================================================

/// Poisson distribution with rate λ.
///
/// # Mathematical Definition
/// - PMF: P(X = k) = exp(−λ)·λ^k / k! for k ≥ 0
/// - Mean: λ
/// - Variance: λ
#[derive(Debug, Clone, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

impl Poisson {
    /// Creates a new Poisson distribution with rate `lambda`.
    ///
    /// `lambda == 0` is allowed and degenerates to a point mass at zero.
    ///
    /// # Errors
    /// Returns `Err` if `lambda` is negative or not finite.
    pub fn new(lambda: f64) -> Result<Self, DistributionError> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(DistributionError::InvalidParameters(format!(
                "Poisson requires λ ≥ 0, got λ={lambda}"
            )));
        }
        Ok(Self { lambda })
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn mean(&self) -> f64 {
        self.lambda
    }

    pub fn variance(&self) -> f64 {
        self.lambda
    }

    /// Standard deviation = √(λ).
    pub fn std_dev(&self) -> f64 {
        self.lambda.sqrt()
    }

    /// PMF: exp(−λ)·λ^k / k!, 0 for `k < 0`.
    ///
    /// Evaluated as exp(−λ + k·ln λ − ln Γ(k+1)) so large `k` neither
    /// overflows λ^k nor k!.
    pub fn pmf(&self, k: i64) -> f64 {
        if k < 0 {
            return 0.0;
        }
        if self.lambda == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        let kf = k as f64;
        (-self.lambda + kf * self.lambda.ln() - special::ln_gamma(kf + 1.0)).exp()
    }

    /// Cumulative mass `P(X < k)` via [`discrete_cdf`].
    ///
    /// The support is unbounded above, so cost grows linearly in `k`.
    pub fn cdf(&self, k: i64) -> f64 {
        discrete_cdf(|i| self.pmf(i), k)
    }
}

// ============================================================================
// Closed family
// ============================================================================

/// The closed set of supported distributions behind one dispatch surface.
///
/// Evaluation takes `f64` everywhere so heterogeneous collections can be
/// plotted or compared uniformly. For the discrete variants a non-integer
/// `x` carries no mass (`pdf` returns 0), and `cdf(x)` is the cumulative
/// mass strictly below `x` — see [`discrete_cdf`] for the boundary
/// convention. `Uniform` keeps its conventional closed-form `P(X ≤ x)`.
///
/// # Examples
/// ```
/// use u_prob::distributions::{Binomial, Distribution};
/// let d = Distribution::from(Binomial::new(10, 0.5).unwrap());
/// assert!((d.mean() - 5.0).abs() < 1e-12);
/// assert_eq!(d.pdf(2.5), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Distribution {
    Uniform(Uniform),
    Binomial(Binomial),
    HyperGeometric(HyperGeometric),
    NegativeBinomial(NegativeBinomial),
    Poisson(Poisson),
}

impl Distribution {
    pub fn mean(&self) -> f64 {
        match self {
            Distribution::Uniform(d) => d.mean(),
            Distribution::Binomial(d) => d.mean(),
            Distribution::HyperGeometric(d) => d.mean(),
            Distribution::NegativeBinomial(d) => d.mean(),
            Distribution::Poisson(d) => d.mean(),
        }
    }

    pub fn variance(&self) -> f64 {
        match self {
            Distribution::Uniform(d) => d.variance(),
            Distribution::Binomial(d) => d.variance(),
            Distribution::HyperGeometric(d) => d.variance(),
            Distribution::NegativeBinomial(d) => d.variance(),
            Distribution::Poisson(d) => d.variance(),
        }
    }

    /// Standard deviation = √(variance), shared across all variants.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Density (continuous) or mass (discrete) at `x`.
    ///
    /// Discrete variants return 0 for non-integer `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        match self {
            Distribution::Uniform(d) => d.pdf(x),
            Distribution::Binomial(d) => Self::at_integer(x, |k| d.pmf(k)),
            Distribution::HyperGeometric(d) => Self::at_integer(x, |k| d.pmf(k)),
            Distribution::NegativeBinomial(d) => Self::at_integer(x, |k| d.pmf(k)),
            Distribution::Poisson(d) => Self::at_integer(x, |k| d.pmf(k)),
        }
    }

    /// Cumulative probability at `x`.
    ///
    /// `Uniform` is the conventional `P(X ≤ x)`; discrete variants are
    /// the strict `P(X < x)` of the shared summation CDF.
    pub fn cdf(&self, x: f64) -> f64 {
        match self {
            Distribution::Uniform(d) => d.cdf(x),
            // ceil maps the real line onto the exclusive integer bound:
            // P(X < 2.5) = P(X < 3) = pmf(0) + pmf(1) + pmf(2).
            Distribution::Binomial(d) => d.cdf(x.ceil() as i64),
            Distribution::HyperGeometric(d) => d.cdf(x.ceil() as i64),
            Distribution::NegativeBinomial(d) => d.cdf(x.ceil() as i64),
            Distribution::Poisson(d) => d.cdf(x.ceil() as i64),
        }
    }

    fn at_integer<F: Fn(i64) -> f64>(x: f64, pmf: F) -> f64 {
        if !x.is_finite() || x.fract() != 0.0 {
            return 0.0;
        }
        pmf(x as i64)
    }
}

impl From<Uniform> for Distribution {
    fn from(d: Uniform) -> Self {
        Distribution::Uniform(d)
    }
}

impl From<Binomial> for Distribution {
    fn from(d: Binomial) -> Self {
        Distribution::Binomial(d)
    }
}

impl From<HyperGeometric> for Distribution {
    fn from(d: HyperGeometric) -> Self {
        Distribution::HyperGeometric(d)
    }
}

impl From<NegativeBinomial> for Distribution {
    fn from(d: NegativeBinomial) -> Self {
        Distribution::NegativeBinomial(d)
    }
}

impl From<Poisson> for Distribution {
    fn from(d: Poisson) -> Self {
        Distribution::Poisson(d)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Uniform ---

    #[test]
    fn test_uniform_basic() {
        let u = Uniform::new(0.0, 10.0).unwrap();
        assert!((u.mean() - 5.0).abs() < 1e-15);
        assert!((u.variance() - 100.0 / 12.0).abs() < 1e-10);
        assert!((u.std_dev() - (100.0 / 12.0_f64).sqrt()).abs() < 1e-10);
    }

    #[test]
    fn test_uniform_pdf() {
        let u = Uniform::new(0.0, 5.0).unwrap();
        assert!((u.pdf(0.0) - 0.2).abs() < 1e-15);
        assert!((u.pdf(2.5) - 0.2).abs() < 1e-15);
        assert!((u.pdf(5.0) - 0.2).abs() < 1e-15);
        assert_eq!(u.pdf(-1.0), 0.0);
        assert_eq!(u.pdf(5.1), 0.0);
    }

    #[test]
    fn test_uniform_cdf_bounds() {
        let u = Uniform::new(2.0, 8.0).unwrap();
        assert_eq!(u.cdf(2.0), 0.0);
        assert_eq!(u.cdf(8.0), 1.0);
        assert!((u.cdf(5.0) - 0.5).abs() < 1e-15);
        assert_eq!(u.cdf(1.0), 0.0);
        assert_eq!(u.cdf(9.0), 1.0);
    }

    #[test]
    fn test_uniform_cdf_monotonic() {
        let u = Uniform::new(-3.0, 7.0).unwrap();
        let mut prev = 0.0;
        for i in 0..=100 {
            let x = -3.0 + i as f64 * 0.1;
            let c = u.cdf(x);
            assert!(c >= prev, "CDF not monotonic at x={x}");
            prev = c;
        }
    }

    #[test]
    fn test_uniform_quantile() {
        let u = Uniform::new(2.0, 8.0).unwrap();
        assert_eq!(u.quantile(0.0), Some(2.0));
        assert_eq!(u.quantile(1.0), Some(8.0));
        assert!((u.quantile(0.5).unwrap() - 5.0).abs() < 1e-15);
        assert_eq!(u.quantile(1.5), None);
    }

    #[test]
    fn test_uniform_invalid() {
        assert!(Uniform::new(5.0, 5.0).is_err());
        assert!(Uniform::new(6.0, 5.0).is_err());
        assert!(Uniform::new(f64::NAN, 5.0).is_err());
        assert!(Uniform::new(0.0, f64::INFINITY).is_err());
    }

    // --- Binomial ---

    #[test]
    fn test_binomial_moments() {
        let b = Binomial::new(10, 0.3).unwrap();
        assert!((b.mean() - 3.0).abs() < 1e-12);
        assert!((b.variance() - 2.1).abs() < 1e-12);
    }

    #[test]
    fn test_binomial_pmf_known_value() {
        // C(4,2)·0.5⁴ = 6/16
        let b = Binomial::new(4, 0.5).unwrap();
        assert!((b.pmf(2) - 0.375).abs() < 1e-12);
    }

    #[test]
    fn test_binomial_pmf_out_of_support() {
        let b = Binomial::new(4, 0.5).unwrap();
        assert_eq!(b.pmf(-1), 0.0);
        assert_eq!(b.pmf(5), 0.0);
    }

    #[test]
    fn test_binomial_pmf_sums_to_one() {
        let b = Binomial::new(20, 0.3).unwrap();
        let total: f64 = (0..=20).map(|k| b.pmf(k)).sum();
        assert!((total - 1.0).abs() < 1e-9, "Σ pmf = {total}");
    }

    #[test]
    fn test_binomial_degenerate_p() {
        let b0 = Binomial::new(5, 0.0).unwrap();
        assert_eq!(b0.pmf(0), 1.0);
        assert_eq!(b0.pmf(1), 0.0);
        let b1 = Binomial::new(5, 1.0).unwrap();
        assert_eq!(b1.pmf(5), 1.0);
        assert_eq!(b1.pmf(4), 0.0);
    }

    #[test]
    fn test_binomial_large_n_falls_back_to_log_space() {
        // C(2000, 1000) is far beyond u128; the log-space path must agree
        // with the normal approximation at the mode.
        let b = Binomial::new(2000, 0.5).unwrap();
        let peak = b.pmf(1000);
        let approx = 1.0 / (2.0 * std::f64::consts::PI * b.variance()).sqrt();
        assert!(
            ((peak - approx) / approx).abs() < 1e-3,
            "pmf(1000) = {peak}, normal approximation {approx}"
        );
    }

    #[test]
    fn test_binomial_cdf_is_exclusive() {
        let b = Binomial::new(4, 0.5).unwrap();
        assert_eq!(b.cdf(0), 0.0);
        assert!((b.cdf(1) - b.pmf(0)).abs() < 1e-15);
        assert!((b.cdf(5) - 1.0).abs() < 1e-12);
        // Clamped past the support.
        assert!((b.cdf(1_000_000) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_binomial_invalid() {
        assert!(Binomial::new(0, 0.5).is_err());
        assert!(Binomial::new(5, -0.1).is_err());
        assert!(Binomial::new(5, 1.1).is_err());
        assert!(Binomial::new(5, f64::NAN).is_err());
    }

    // --- HyperGeometric ---

    #[test]
    fn test_hypergeometric_pmf_known_value() {
        // C(4,1)·C(6,2)/C(10,3) = 4·15/120
        let h = HyperGeometric::new(10, 4, 3).unwrap();
        assert!((h.pmf(1) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_hypergeometric_pmf_sums_to_one() {
        let h = HyperGeometric::new(50, 20, 12).unwrap();
        let total: f64 = (0..=12).map(|k| h.pmf(k)).sum();
        assert!((total - 1.0).abs() < 1e-9, "Σ pmf = {total}");
    }

    #[test]
    fn test_hypergeometric_moments_match_binomial() {
        let h = HyperGeometric::new(40, 10, 8).unwrap();
        let b = Binomial::new(8, 0.25).unwrap();
        assert!((h.mean() - b.mean()).abs() < 1e-12);
        assert!((h.variance() - b.variance()).abs() < 1e-12);
    }

    #[test]
    fn test_hypergeometric_support_edges() {
        // Drawing 5 from 6 with only 2 successes: at most 2 hits, and at
        // least 1 (only 4 misses exist).
        let h = HyperGeometric::new(6, 2, 5).unwrap();
        assert_eq!(h.pmf(0), 0.0);
        assert!(h.pmf(1) > 0.0);
        assert!(h.pmf(2) > 0.0);
        assert_eq!(h.pmf(3), 0.0);
        assert_eq!(h.pmf(-1), 0.0);
        assert_eq!(h.pmf(6), 0.0);
    }

    #[test]
    fn test_hypergeometric_large_population_log_fallback() {
        // C(300, 150) overflows u128, forcing the log-space path; the
        // probabilities must still sum to one.
        let h = HyperGeometric::new(300, 150, 150).unwrap();
        let total: f64 = (0..=150).map(|k| h.pmf(k)).sum();
        assert!((total - 1.0).abs() < 1e-5, "Σ pmf = {total}");
    }

    #[test]
    fn test_hypergeometric_invalid() {
        assert!(HyperGeometric::new(10, 11, 5).is_err());
        assert!(HyperGeometric::new(10, 5, 11).is_err());
        assert!(HyperGeometric::new(10, 5, 0).is_err());
    }

    // --- NegativeBinomial ---

    #[test]
    fn test_negative_binomial_moments() {
        // rq = 3·0.5 = 1.5
        let nb = NegativeBinomial::new(3, 0.5).unwrap();
        assert!((nb.mean() - 3.0).abs() < 1e-12);
        assert!((nb.variance() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_negative_binomial_pmf_known_values() {
        let nb = NegativeBinomial::new(3, 0.5).unwrap();
        // pmf(0) = p³
        assert!((nb.pmf(0) - 0.125).abs() < 1e-12);
        // pmf(2) = C(4,2)·0.5³·0.5² = 6/32
        assert!((nb.pmf(2) - 0.1875).abs() < 1e-12);
        assert_eq!(nb.pmf(-1), 0.0);
    }

    #[test]
    fn test_negative_binomial_series_converges_to_one() {
        let nb = NegativeBinomial::new(4, 0.3).unwrap();
        let total: f64 = (0..200).map(|k| nb.pmf(k)).sum();
        assert!((total - 1.0).abs() < 1e-8, "truncated Σ pmf = {total}");
    }

    #[test]
    fn test_negative_binomial_certain_success() {
        let nb = NegativeBinomial::new(2, 1.0).unwrap();
        assert_eq!(nb.pmf(0), 1.0);
        assert_eq!(nb.pmf(1), 0.0);
        assert!((nb.mean()).abs() < 1e-15);
    }

    #[test]
    fn test_negative_binomial_invalid() {
        assert!(NegativeBinomial::new(0, 0.5).is_err());
        assert!(NegativeBinomial::new(3, 0.0).is_err());
        assert!(NegativeBinomial::new(3, -0.2).is_err());
        assert!(NegativeBinomial::new(3, 1.5).is_err());
    }

    // --- Poisson ---

    #[test]
    fn test_poisson_moments() {
        let p = Poisson::new(4.0).unwrap();
        assert_eq!(p.mean(), 4.0);
        assert_eq!(p.variance(), 4.0);
        assert!((p.std_dev() - 2.0).abs() < 1e-15);
    }

    #[test]
    fn test_poisson_pmf_known_values() {
        let p = Poisson::new(2.0).unwrap();
        assert!((p.pmf(0) - (-2.0_f64).exp()).abs() < 1e-12);
        // pmf(3) = e⁻²·8/6
        assert!((p.pmf(3) - (-2.0_f64).exp() * 8.0 / 6.0).abs() < 1e-12);
        assert_eq!(p.pmf(-1), 0.0);
    }

    #[test]
    fn test_poisson_partial_sums_converge_to_one() {
        let p = Poisson::new(4.0).unwrap();
        let total: f64 = (0..=60).map(|k| p.pmf(k)).sum();
        assert!((total - 1.0).abs() < 1e-8, "Σ pmf = {total}");
    }

    #[test]
    fn test_poisson_zero_rate_is_point_mass() {
        let p = Poisson::new(0.0).unwrap();
        assert_eq!(p.pmf(0), 1.0);
        assert_eq!(p.pmf(1), 0.0);
        assert_eq!(p.mean(), 0.0);
    }

    #[test]
    fn test_poisson_invalid() {
        assert!(Poisson::new(-1.0).is_err());
        assert!(Poisson::new(f64::NAN).is_err());
        assert!(Poisson::new(f64::INFINITY).is_err());
    }

    // --- discrete_cdf ---

    #[test]
    fn test_discrete_cdf_empty_range() {
        let b = Binomial::new(4, 0.5).unwrap();
        assert_eq!(discrete_cdf(|k| b.pmf(k), 0), 0.0);
        assert_eq!(discrete_cdf(|k| b.pmf(k), -3), 0.0);
    }

    #[test]
    fn test_discrete_cdf_accumulates_in_order() {
        let p = Poisson::new(1.5).unwrap();
        let direct = p.pmf(0) + p.pmf(1) + p.pmf(2);
        assert!((discrete_cdf(|k| p.pmf(k), 3) - direct).abs() < 1e-15);
    }

    // --- Distribution enum ---

    #[test]
    fn test_enum_dispatch_moments() {
        let d: Distribution = Poisson::new(3.0).unwrap().into();
        assert_eq!(d.mean(), 3.0);
        assert_eq!(d.variance(), 3.0);
        assert!((d.std_dev() - 3.0_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_enum_discrete_pdf_rejects_fractional_x() {
        let d: Distribution = Binomial::new(10, 0.5).unwrap().into();
        assert_eq!(d.pdf(2.5), 0.0);
        assert_eq!(d.pdf(f64::NAN), 0.0);
        let b = Binomial::new(10, 0.5).unwrap();
        assert!((d.pdf(2.0) - b.pmf(2)).abs() < 1e-15);
    }

    #[test]
    fn test_enum_cdf_conventions() {
        // Uniform: P(X ≤ x); discrete: P(X < x).
        let u: Distribution = Uniform::new(0.0, 10.0).unwrap().into();
        assert!((u.cdf(10.0) - 1.0).abs() < 1e-15);

        let b = Binomial::new(4, 0.5).unwrap();
        let d: Distribution = b.clone().into();
        assert_eq!(d.cdf(0.0), 0.0);
        assert!((d.cdf(2.0) - (b.pmf(0) + b.pmf(1))).abs() < 1e-15);
        // A fractional bound includes every integer strictly below it.
        assert!((d.cdf(2.5) - (b.pmf(0) + b.pmf(1) + b.pmf(2))).abs() < 1e-15);
    }

    #[test]
    fn test_error_display() {
        let err = Binomial::new(0, 0.5).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("invalid distribution parameters"), "{msg}");
    }
}
