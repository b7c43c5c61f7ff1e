//! # u-prob
//!
//! Probability distributions and normal-model inference for the U-Engine
//! ecosystem.
//!
//! This crate provides the computation layer for basic statistical
//! exploration: parameterize a distribution, inspect its moments,
//! evaluate probabilities at points, and run simple one-sided
//! comparisons against a fitted normal model. It is domain-agnostic —
//! it operates on raw `f64`/`u64` parameters without knowledge of any
//! consumer domain.
//!
//! ## Modules
//!
//! - [`distributions`] — Uniform, binomial, hypergeometric, negative
//!   binomial, and Poisson distributions with analytical moments and
//!   PDF/CDF evaluation
//! - [`normal`] — Normal sampling-distribution model: z-scores, tail
//!   areas, one-sided hypothesis comparison
//! - [`curve`] — Curve data and builders for interactive chart renderers
//! - [`random`] — Seeded RNG and per-distribution sampling
//! - [`special`] — Standard normal PDF/CDF, ln Γ, binomial coefficients
//! - [`stats`] — Descriptive statistics with numerical stability guarantees
//!
//! ## Design Philosophy
//!
//! - **Fail-fast validation**: constructors reject invalid parameters;
//!   evaluation is total over validated inputs
//! - **Numerical stability first**: Welford's algorithm for variance,
//!   Kahan summation, exact integer combinatorics with log-space fallback
//! - **No unnecessary dependencies**: pure Rust for core math
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod curve;
pub mod distributions;
pub mod normal;
pub mod random;
pub mod special;
pub mod stats;
