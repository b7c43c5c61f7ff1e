//! Curve data for interactive visualization.
//!
//! Defines the data contract between the distribution layer and an
//! external chart renderer: an ordered sequence of (x, y) points with
//! optional hover labels and an optional highlighted point, plus
//! builders that evaluate a distribution or normal model over a grid.
//!
//! Rendering itself is a consumer concern; this crate never draws. A
//! renderer implements [`CurveRenderer`] and receives fully evaluated
//! [`Curve`] values.

use crate::distributions::Distribution;
use crate::normal::NormalModel;

/// A single point on a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvePoint {
    /// Evaluation point.
    pub x: f64,
    /// Evaluated probability (mass, density, or cumulative).
    pub y: f64,
    /// Optional hover label shown by interactive renderers.
    pub hover: Option<String>,
}

/// An ordered curve ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    points: Vec<CurvePoint>,
    highlighted: Option<usize>,
}

impl Curve {
    /// Creates a curve from an ordered point sequence.
    pub fn new(points: Vec<CurvePoint>) -> Self {
        Self {
            points,
            highlighted: None,
        }
    }

    /// Marks one point for emphasis. An out-of-range index clears the
    /// highlight instead of carrying a dangling reference.
    pub fn with_highlight(mut self, index: usize) -> Self {
        self.highlighted = if index < self.points.len() {
            Some(index)
        } else {
            None
        };
        self
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The x-coordinates, in order. Convenience for renderers with
    /// column-oriented APIs.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// The y-coordinates, in order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

/// Renders evaluated curves; implemented by the consuming application,
/// never by this crate.
pub trait CurveRenderer {
    fn render_curve(&mut self, curve: &Curve);
}

// ---------------------------------------------------------------------------
// Grids
// ---------------------------------------------------------------------------

/// `n` evenly spaced points from `start` to `end`, both inclusive.
///
/// # Examples
/// ```
/// use u_prob::curve::linspace;
/// let xs = linspace(0.0, 1.0, 5);
/// assert_eq!(xs, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + i as f64 * step).collect()
        }
    }
}

/// The integers `0..=upper` as f64 — the natural grid for discrete
/// probability mass functions.
///
/// # Examples
/// ```
/// use u_prob::curve::integer_grid;
/// assert_eq!(integer_grid(3), vec![0.0, 1.0, 2.0, 3.0]);
/// ```
pub fn integer_grid(upper: u64) -> Vec<f64> {
    (0..=upper).map(|k| k as f64).collect()
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Evaluates a distribution's PDF over the given grid.
///
/// Bounded discrete distributions pair naturally with
/// [`integer_grid`]`(n)`; unbounded ones (Poisson, negative binomial)
/// with a caller-chosen truncation point; the continuous uniform with
/// [`linspace`] across `[min, max]`.
pub fn pdf_curve(dist: &Distribution, xs: &[f64]) -> Curve {
    Curve::new(
        xs.iter()
            .map(|&x| CurvePoint {
                x,
                y: dist.pdf(x),
                hover: None,
            })
            .collect(),
    )
}

/// Evaluates a distribution's CDF over the given grid.
///
/// Carries the same per-variant boundary convention as
/// [`Distribution::cdf`].
pub fn cdf_curve(dist: &Distribution, xs: &[f64]) -> Curve {
    Curve::new(
        xs.iter()
            .map(|&x| CurvePoint {
                x,
                y: dist.cdf(x),
                hover: None,
            })
            .collect(),
    )
}

/// Bell-curve data for a normal model, with a highlighted probe point.
///
/// Evaluates the model's density over `mean ± 6·sample_sd` — 100 points
/// per side plus the mean itself — then appends `probe` as the final,
/// highlighted point. Every point carries a `P(X <= x)` hover label from
/// [`NormalModel::l_area`].
pub fn bell_curve(model: &NormalModel, probe: f64) -> Curve {
    const SIDE_POINTS: usize = 100;
    const SPREAD: f64 = 6.0;

    let mean = model.mean();
    let half_width = SPREAD * model.sample_sd();

    let mut xs = Vec::with_capacity(2 * SIDE_POINTS + 2);
    let step = half_width / SIDE_POINTS as f64;
    for i in 0..SIDE_POINTS {
        xs.push(mean - half_width + i as f64 * step);
    }
    xs.push(mean);
    for i in 1..=SIDE_POINTS {
        xs.push(mean + i as f64 * step);
    }
    // The probe goes last so renderers can emphasize it.
    xs.push(probe);

    let points = xs
        .into_iter()
        .map(|x| CurvePoint {
            x,
            y: model.z_score(x),
            hover: Some(format!("P(X <= {x}) = {}", model.l_area(x))),
        })
        .collect::<Vec<_>>();

    let last = points.len() - 1;
    Curve::new(points).with_highlight(last)
}
