//! Piecewise cubic-spline interpolation.
//!
//! Second-derivative continuity at the interior knots gives a
//! tridiagonal system in the knot coefficients `c_i`; it is solved by
//! the shuttle
//! ([Thomas](https://en.wikipedia.org/wiki/Tridiagonal_matrix_algorithm))
//! recursion in O(n) without explicit matrix storage, after which each
//! interval's cubic `a + b dx + c dx^2 + d dx^3` follows in closed
//! form.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::nodes::NodeSet;

/// Cubic coefficients of one interval, relative to its left knot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplineCoeffs {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Cubic spline over an owned set of (x, y) samples.
///
/// # Construction
/// - [`CubicSpline::new`] from raw rows `[x, y, ..]`; at least two
///   samples.
///
/// # Behavior
/// Unconfigured until [`CubicSpline::set_boundary`] runs. The first
/// evaluation of an unconfigured spline applies the natural boundary
/// pair `(0, 0)` once; later evaluations reuse the coefficient table
/// until a boundary change rebuilds it whole.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    nodes: NodeSet,
    coeffs: Vec<SplineCoeffs>,
}

impl CubicSpline {
    pub fn new(rows: &[Vec<f64>]) -> Result<Self, InterpolationError> {
        let nodes = NodeSet::from_rows(rows, 0)?;
        if nodes.len() < 2 {
            return Err(InterpolationError::NotEnoughInputData {
                needed: 2,
                got: nodes.len(),
            });
        }
        Ok(Self { nodes, coeffs: Vec::new() })
    }

    /// Applies the boundary pair (the second-derivative coefficients at
    /// the two end knots; `(0, 0)` is the natural spline) and rebuilds
    /// every interval's coefficients. The table is built into a fresh
    /// buffer and swapped in whole.
    pub fn set_boundary(&mut self, c_start: f64, c_end: f64) {
        self.coeffs = build_coeffs(&self.nodes, c_start, c_end);
    }

    pub fn is_configured(&self) -> bool {
        !self.coeffs.is_empty()
    }

    /// Per-interval coefficient rows for external rendering; empty
    /// until configured.
    pub fn coefficients(&self) -> &[SplineCoeffs] {
        &self.coeffs
    }

    pub fn nodes(&self) -> &NodeSet {
        &self.nodes
    }

    /// Evaluates the spline at `x` via its containing interval's cubic.
    /// Outside the sample range the nearest end interval extrapolates.
    pub fn calc(&mut self, x: f64) -> f64 {
        if self.coeffs.is_empty() {
            self.set_boundary(0.0, 0.0);
        }

        let knots = self.nodes.nodes();
        let idx = knots.partition_point(|node| node.x() < x);
        let interval = idx.saturating_sub(1).min(self.coeffs.len() - 1);

        let dx = x - knots[interval].x();
        let SplineCoeffs { a, b, c, d } = self.coeffs[interval];
        a + dx * (b + dx * (c + dx * d))
    }
}

/// Shuttle sweep and closed-form interval coefficients.
///
/// Knot coefficients satisfy
/// `h_{i-1} c_{i-1} + 2(h_{i-1} + h_i) c_i + h_i c_{i+1} = f_i` at each
/// interior knot, with `f_i` the divided second difference. The sweep
/// carries `c_i = xi_i * c_{i+1} + theta_i` forward from the start
/// boundary; backward substitution from the end boundary then fills the
/// interior.
fn build_coeffs(nodes: &NodeSet, c_start: f64, c_end: f64) -> Vec<SplineCoeffs> {
    let knots = nodes.nodes();
    let n = knots.len();

    let h: Vec<f64> = knots.windows(2).map(|w| w[1].x() - w[0].x()).collect();

    let mut xi = vec![0.0; n - 1];
    let mut theta = vec![0.0; n - 1];
    theta[0] = c_start;

    for i in 1..n - 1 {
        let f = 3.0
            * ((knots[i + 1].y() - knots[i].y()) / h[i]
                - (knots[i].y() - knots[i - 1].y()) / h[i - 1]);
        let den = h[i - 1] * xi[i - 1] + 2.0 * (h[i - 1] + h[i]);
        xi[i] = -h[i] / den;
        theta[i] = (f - h[i - 1] * theta[i - 1]) / den;
    }

    let mut c = vec![0.0; n];
    c[0] = c_start;
    c[n - 1] = c_end;
    for i in (1..n - 1).rev() {
        c[i] = xi[i] * c[i + 1] + theta[i];
    }

    let mut coeffs = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let slope = (knots[i + 1].y() - knots[i].y()) / h[i];
        coeffs.push(SplineCoeffs {
            a: knots[i].y(),
            b: slope - h[i] * (c[i + 1] + 2.0 * c[i]) / 3.0,
            c: c[i],
            d: (c[i + 1] - c[i]) / (3.0 * h[i]),
        });
    }

    coeffs
}
