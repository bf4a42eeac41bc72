//! Side-by-side data for the two approximation families.
//!
//! Pure computations feeding external tables; the crate compares
//! values, rendering is the caller's concern.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::hermite::HermitePolynomial;
use crate::interpolation::newton::NewtonPolynomial;
use crate::interpolation::nodes::NodeSet;
use crate::interpolation::spline::CubicSpline;

/// Newton and Hermite values at one query, per polynomial degree.
#[derive(Debug, Clone, Copy)]
pub struct DegreeComparison {
    pub degree: i32,
    pub newton: f64,
    pub hermite: f64,
}

/// Evaluates both polynomial families at `x` for degrees
/// `1..=max_degree`.
pub fn by_degree(
    newton: &NewtonPolynomial,
    hermite: &HermitePolynomial,
    x: f64,
    max_degree: i32,
) -> Result<Vec<DegreeComparison>, InterpolationError> {
    let mut rows = Vec::new();
    for degree in 1..=max_degree {
        rows.push(DegreeComparison {
            degree,
            newton: newton.calc(x, degree)?,
            hermite: hermite.calc(x, degree)?,
        });
    }
    Ok(rows)
}

/// Newton and spline values at one probe point.
#[derive(Debug, Clone, Copy)]
pub struct SampleComparison {
    pub x: f64,
    pub newton: f64,
    pub spline: f64,
}

/// Evaluates the Newton polynomial of a fixed degree and the spline at
/// the given probe points.
pub fn against_spline(
    newton: &NewtonPolynomial,
    spline: &mut CubicSpline,
    degree: i32,
    probes: &[f64],
) -> Result<Vec<SampleComparison>, InterpolationError> {
    let mut rows = Vec::with_capacity(probes.len());
    for &x in probes {
        rows.push(SampleComparison {
            x,
            newton: newton.calc(x, degree)?,
            spline: spline.calc(x),
        });
    }
    Ok(rows)
}

/// Three interior probes in each of the first, middle, and last sample
/// intervals; fewer when the set has too few intervals to tell apart.
pub fn probe_points(nodes: &NodeSet) -> Vec<f64> {
    let knots = nodes.nodes();
    let n = knots.len();
    let mut probes = Vec::new();

    if n < 2 {
        return probes;
    }

    push_probes(&mut probes, knots[0].x(), knots[1].x());
    if n > 2 {
        let mid = n / 2;
        push_probes(&mut probes, knots[mid].x(), knots[mid + 1].x());
        push_probes(&mut probes, knots[n - 2].x(), knots[n - 1].x());
    }

    probes
}

fn push_probes(out: &mut Vec<f64>, start: f64, end: f64) {
    let step = (end - start) / 4.0;
    let mut x = start;
    for _ in 0..3 {
        x += step;
        out.push(x);
    }
}
