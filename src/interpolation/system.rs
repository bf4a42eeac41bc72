//! Intersection of two tabulated curves.
//!
//! The first curve arrives as (x, y) samples, the second as (y, x)
//! samples of its inverse. The intersection tabulates the pointwise
//! difference of the two and drives it through the same inverse
//! interpolation used for single-curve roots.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::newton::NewtonPolynomial;

/// Solves `y1(x) = y2(x)` where `xy` samples y1 directly and `yx`
/// samples x as a function of y2. Returns the intersection `(x, y)`.
///
/// # Errors
/// - [`InterpolationError::NoRootInInterval`] when the tabulated
///   difference neither hits nor crosses zero
/// - construction and degree errors of the underlying polynomials
pub fn solve_system(
    xy: &[Vec<f64>],
    yx: &[Vec<f64>],
    degree: i32,
) -> Result<(f64, f64), InterpolationError> {
    let mut swapped = Vec::with_capacity(yx.len());
    for fields in yx {
        if fields.len() < 2 {
            return Err(InterpolationError::NotEnoughInputData {
                needed: 2,
                got: fields.len(),
            });
        }
        swapped.push(vec![fields[1], fields[0]]);
    }
    let second = NewtonPolynomial::new(&swapped)?;

    let mut difference = Vec::with_capacity(xy.len());
    for fields in xy {
        if fields.len() < 2 {
            return Err(InterpolationError::NotEnoughInputData {
                needed: 2,
                got: fields.len(),
            });
        }
        let y2 = second.calc(fields[0], degree)?;
        difference.push(vec![fields[0], fields[1] - y2]);
    }

    let x_root = NewtonPolynomial::new(&difference)?.find_root(degree)?;
    let y = second.calc(x_root, degree)?;

    Ok((x_root, y))
}
