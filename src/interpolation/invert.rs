//! Inverse-relation construction and root bracketing.
//!
//! Root-finding works by inverse-function interpolation: swap the
//! tabulated dependency y(x) into x(y), then interpolate x at y = 0
//! through the same selection and divided-difference pipeline.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::nodes::Node;
use crate::interpolation::tolerances::DELTA;

/// The inverse-function rules cover the first two derivative orders.
pub(crate) const MAX_INVERTED_DERIVATIVES: usize = 2;

/// Swaps each node's x and y and applies the inverse-function rules to
/// the derivative columns:
///
/// ```text
/// x'(y)  =  1 / y'(x)
/// x''(y) = -y''(x) / y'(x)^3
/// ```
///
/// Orders above the second are not carried into the inverse.
///
/// # Errors
/// - [`InterpolationError::CannotInvertFunction`] when a first
///   derivative lies under the flat-tangent tolerance.
pub fn invert(nodes: &[Node], derivatives: usize) -> Result<Vec<Node>, InterpolationError> {
    let order = derivatives.min(MAX_INVERTED_DERIVATIVES);
    let mut inverted = Vec::with_capacity(nodes.len());

    for node in nodes {
        let mut values = vec![node.x];
        if order >= 1 {
            let d1 = node.values[1];
            if d1.abs() < DELTA {
                return Err(InterpolationError::CannotInvertFunction { x: node.x });
            }
            values.push(1.0 / d1);
            if order >= 2 {
                values.push(-node.values[2] / d1.powi(3));
            }
        }
        inverted.push(Node { x: node.values[0], values });
    }

    Ok(inverted)
}

/// Outcome of the pre-inversion bracketing scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Bracket {
    /// A sample y already sits on zero; its x is the root.
    Exact(f64),
    /// Right end of the first sign-changing pair, the anchor index for
    /// node selection on the inverted sequence.
    SignChange(usize),
}

/// Scans the ordered samples for an exact zero or a sign change.
///
/// # Errors
/// - [`InterpolationError::NoRootInInterval`] when neither exists.
pub(crate) fn bracket_root(nodes: &[Node]) -> Result<Bracket, InterpolationError> {
    for (i, node) in nodes.iter().enumerate() {
        if node.values[0].abs() < DELTA {
            return Ok(Bracket::Exact(node.x));
        }
        if i + 1 < nodes.len() && node.values[0] * nodes[i + 1].values[0] < 0.0 {
            return Ok(Bracket::SignChange(i + 1));
        }
    }
    Err(InterpolationError::NoRootInInterval)
}
