//! Newton (Divided-Difference) Interpolation
//!
//! Local polynomial interpolation using the
//! [divided-difference method](https://en.wikipedia.org/wiki/Newton_polynomial):
//! the `degree + 1` sample nodes nearest a query seed a
//! divided-difference table whose Newton form is evaluated with
//! Horner's scheme.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::invert::{bracket_root, invert, Bracket};
use crate::interpolation::nodes::NodeSet;
use crate::interpolation::select::{insertion_index, node_quota, select_nodes};
use crate::interpolation::table::DiffTable;
use crate::interpolation::tolerances::DERIVATIVE_DX;

/// Newton interpolation over an owned set of (x, y) samples.
///
/// # Construction
/// - [`NewtonPolynomial::new`] from raw rows `[x, y, ..]`; columns past
///   the first two are ignored.
///
/// # Behavior
/// Every query re-selects the nearest nodes and rebuilds its table, so
/// the polynomial is local to the query point. Queries outside the
/// sample range extrapolate; there is no out-of-bounds error.
#[derive(Debug, Clone)]
pub struct NewtonPolynomial {
    nodes: NodeSet,
}

impl NewtonPolynomial {
    pub fn new(rows: &[Vec<f64>]) -> Result<Self, InterpolationError> {
        Ok(Self { nodes: NodeSet::from_rows(rows, 0)? })
    }

    /// Replaces the sample set.
    pub fn set_points(&mut self, rows: &[Vec<f64>]) -> Result<(), InterpolationError> {
        self.nodes.replace_points(rows)
    }

    pub fn nodes(&self) -> &NodeSet { &self.nodes }

    /// Approximates y(x) with the Newton polynomial of the given degree.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidPolynomialDegree`] for a negative
    ///   degree
    /// - [`InterpolationError::NotEnoughInputData`] when fewer than
    ///   `degree + 1` nodes are stored
    pub fn calc(&self, x: f64, degree: i32) -> Result<f64, InterpolationError> {
        Ok(self.table_at(x, degree)?.eval(x))
    }

    /// Builds and returns the divided-difference table the given query
    /// would use, for external rendering.
    pub fn diff_table(&self, x: f64, degree: i32) -> Result<DiffTable, InterpolationError> {
        self.table_at(x, degree)
    }

    /// First-derivative estimate by central differences.
    pub fn derivative(&self, x: f64, degree: i32) -> Result<f64, InterpolationError> {
        let y1 = self.calc(x - DERIVATIVE_DX, degree)?;
        let y2 = self.calc(x + DERIVATIVE_DX, degree)?;
        Ok((y2 - y1) / (2.0 * DERIVATIVE_DX))
    }

    /// Second-derivative estimate by central differences.
    pub fn second_derivative(&self, x: f64, degree: i32) -> Result<f64, InterpolationError> {
        let y1 = self.calc(x - DERIVATIVE_DX, degree)?;
        let y2 = self.calc(x + DERIVATIVE_DX, degree)?;
        let y0 = self.calc(x, degree)?;
        Ok((y2 + y1 - 2.0 * y0) / (DERIVATIVE_DX * DERIVATIVE_DX))
    }

    /// Finds x with y(x) = 0 by interpolating the inverted samples at
    /// y = 0. A sample already sitting on zero is returned directly.
    ///
    /// # Errors
    /// - [`InterpolationError::NoRootInInterval`] when the samples
    ///   neither hit nor cross zero
    pub fn find_root(&self, degree: i32) -> Result<f64, InterpolationError> {
        let slots = node_quota(self.nodes.len(), degree)?;

        match bracket_root(self.nodes.nodes())? {
            Bracket::Exact(x) => Ok(x),
            Bracket::SignChange(anchor) => {
                let inverted = invert(self.nodes.nodes(), 0)?;
                let selected = select_nodes(&inverted, 0.0, anchor, slots, 1);
                Ok(DiffTable::build(&selected, 0).eval(0.0))
            }
        }
    }

    fn table_at(&self, x: f64, degree: i32) -> Result<DiffTable, InterpolationError> {
        let slots = node_quota(self.nodes.len(), degree)?;
        let anchor = insertion_index(self.nodes.nodes(), x);
        let selected = select_nodes(self.nodes.nodes(), x, anchor, slots, 1);
        Ok(DiffTable::build(&selected, 0))
    }
}
