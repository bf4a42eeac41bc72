//! Hermite (Confluent Divided-Difference) Interpolation
//!
//! Strict generalization of Newton interpolation: derivative columns
//! are folded into the table by replicating each selected node, and the
//! differences of a replicated run are read from the stored derivative
//! values instead of the vanishing quotient.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::invert::{bracket_root, invert, Bracket, MAX_INVERTED_DERIVATIVES};
use crate::interpolation::nodes::NodeSet;
use crate::interpolation::select::{insertion_index, node_quota, select_nodes};
use crate::interpolation::table::DiffTable;

/// Hermite interpolation over samples carrying derivative columns.
///
/// # Construction
/// - [`HermitePolynomial::new`] from raw rows `[x, y, y', y'', ..]` with
///   at least `2 + derivatives` fields each.
///
/// # Behavior
/// A query selects `degree + 1` node copies, each physical node
/// contributing up to `order + 1` of them; the last node picked may
/// contribute fewer when the remaining quota is smaller. With order 0
/// this reduces to plain Newton interpolation.
#[derive(Debug, Clone)]
pub struct HermitePolynomial {
    nodes: NodeSet,
    order: usize,
}

impl HermitePolynomial {
    pub fn new(rows: &[Vec<f64>], derivatives: usize) -> Result<Self, InterpolationError> {
        Ok(Self {
            nodes: NodeSet::from_rows(rows, derivatives)?,
            order: derivatives,
        })
    }

    /// Replaces the sample set, keeping the derivative order.
    pub fn set_points(&mut self, rows: &[Vec<f64>]) -> Result<(), InterpolationError> {
        self.nodes.replace_points(rows)
    }

    /// Lowers or restores the derivative order used by the table.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidDerivativeOrder`] when more orders
    ///   are requested than the stored rows carry.
    pub fn set_derivative_order(&mut self, order: usize) -> Result<(), InterpolationError> {
        if order > self.nodes.derivatives() {
            return Err(InterpolationError::InvalidDerivativeOrder {
                available: self.nodes.derivatives(),
                got: order,
            });
        }
        self.order = order;
        Ok(())
    }

    pub fn derivative_order(&self) -> usize { self.order }
    pub fn nodes(&self) -> &NodeSet { &self.nodes }

    /// Approximates y(x) with the Hermite polynomial of the given
    /// degree.
    ///
    /// # Errors
    /// - [`InterpolationError::InvalidPolynomialDegree`] for a negative
    ///   degree
    /// - [`InterpolationError::NotEnoughInputData`] when fewer than
    ///   `degree + 1` nodes are stored
    pub fn calc(&self, x: f64, degree: i32) -> Result<f64, InterpolationError> {
        Ok(self.table_at(x, degree)?.eval(x))
    }

    /// Builds and returns the confluent divided-difference table the
    /// given query would use, for external rendering.
    pub fn diff_table(&self, x: f64, degree: i32) -> Result<DiffTable, InterpolationError> {
        self.table_at(x, degree)
    }

    /// Finds x with y(x) = 0 by interpolating the inverted samples at
    /// y = 0, carrying the derivative columns through the
    /// inverse-function rules (at most two orders).
    ///
    /// # Errors
    /// - [`InterpolationError::NoRootInInterval`] when the samples
    ///   neither hit nor cross zero
    /// - [`InterpolationError::CannotInvertFunction`] on a flat tangent
    pub fn find_root(&self, degree: i32) -> Result<f64, InterpolationError> {
        let slots = node_quota(self.nodes.len(), degree)?;

        match bracket_root(self.nodes.nodes())? {
            Bracket::Exact(x) => Ok(x),
            Bracket::SignChange(anchor) => {
                let order = self.order.min(MAX_INVERTED_DERIVATIVES);
                let inverted = invert(self.nodes.nodes(), self.order)?;
                let selected = select_nodes(&inverted, 0.0, anchor, slots, order + 1);
                Ok(DiffTable::build(&selected, order).eval(0.0))
            }
        }
    }

    fn table_at(&self, x: f64, degree: i32) -> Result<DiffTable, InterpolationError> {
        let slots = node_quota(self.nodes.len(), degree)?;
        let anchor = insertion_index(self.nodes.nodes(), x);
        let selected = select_nodes(self.nodes.nodes(), x, anchor, slots, self.order + 1);
        Ok(DiffTable::build(&selected, self.order))
    }
}
