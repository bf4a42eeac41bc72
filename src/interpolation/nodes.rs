//! Node storage for the interpolation engine.
//!
//! A [`NodeSet`] owns the sampled points of one tabulated function,
//! kept ascending by x. Each [`Node`] carries the sample value plus any
//! derivative columns supplied alongside it.

use crate::interpolation::errors::InterpolationError;
use crate::interpolation::tolerances::MIN_X_SPACING;

/// One sample: x plus `values[0] = y` and `values[k]` = k-th derivative.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) x: f64,
    pub(crate) values: Vec<f64>,
}

impl Node {
    pub fn x(&self) -> f64 { self.x }
    pub fn y(&self) -> f64 { self.values[0] }

    /// k-th derivative at this node, if the column was provided.
    pub fn derivative(&self, k: usize) -> Option<f64> {
        self.values.get(k).copied()
    }
}

/// Ascending-by-x set of sample nodes with `derivatives` extra columns.
///
/// # Construction
/// - [`NodeSet::from_rows`] from raw rows `[x, y, y', y'', ..]`; each
///   row must carry at least `2 + derivatives` fields. Extra fields are
///   ignored.
///
/// # Invariants
/// - stored x-values are distinct and sorted ascending; the order is
///   re-established after every [`NodeSet::replace_points`].
#[derive(Debug, Clone)]
pub struct NodeSet {
    nodes: Vec<Node>,
    derivatives: usize,
}

impl NodeSet {
    /// # Errors
    /// - [`InterpolationError::NotEnoughInputData`] if any row is short
    /// - [`InterpolationError::NonFiniteValue`] on NaN/infinite fields
    /// - [`InterpolationError::DuplicateX`] on x-values closer than the
    ///   minimum spacing
    pub fn from_rows(rows: &[Vec<f64>], derivatives: usize) -> Result<Self, InterpolationError> {
        let width = 2 + derivatives;
        let mut nodes = Vec::with_capacity(rows.len());

        for (row, fields) in rows.iter().enumerate() {
            if fields.len() < width {
                return Err(InterpolationError::NotEnoughInputData {
                    needed: width,
                    got: fields.len(),
                });
            }
            if let Some(col) = fields[..width].iter().position(|v| !v.is_finite()) {
                return Err(InterpolationError::NonFiniteValue { row, col });
            }
            nodes.push(Node { x: fields[0], values: fields[1..width].to_vec() });
        }

        nodes.sort_by(|a, b| a.x.total_cmp(&b.x));

        for pair in nodes.windows(2) {
            if (pair[1].x - pair[0].x).abs() < MIN_X_SPACING {
                return Err(InterpolationError::DuplicateX { x1: pair[0].x, x2: pair[1].x });
            }
        }

        Ok(Self { nodes, derivatives })
    }

    /// Replaces the stored points, keeping the derivative column count.
    pub fn replace_points(&mut self, rows: &[Vec<f64>]) -> Result<(), InterpolationError> {
        *self = Self::from_rows(rows, self.derivatives)?;
        Ok(())
    }

    // read-only access
    pub fn nodes(&self) -> &[Node] { &self.nodes }
    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
    pub fn derivatives(&self) -> usize { self.derivatives }
}
