use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("not enough input data: need at least {needed}, got {got}")]
    NotEnoughInputData { needed: usize, got: usize },

    #[error("invalid polynomial degree: must be >= 0. got {got}")]
    InvalidPolynomialDegree { got: i32 },

    #[error("invalid derivative order: {got} exceeds the {available} available column(s)")]
    InvalidDerivativeOrder { available: usize, got: usize },

    #[error("cannot invert the function: flat tangent at x={x}")]
    CannotInvertFunction { x: f64 },

    #[error("no zero crossing in the sampled interval")]
    NoRootInInterval,

    #[error("non-finite value in input row {row}, column {col}")]
    NonFiniteValue { row: usize, col: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },
}
