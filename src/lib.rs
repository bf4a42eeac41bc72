//! Interpolation of tabulated samples.
//!
//! Approximates an unknown function given only a discrete, possibly
//! noisy set of sample points: local Newton polynomials over the nodes
//! nearest a query, Hermite polynomials that fold supplied derivative
//! columns into a confluent divided-difference table, root-finding by
//! inverse-function interpolation, and piecewise cubic splines with
//! natural or clamped boundary conditions.
//!
//! The crate performs no I/O; it consumes rows of already parsed
//! numeric fields and returns scalars plus the raw difference and
//! coefficient tables for external rendering.

pub mod interpolation;
