//! Shared numeric tolerances for the interpolation engine.
//!
//! - [`DELTA`]         : confluence / exact-zero / flat-tangent threshold
//! - [`MIN_X_SPACING`] : minimum spacing between distinct stored x-values
//! - `DERIVATIVE_DX`   : step for central-difference derivative estimates

/// Two x-values closer than this are treated as copies of the same
/// physical node (a confluent group). Also the exact-zero threshold in
/// root bracketing and the flat-tangent threshold during inversion.
pub const DELTA: f64 = 1e-7;

/// Adjacent stored x-values closer than this are duplicates.
pub const MIN_X_SPACING: f64 = 1e-12;

/// Step for central-difference derivative estimates.
pub(crate) const DERIVATIVE_DX: f64 = 1e-5;
