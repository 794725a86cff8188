//! # gp-math
//!
//! Mathematical utilities: 1D interpolation over price axes and the
//! standard normal distribution (via statrs).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// 1D interpolation schemes.
pub mod interpolations;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::normal_cdf;
pub use interpolations::{Interpolation1D, LinearInterpolation};
