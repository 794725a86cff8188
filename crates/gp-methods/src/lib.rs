//! # gp-methods
//!
//! Numerical methods for gridpricer.
//!
//! # Modules
//!
//! * [`finite_differences`] — explicit finite-difference solver for the
//!   Black-Scholes PDE on a uniform (price, time) grid

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Finite difference methods: grid, stencil coefficients, explicit solver.
pub mod finite_differences;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use finite_differences::{
    ExplicitFdSolver, FdGridSpec, StabilityReport, StencilCoefficients, ValueGrid,
};
