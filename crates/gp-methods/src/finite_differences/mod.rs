//! Finite difference methods for PDE-based option pricing.
//!
//! The Black-Scholes PDE is solved backward from maturity on a uniform grid
//! `S_i = i·ds` (`i = 0..=M`), `t_j = j·dt` (`j = 0..=N`) with an explicit
//! scheme: every earlier column follows in closed form from the later one,
//! no linear system is solved.
//!
//! # Overview
//!
//! * [`FdGridSpec`] — number of time/price steps and the price cap `Smax`
//! * [`StencilCoefficients`] — the α, β, γ weights of the three-point stencil
//! * [`StabilityReport`] — advisory diagnostic on those weights
//! * [`ValueGrid`] — the full `(M+1) × (N+1)` value array, on request
//! * [`ExplicitFdSolver`] — the backward sweep and the interpolated price

pub mod coefficients;
pub mod explicit;
pub mod grid;
pub mod value_grid;

pub use coefficients::{StabilityReport, StencilCoefficients};
pub use explicit::ExplicitFdSolver;
pub use grid::FdGridSpec;
pub use value_grid::ValueGrid;
