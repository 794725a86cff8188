//! # gridpricer
//!
//! Prices European vanilla options by solving the Black-Scholes PDE with an
//! explicit finite-difference scheme on a uniform (price, time) grid.
//!
//! This umbrella crate re-exports the workspace crates:
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`core`] | `gp-core` | `Real` aliases, `Error`, `ensure!` macros |
//! | [`math`] | `gp-math` | linear interpolation, normal distribution |
//! | [`instruments`] | `gp-instruments` | `OptionType`, `VanillaContract` |
//! | [`methods`] | `gp-methods` | grid, stencil, `ExplicitFdSolver` |
//! | [`pricingengines`] | `gp-pricingengines` | `fd_option_price`, engines, batch |
//!
//! # Example
//! ```
//! use gridpricer::{fd_option_price, OptionType};
//!
//! let price = fd_option_price(
//!     OptionType::Put, 95.0, 100.0, 0.02, 0.5, 0.25, 400.0, 500, 80,
//! )
//! .unwrap();
//! assert!(price > 4.0 && price < 10.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use gp_core as core;

/// Linear interpolation and the normal distribution.
pub use gp_math as math;

/// Option type and vanilla contract parameters.
pub use gp_instruments as instruments;

/// Explicit finite-difference solver.
pub use gp_methods as methods;

/// Pricing entry points: one-shot, engine, batch, analytic reference.
pub use gp_pricingengines as pricingengines;

// ── Flat re-exports of the most used items ────────────────────────────────────

pub use gp_core::{Error, Real, Result};
pub use gp_instruments::{OptionType, VanillaContract};
pub use gp_methods::{ExplicitFdSolver, FdGridSpec, StabilityReport, StencilCoefficients, ValueGrid};
pub use gp_pricingengines::{
    black_scholes_price, fd_option_price, price_batch, FdEuropeanEngine, FdPricingRequest,
    FdPricingResult,
};
