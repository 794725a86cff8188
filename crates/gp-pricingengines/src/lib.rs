//! # gp-pricingengines
//!
//! Pricing entry points built on the explicit finite-difference solver.
//!
//! * [`fd_option_price`] — one-shot price from plain inputs
//! * [`FdEuropeanEngine`] — a grid bound once, priced against many contracts
//! * [`price_batch`] — independent rows priced in parallel
//! * [`black_scholes_price`] — closed-form reference price

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Closed-form Black-Scholes price of a European option.
pub mod analytic_european_engine;

/// Parallel pricing of independent requests.
pub mod batch;

/// Finite-difference engine for European vanilla options.
pub mod fd_european_engine;

pub use analytic_european_engine::black_scholes_price;
pub use batch::{price_batch, FdPricingRequest};
pub use fd_european_engine::{fd_option_price, FdEuropeanEngine, FdPricingResult};
