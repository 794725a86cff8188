//! Probability distributions, delegating to the `statrs` crate.

pub mod normal;

pub use normal::normal_cdf;
