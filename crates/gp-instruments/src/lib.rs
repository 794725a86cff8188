//! # gp-instruments
//!
//! Contract definitions priced by gridpricer: the option kind with its
//! terminal payoff and PDE boundary values, and the vanilla contract
//! parameter set.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Option type, terminal payoff and grid boundary values.
pub mod payoff;

/// Vanilla option contract parameters.
pub mod vanilla_option;

pub use payoff::OptionType;
pub use vanilla_option::VanillaContract;
