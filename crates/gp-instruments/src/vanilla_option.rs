//! Vanilla option contract parameters.

use crate::payoff::OptionType;
use gp_core::{ensure_config, Rate, Real, Result, Time, Volatility};

/// The immutable contract inputs of a single pricing call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaContract {
    /// Call or put.
    pub kind: OptionType,
    /// Strike price `K`.
    pub strike: Real,
    /// Continuously compounded risk-free rate `r`.
    pub rate: Rate,
    /// Time to maturity `T` in years.
    pub maturity: Time,
    /// Volatility `σ`.
    pub volatility: Volatility,
}

impl VanillaContract {
    /// Create a new contract. Call [`VanillaContract::validate`] before use.
    pub fn new(
        kind: OptionType,
        strike: Real,
        rate: Rate,
        maturity: Time,
        volatility: Volatility,
    ) -> Self {
        Self {
            kind,
            strike,
            rate,
            maturity,
            volatility,
        }
    }

    /// Check the contract parameters.
    ///
    /// Rate and volatility are not range-checked: the grid recurrence is
    /// well defined for any finite value.
    ///
    /// # Errors
    /// [`gp_core::Error::Configuration`] if the strike is not positive, the
    /// maturity is negative, or any input is not finite.
    pub fn validate(&self) -> Result<()> {
        ensure_config!(
            self.strike.is_finite() && self.strike > 0.0,
            "strike must be positive, got {}",
            self.strike
        );
        ensure_config!(
            self.maturity.is_finite() && self.maturity >= 0.0,
            "maturity must be non-negative, got {}",
            self.maturity
        );
        ensure_config!(self.rate.is_finite(), "rate must be finite, got {}", self.rate);
        ensure_config!(
            self.volatility.is_finite(),
            "volatility must be finite, got {}",
            self.volatility
        );
        Ok(())
    }

    /// Terminal payoff at underlying level `spot`.
    #[inline]
    pub fn payoff(&self, spot: Real) -> Real {
        self.kind.payoff(spot, self.strike)
    }

    /// Discount factor `e^(−r·τ)` over a remaining life `tau`.
    #[inline]
    pub fn discount(&self, tau: Time) -> Real {
        (-self.rate * tau).exp()
    }
}
