//! Option type and its payoff/boundary functions.
//!
//! The kind of a vanilla option fixes three things the finite-difference
//! grid needs: the payoff at maturity, the value at `S = 0` and the value at
//! the truncation cap `S = Smax`.

use gp_core::{DiscountFactor, Error, Real};
use std::fmt;
use std::str::FromStr;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// A call option (right to buy).
    Call,
    /// A put option (right to sell).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Terminal payoff `max(φ(S − K), 0)`.
    #[inline]
    pub fn payoff(self, spot: Real, strike: Real) -> Real {
        match self {
            OptionType::Call => (spot - strike).max(0.0),
            OptionType::Put => (strike - spot).max(0.0),
        }
    }

    /// Value at the bottom of the price axis (`S = 0`), given the discount
    /// factor from the current time level to maturity.
    ///
    /// A call is worthless there; a put is worth the discounted strike.
    #[inline]
    pub fn lower_boundary(self, strike: Real, discount: DiscountFactor) -> Real {
        match self {
            OptionType::Call => 0.0,
            OptionType::Put => strike * discount,
        }
    }

    /// Value at the top of the price axis (`S = price_cap`), given the
    /// discount factor from the current time level to maturity.
    ///
    /// A call is deep in the money there and worth `Smax − K·df`; a put is
    /// worthless.
    #[inline]
    pub fn upper_boundary(self, price_cap: Real, strike: Real, discount: DiscountFactor) -> Real {
        match self {
            OptionType::Call => price_cap - strike * discount,
            OptionType::Put => 0.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = Error;

    /// Accepts `C`/`call` and `P`/`put`, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "call" => Ok(OptionType::Call),
            "p" | "put" => Ok(OptionType::Put),
            other => Err(Error::Configuration(format!(
                "unknown option type '{other}', expected call or put"
            ))),
        }
    }
}
