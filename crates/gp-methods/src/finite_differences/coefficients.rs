//! Stencil coefficients of the explicit scheme and their stability
//! diagnostic.

use gp_core::{Rate, Real, Time, Volatility};

/// The three scalar weights of the discretised PDE.
///
/// * `α = ½σ²·dt/ds²` — diffusion between adjacent price levels
/// * `β = ½r·dt/ds` — drift
/// * `γ = r·dt` — discounting
///
/// They are computed once per solve and shared by every interior cell of
/// every time step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StencilCoefficients {
    /// Diffusion weight `α`.
    pub alpha: Real,
    /// Drift weight `β`.
    pub beta: Real,
    /// Discount weight `γ`.
    pub gamma: Real,
}

impl StencilCoefficients {
    /// Derive the coefficients from the market inputs and grid steps.
    pub fn new(volatility: Volatility, rate: Rate, dt: Time, ds: Real) -> Self {
        Self {
            alpha: 0.5 * volatility * volatility * dt / (ds * ds),
            beta: 0.5 * rate * dt / ds,
            gamma: rate * dt,
        }
    }

    /// Weight applied to `C[i−1, j+1]`.
    #[inline]
    pub fn lower_weight(&self) -> Real {
        self.alpha
    }

    /// Weight applied to `C[i, j+1]`: `1 − 2α − β + γ`.
    #[inline]
    pub fn center_weight(&self) -> Real {
        1.0 - 2.0 * self.alpha - self.beta + self.gamma
    }

    /// Combined weight applied to `C[i+1, j+1]`: `α + β`.
    #[inline]
    pub fn upper_weight(&self) -> Real {
        self.alpha + self.beta
    }

    /// One interior update from the later column `next` at price level `i`:
    ///
    /// `α·C[i+1] + (1 − 2α − β + γ)·C[i] + α·C[i−1] + β·C[i+1]`
    ///
    /// `i` must satisfy `1 ≤ i < next.len() − 1`.
    #[inline]
    pub fn apply(&self, next: &[Real], i: usize) -> Real {
        let center = self.center_weight();
        self.alpha * next[i + 1]
            + center * next[i]
            + self.alpha * next[i - 1]
            + self.beta * next[i + 1]
    }

    /// Stability diagnostic for these coefficients.
    pub fn stability(&self) -> StabilityReport {
        StabilityReport::from(*self)
    }
}

/// Advisory report on the numerical stability of the explicit scheme.
///
/// The scheme is conditionally stable: a fine price grid, a coarse time grid
/// or high volatility inflate `α` and can drive the center weight negative,
/// after which values oscillate or diverge. The solver never adjusts the
/// grid in response; the report only describes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StabilityReport {
    /// Diffusion weight `α`.
    pub alpha: Real,
    /// Drift weight `β`.
    pub beta: Real,
    /// Discount weight `γ`.
    pub gamma: Real,
    /// Weight on the lower neighbour.
    pub lower_weight: Real,
    /// Weight on the cell itself.
    pub center_weight: Real,
    /// Weight on the upper neighbour.
    pub upper_weight: Real,
}

impl StabilityReport {
    /// `true` when all three stencil weights are finite and non-negative,
    /// so each new value is a positive combination of the later column.
    pub fn is_stable(&self) -> bool {
        [self.lower_weight, self.center_weight, self.upper_weight]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }

    /// `true` when the center weight lies in `[0, 1]`.
    pub fn center_in_unit_interval(&self) -> bool {
        (0.0..=1.0).contains(&self.center_weight)
    }

    /// Sum of the stencil weights (`1 + γ`): the per-step growth factor of a
    /// column that is constant in price.
    pub fn growth_factor(&self) -> Real {
        self.lower_weight + self.center_weight + self.upper_weight
    }
}

impl From<StencilCoefficients> for StabilityReport {
    fn from(c: StencilCoefficients) -> Self {
        Self {
            alpha: c.alpha,
            beta: c.beta,
            gamma: c.gamma,
            lower_weight: c.lower_weight(),
            center_weight: c.center_weight(),
            upper_weight: c.upper_weight(),
        }
    }
}
