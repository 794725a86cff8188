//! Grid specification for the explicit solver.

use gp_core::{ensure_config, Real, Result, Size, Time};

/// Discretisation of the (price, time) domain.
///
/// Only the step counts and the price cap are stored; `dt = T/N` and
/// `ds = Smax/M` are derived on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FdGridSpec {
    /// Number of time steps `N`.
    pub time_steps: Size,
    /// Number of price steps `M`.
    pub price_steps: Size,
    /// Maximum modelled underlying price `Smax`.
    ///
    /// A truncation boundary of the PDE domain, not a market bound: it must
    /// sit well above the strike and any spot of interest.
    pub price_cap: Real,
}

impl FdGridSpec {
    /// Create a grid specification. Call [`FdGridSpec::validate`] before use.
    pub fn new(time_steps: Size, price_steps: Size, price_cap: Real) -> Self {
        Self {
            time_steps,
            price_steps,
            price_cap,
        }
    }

    /// Grid whose price cap is `multiple × strike`.
    pub fn with_price_cap_multiple(
        strike: Real,
        multiple: Real,
        time_steps: Size,
        price_steps: Size,
    ) -> Self {
        Self::new(time_steps, price_steps, strike * multiple)
    }

    /// # Errors
    /// [`gp_core::Error::Configuration`] when either step count is zero, the
    /// price cap is not a positive finite number, or the price step
    /// `Smax / M` underflows to zero.
    pub fn validate(&self) -> Result<()> {
        ensure_config!(
            self.time_steps > 0,
            "number of time steps must be positive, got {}",
            self.time_steps
        );
        ensure_config!(
            self.price_steps > 0,
            "number of price steps must be positive, got {}",
            self.price_steps
        );
        ensure_config!(
            self.price_cap.is_finite() && self.price_cap > 0.0,
            "price cap must be positive, got {}",
            self.price_cap
        );
        ensure_config!(
            self.ds() > 0.0,
            "price step underflows to zero for price cap {} and {} price steps",
            self.price_cap,
            self.price_steps
        );
        Ok(())
    }

    /// Time step `dt = T / N`.
    #[inline]
    pub fn dt(&self, maturity: Time) -> Time {
        maturity / self.time_steps as Real
    }

    /// Price step `ds = Smax / M`.
    #[inline]
    pub fn ds(&self) -> Real {
        self.price_cap / self.price_steps as Real
    }

    /// Price levels `S_i = i·ds` for `i = 0..=M`.
    pub fn price_axis(&self) -> Vec<Real> {
        let ds = self.ds();
        (0..=self.price_steps).map(|i| i as Real * ds).collect()
    }

    /// Time levels `t_j = j·dt` for `j = 0..=N`.
    pub fn time_axis(&self, maturity: Time) -> Vec<Time> {
        let dt = self.dt(maturity);
        (0..=self.time_steps).map(|j| j as Real * dt).collect()
    }
}
