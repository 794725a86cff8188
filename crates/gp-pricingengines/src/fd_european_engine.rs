//! Finite-difference engine for European vanilla options.

use gp_core::{Rate, Real, Result, Size, Time, Volatility};
use gp_instruments::{OptionType, VanillaContract};
use gp_methods::{ExplicitFdSolver, FdGridSpec, StabilityReport};
use tracing::debug;

/// Outcome of a finite-difference pricing call, with the step sizes and
/// stability diagnostic of the grid that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FdPricingResult {
    /// Option value at the requested spot.
    pub value: Real,
    /// Time step used.
    pub dt: Time,
    /// Price step used.
    pub ds: Real,
    /// Advisory stability report of the stencil.
    pub stability: StabilityReport,
}

/// Prices vanilla contracts on a fixed explicit finite-difference grid.
#[derive(Debug, Clone, Copy)]
pub struct FdEuropeanEngine {
    grid: FdGridSpec,
}

impl FdEuropeanEngine {
    /// Create an engine on `grid`.
    ///
    /// # Errors
    /// [`gp_core::Error::Configuration`] if the grid is invalid.
    pub fn new(grid: FdGridSpec) -> Result<Self> {
        grid.validate()?;
        Ok(Self { grid })
    }

    /// The grid this engine prices on.
    pub fn grid(&self) -> &FdGridSpec {
        &self.grid
    }

    /// Price `contract` at `spot`, returning the value with its diagnostics.
    pub fn calculate(&self, contract: &VanillaContract, spot: Real) -> Result<FdPricingResult> {
        let solver = ExplicitFdSolver::new(*contract, self.grid)?;
        let value = solver.price(spot)?;
        debug!(kind = %contract.kind, spot, value, "finite-difference price");
        Ok(FdPricingResult {
            value,
            dt: solver.dt(),
            ds: solver.ds(),
            stability: solver.stability(),
        })
    }

    /// Price `contract` at `spot`.
    pub fn price(&self, contract: &VanillaContract, spot: Real) -> Result<Real> {
        self.calculate(contract, spot).map(|r| r.value)
    }
}

/// Price a vanilla option with the explicit finite-difference scheme.
///
/// * `kind` — call or put
/// * `spot` — current underlying price `S0`
/// * `strike` — strike `K`
/// * `rate` — risk-free rate `r`
/// * `maturity` — time to maturity `T` in years
/// * `volatility` — volatility `σ`
/// * `price_cap` — truncation level `Smax`, several multiples of the strike
/// * `time_steps` — `N`
/// * `price_steps` — `M`
///
/// # Errors
/// [`gp_core::Error::Configuration`] for zero step counts, a non-positive
/// price cap, or an invalid contract; nothing is computed in that case.
///
/// # Example
/// ```
/// use gp_instruments::OptionType;
/// use gp_pricingengines::fd_option_price;
///
/// let price = fd_option_price(
///     OptionType::Call, 30_095.0, 25_000.0, 0.0014, 0.049, 0.649, 50_000.0, 1000, 100,
/// )
/// .unwrap();
/// assert!(price.is_finite() && price > 5_000.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn fd_option_price(
    kind: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    maturity: Time,
    volatility: Volatility,
    price_cap: Real,
    time_steps: Size,
    price_steps: Size,
) -> Result<Real> {
    let contract = VanillaContract::new(kind, strike, rate, maturity, volatility);
    let grid = FdGridSpec::new(time_steps, price_steps, price_cap);
    ExplicitFdSolver::new(contract, grid)?.price(spot)
}
