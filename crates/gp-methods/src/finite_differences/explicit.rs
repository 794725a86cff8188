//! Explicit finite-difference solver for the Black-Scholes PDE.

use super::coefficients::{StabilityReport, StencilCoefficients};
use super::grid::FdGridSpec;
use super::value_grid::ValueGrid;
use gp_core::{ensure_config, Real, Result, Size, Time};
use gp_instruments::VanillaContract;
use gp_math::{Interpolation1D, LinearInterpolation};
use tracing::{debug, warn};

/// Prices a vanilla option by sweeping the explicit scheme backward from
/// maturity.
///
/// The terminal column holds the payoff. Each earlier column `j` is built
/// from column `j+1` with the three-point stencil on the interior levels
/// `1..M`, after which the two edge cells are overwritten with the analytic
/// boundary values of the contract. Column 0 is then interpolated at the
/// spot.
///
/// `α` and `β` are scaled by the uniform step `ds` rather than by the price
/// level `S_i`, so they are the same for every cell. On coarse price grids
/// the diffusion term is therefore small and near-the-money values stay
/// close to the discounted payoff.
///
/// The scheme is conditionally stable and is run as specified whatever the
/// weights: see [`ExplicitFdSolver::stability`]. NaN or infinite values
/// produced by an unsuitable grid reach the result unchanged.
///
/// Inputs are validated once in [`ExplicitFdSolver::new`]; a constructed
/// solver cannot fail except on a non-finite spot.
#[derive(Debug, Clone)]
pub struct ExplicitFdSolver {
    contract: VanillaContract,
    grid: FdGridSpec,
}

impl ExplicitFdSolver {
    /// Create a solver for `contract` on `grid`.
    ///
    /// # Errors
    /// [`gp_core::Error::Configuration`] if either input fails validation.
    pub fn new(contract: VanillaContract, grid: FdGridSpec) -> Result<Self> {
        contract.validate()?;
        grid.validate()?;
        Ok(Self { contract, grid })
    }

    /// The contract being priced.
    pub fn contract(&self) -> &VanillaContract {
        &self.contract
    }

    /// The grid specification.
    pub fn grid(&self) -> &FdGridSpec {
        &self.grid
    }

    /// Time step `dt`.
    pub fn dt(&self) -> Time {
        self.grid.dt(self.contract.maturity)
    }

    /// Price step `ds`.
    pub fn ds(&self) -> Real {
        self.grid.ds()
    }

    /// Stencil coefficients for this contract and grid.
    pub fn coefficients(&self) -> StencilCoefficients {
        StencilCoefficients::new(
            self.contract.volatility,
            self.contract.rate,
            self.dt(),
            self.ds(),
        )
    }

    /// Advisory stability diagnostic. It has no effect on the computed values.
    pub fn stability(&self) -> StabilityReport {
        self.coefficients().stability()
    }

    /// Run the backward sweep keeping only two columns, and return column 0
    /// (the values at `t = 0`, indexed by price level).
    pub fn solve(&self) -> Vec<Real> {
        self.sweep(&self.grid.price_axis(), |_, _| {})
    }

    /// Run the backward sweep and keep every column.
    ///
    /// Values are bit-identical to those of [`ExplicitFdSolver::solve`].
    pub fn solve_grid(&self) -> ValueGrid {
        let axis = self.grid.price_axis();
        let mut grid = ValueGrid::zeros(axis.clone(), self.grid.time_steps);
        self.sweep(&axis, |j, column| grid.set_column(j, column));
        grid
    }

    /// Option value at `spot`, interpolated linearly on column 0.
    ///
    /// Spots outside `[0, price_cap]` are extrapolated from the edge segment
    /// and carry no accuracy guarantee.
    ///
    /// # Errors
    /// [`gp_core::Error::Configuration`] if `spot` is not finite.
    pub fn price(&self, spot: Real) -> Result<Real> {
        ensure_config!(spot.is_finite(), "spot must be finite, got {spot}");
        let axis = self.grid.price_axis();
        let now = self.sweep(&axis, |_, _| {});
        let interp = LinearInterpolation::from_vecs(axis, now)?;
        Ok(interp.operator(spot))
    }

    /// Backward sweep over `price_axis`. `visit(j, column)` sees every
    /// finished column, from `j = N` down to `j = 0`; column 0 is returned.
    fn sweep<F>(&self, price_axis: &[Real], mut visit: F) -> Vec<Real>
    where
        F: FnMut(Size, &[Real]),
    {
        let n = self.grid.time_steps;
        let m = self.grid.price_steps;
        let dt = self.dt();
        let coeffs = self.coefficients();
        let VanillaContract {
            kind,
            strike,
            rate,
            ..
        } = self.contract;
        let cap = self.grid.price_cap;

        debug!(
            %kind,
            dt,
            ds = self.ds(),
            alpha = coeffs.alpha,
            beta = coeffs.beta,
            gamma = coeffs.gamma,
            "explicit finite-difference sweep"
        );
        let stability = coeffs.stability();
        if !stability.is_stable() {
            warn!(
                alpha = stability.alpha,
                center_weight = stability.center_weight,
                upper_weight = stability.upper_weight,
                "stencil weights outside the stable region, values may oscillate or diverge"
            );
        }

        let mut next: Vec<Real> = price_axis.iter().map(|&s| kind.payoff(s, strike)).collect();
        visit(n, &next);

        let mut current = vec![0.0; m + 1];
        for j in (0..n).rev() {
            for i in 1..m {
                current[i] = coeffs.apply(&next, i);
            }
            let discount = (-rate * (n - j) as Real * dt).exp();
            current[0] = kind.lower_boundary(strike, discount);
            current[m] = kind.upper_boundary(cap, strike, discount);
            visit(j, &current);
            std::mem::swap(&mut next, &mut current);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use gp_instruments::OptionType;

    fn solver(kind: OptionType, r: Real, sigma: Real, t: Real, grid: FdGridSpec) -> ExplicitFdSolver {
        ExplicitFdSolver::new(VanillaContract::new(kind, 100.0, r, t, sigma), grid).unwrap()
    }

    fn standard(kind: OptionType) -> ExplicitFdSolver {
        solver(kind, 0.05, 0.25, 0.5, FdGridSpec::new(200, 40, 400.0))
    }

    #[test]
    fn terminal_column_is_the_payoff() {
        for kind in [OptionType::Call, OptionType::Put] {
            let s = standard(kind);
            let grid = s.solve_grid();
            let n = grid.time_steps();
            for (i, &price) in grid.price_axis().iter().enumerate() {
                assert_eq!(grid[(i, n)], kind.payoff(price, 100.0), "{kind} at level {i}");
            }
        }
    }

    #[test]
    fn boundaries_are_exact_at_every_time_level() {
        for kind in [OptionType::Call, OptionType::Put] {
            let s = standard(kind);
            let grid = s.solve_grid();
            let (n, m, dt) = (200, 40, s.dt());
            for j in 0..n {
                let df = (-0.05 * (n - j) as Real * dt).exp();
                match kind {
                    OptionType::Call => {
                        assert_eq!(grid[(0, j)], 0.0);
                        assert_eq!(grid[(m, j)], 400.0 - 100.0 * df);
                    }
                    OptionType::Put => {
                        assert_eq!(grid[(0, j)], 100.0 * df);
                        assert_eq!(grid[(m, j)], 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn call_and_put_share_the_boundary_discount() {
        let call = standard(OptionType::Call).solve_grid();
        let put = standard(OptionType::Put).solve_grid();
        for j in 0..200 {
            // C_call[M, j] = Smax − K·df and C_put[0, j] = K·df
            assert_eq!(call[(40, j)], 400.0 - put[(0, j)]);
        }
    }

    #[test]
    fn rolling_and_full_grid_agree_bitwise() {
        for kind in [OptionType::Call, OptionType::Put] {
            let s = standard(kind);
            assert_eq!(s.solve(), s.solve_grid().column(0));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let s = standard(OptionType::Put);
        let a = s.price(97.3).unwrap();
        let b = s.price(97.3).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn price_at_a_node_is_the_grid_value() {
        let s = standard(OptionType::Call);
        let now = s.solve();
        // node 11 sits at 11·10 = 110
        assert_eq!(s.price(110.0).unwrap(), now[11]);
        assert_eq!(s.price(0.0).unwrap(), now[0]);
        assert_eq!(s.price(400.0).unwrap(), now[40]);
    }

    #[test]
    fn price_between_nodes_is_linear() {
        let s = standard(OptionType::Call);
        let now = s.solve();
        assert_abs_diff_eq!(
            s.price(112.5).unwrap(),
            0.75 * now[11] + 0.25 * now[12],
            epsilon = 1e-12
        );
    }

    #[test]
    fn one_step_hand_computed() {
        // K = 1, Smax = 2, M = 2 → ds = 1; N = 1, T = 1, σ = 1 → α = ½; r = 0
        let c = VanillaContract::new(OptionType::Call, 1.0, 0.0, 1.0, 1.0);
        let s = ExplicitFdSolver::new(c, FdGridSpec::new(1, 2, 2.0)).unwrap();
        // C[1,0] = ½·C[2,1] + 0·C[1,1] + ½·C[0,1] = ½·1
        assert_eq!(s.solve(), vec![0.0, 0.5, 1.0]);
        assert_eq!(s.price(1.0).unwrap(), 0.5);
    }

    #[test]
    fn one_step_without_diffusion_or_rates() {
        // Smax = 2K, r = 0, σ = 0: column 0 is [0, 0, K]
        let c = VanillaContract::new(OptionType::Call, 100.0, 0.0, 1.0, 0.0);
        let s = ExplicitFdSolver::new(c, FdGridSpec::new(1, 2, 200.0)).unwrap();
        assert_eq!(s.price(100.0).unwrap(), 0.0);
        // halfway between the strike node and the cap: average of 0 and K
        assert_eq!(s.price(150.0).unwrap(), 50.0);
    }

    #[test]
    fn single_price_step_has_only_boundaries() {
        let c = VanillaContract::new(OptionType::Put, 100.0, 0.05, 1.0, 0.3);
        let s = ExplicitFdSolver::new(c, FdGridSpec::new(10, 1, 300.0)).unwrap();
        let now = s.solve();
        assert_eq!(now.len(), 2);
        assert_eq!(now[0], 100.0 * (-0.05 * 10.0 * 0.1_f64).exp());
        assert_eq!(now[1], 0.0);
    }

    #[test]
    fn zero_maturity_returns_the_payoff() {
        let c = VanillaContract::new(OptionType::Call, 100.0, 0.05, 0.0, 0.3);
        let s = ExplicitFdSolver::new(c, FdGridSpec::new(5, 40, 400.0)).unwrap();
        assert_eq!(s.price(130.0).unwrap(), 30.0);
        assert_eq!(s.price(60.0).unwrap(), 0.0);
    }

    #[test]
    fn spot_beyond_the_cap_is_extrapolated() {
        let s = standard(OptionType::Call);
        let now = s.solve();
        let slope = (now[40] - now[39]) / 10.0;
        assert_abs_diff_eq!(s.price(420.0).unwrap(), now[40] + 20.0 * slope, epsilon = 1e-9);
    }

    #[test]
    fn unstable_grid_is_reported_not_corrected() {
        // α = ½σ²·dt/ds² = ½·1·2/1 = 1 with a single coarse time step
        let c = VanillaContract::new(OptionType::Call, 5.0, 0.0, 2.0, 1.0);
        let s = ExplicitFdSolver::new(c, FdGridSpec::new(1, 10, 10.0)).unwrap();
        let report = s.stability();
        assert_abs_diff_eq!(report.alpha, 1.0, epsilon = 1e-15);
        assert!(!report.is_stable());
        // the stencil is applied as is: C[5,0] = α·C[6] + (1 − 2α)·C[5] + α·C[4]
        let now = s.solve();
        assert_abs_diff_eq!(now[5], 1.0 * 1.0 + (-1.0) * 0.0 + 1.0 * 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(now[6], 1.0 * 2.0 + (-1.0) * 1.0 + 1.0 * 0.0, epsilon = 1e-12);
    }

    #[test]
    fn configuration_errors_fail_fast() {
        let c = VanillaContract::new(OptionType::Call, 100.0, 0.05, 1.0, 0.2);
        for grid in [
            FdGridSpec::new(0, 10, 300.0),
            FdGridSpec::new(10, 0, 300.0),
            FdGridSpec::new(10, 10, 0.0),
        ] {
            assert!(ExplicitFdSolver::new(c, grid).unwrap_err().is_configuration());
        }
        let bad = VanillaContract::new(OptionType::Call, -1.0, 0.05, 1.0, 0.2);
        assert!(ExplicitFdSolver::new(bad, FdGridSpec::new(10, 10, 300.0))
            .unwrap_err()
            .is_configuration());
        assert!(standard(OptionType::Call).price(f64::NAN).unwrap_err().is_configuration());
    }

    #[test]
    fn diagnostics_are_emitted_through_tracing() {
        use tracing_subscriber::EnvFilter;
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new("debug"))
            .with_test_writer()
            .finish();
        let price = tracing::subscriber::with_default(subscriber, || {
            standard(OptionType::Call).price(100.0)
        });
        assert!(price.unwrap().is_finite());
    }
}
