//! `ValueGrid` — the dense `(M+1) × (N+1)` array of option values.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>`: row `i` is the price
//! level `S_i = i·ds`, column `j` the time level `t_j = j·dt`. Column `N` is
//! maturity, column `0` is now.

use gp_core::{Real, Result, Size};
use gp_math::{Interpolation1D, LinearInterpolation};
use nalgebra::DMatrix;
use std::ops::Index;

/// Option values `C[i, j]` over the whole (price, time) grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueGrid {
    values: DMatrix<Real>,
    price_axis: Vec<Real>,
}

impl ValueGrid {
    /// Zero-filled grid over `price_axis` with `time_steps + 1` columns.
    pub(crate) fn zeros(price_axis: Vec<Real>, time_steps: Size) -> Self {
        let rows = price_axis.len();
        Self {
            values: DMatrix::zeros(rows, time_steps + 1),
            price_axis,
        }
    }

    /// Overwrite column `j` with `column`.
    pub(crate) fn set_column(&mut self, j: Size, column: &[Real]) {
        self.values.column_mut(j).copy_from_slice(column);
    }

    /// Number of price levels (`M + 1`).
    pub fn price_levels(&self) -> Size {
        self.values.nrows()
    }

    /// Number of time steps `N` (the grid has `N + 1` columns).
    pub fn time_steps(&self) -> Size {
        self.values.ncols() - 1
    }

    /// Value at price level `i` and time level `j`.
    pub fn value(&self, i: Size, j: Size) -> Real {
        self.values[(i, j)]
    }

    /// Copy of time column `j`, indexed by price level.
    pub fn column(&self, j: Size) -> Vec<Real> {
        self.values.column(j).iter().copied().collect()
    }

    /// The price levels `S_i`.
    pub fn price_axis(&self) -> &[Real] {
        &self.price_axis
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.values
    }

    /// Linearly interpolate the `t = 0` column at `spot`.
    ///
    /// Spots outside `[0, Smax]` are extrapolated from the edge segment.
    pub fn interpolate(&self, spot: Real) -> Result<Real> {
        let interp = LinearInterpolation::new(&self.price_axis, &self.column(0))?;
        Ok(interp.operator(spot))
    }
}

impl Index<(Size, Size)> for ValueGrid {
    type Output = Real;
    fn index(&self, (i, j): (Size, Size)) -> &Real {
        &self.values[(i, j)]
    }
}
