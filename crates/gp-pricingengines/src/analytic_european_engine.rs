//! Closed-form Black-Scholes pricing of European vanilla options.
//!
//! Used as the reference the grid price converges to, and as a second model
//! output a caller may place next to the finite-difference price.

use gp_core::{Rate, Real, Time, Volatility};
use gp_instruments::OptionType;
use gp_math::normal_cdf;

/// Black-Scholes price of a European option without dividends.
///
/// `φ·(S·N(φ·d1) − K·e^(−rT)·N(φ·d2))` with `φ = +1` for a call and `−1` for
/// a put. At or past expiry the intrinsic value is returned; with zero
/// volatility the price is the discounted intrinsic value of the forward.
pub fn black_scholes_price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    risk_free_rate: Rate,
    volatility: Volatility,
    time_to_expiry: Time,
) -> Real {
    let phi = option_type.sign();
    let t = time_to_expiry;

    if t <= 0.0 {
        return (phi * (spot - strike)).max(0.0);
    }

    let r = risk_free_rate;
    let std_dev = volatility * t.sqrt();
    let df = (-r * t).exp();

    if std_dev <= 1e-15 {
        return (phi * (spot - strike * df)).max(0.0);
    }

    let d1 = ((spot / strike).ln() + (r + 0.5 * volatility * volatility) * t) / std_dev;
    let d2 = d1 - std_dev;

    phi * (spot * normal_cdf(phi * d1) - strike * df * normal_cdf(phi * d2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn textbook_call_and_put() {
        // S=100, K=100, r=5%, σ=20%, T=1
        let call = black_scholes_price(OptionType::Call, 100.0, 100.0, 0.05, 0.20, 1.0);
        let put = black_scholes_price(OptionType::Put, 100.0, 100.0, 0.05, 0.20, 1.0);
        assert_abs_diff_eq!(call, 10.450_583_572_185_565, epsilon = 1e-9);
        assert_abs_diff_eq!(put, 5.573_526_022_256_971, epsilon = 1e-9);
    }

    #[test]
    fn put_call_parity() {
        let (s, k, r, v, t) = (30_095.0, 25_000.0, 0.0014, 0.649, 0.049);
        let call = black_scholes_price(OptionType::Call, s, k, r, v, t);
        let put = black_scholes_price(OptionType::Put, s, k, r, v, t);
        assert_abs_diff_eq!(call - put, s - k * (-r * t).exp(), epsilon = 1e-8);
    }

    #[test]
    fn expired_and_zero_vol() {
        assert_eq!(black_scholes_price(OptionType::Call, 110.0, 100.0, 0.05, 0.2, 0.0), 10.0);
        assert_eq!(black_scholes_price(OptionType::Put, 110.0, 100.0, 0.05, 0.2, 0.0), 0.0);
        let zero_vol = black_scholes_price(OptionType::Call, 110.0, 100.0, 0.05, 0.0, 1.0);
        assert_abs_diff_eq!(zero_vol, 110.0 - 100.0 * (-0.05_f64).exp(), epsilon = 1e-12);
    }
}
