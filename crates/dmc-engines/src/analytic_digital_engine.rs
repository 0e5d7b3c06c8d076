//! Closed-form pricing of European digital options.
//!
//! Under Black-Scholes a cash-or-nothing digital paying one unit has
//!
//! ```text
//! call = exp(−rT)·N(d₂)      put = exp(−rT)·N(−d₂)
//! d₂ = (ln(S/K) + (r − σ²/2)·T) / (σ·√T)
//! ```
//!
//! This engine is the RNG-independent reference the Monte Carlo estimates
//! are checked against. Its degenerate branches use the same heaviside
//! boundary convention as the simulation loop, so the two engines agree
//! even when the terminal price sits exactly on the strike.

use crate::payoff::{heaviside, OptionType};
use dmc_core::{Price, Rate, Real, Time, Volatility};
use dmc_math::distributions::normal_cdf;

/// Closed-form price of a European digital option paying one unit.
///
/// Degenerate inputs collapse to indicator prices: at expiry (`T ≤ 0`)
/// the undiscounted `H(φ·(S − K))`, and at zero variance the discounted
/// indicator on the forward `S·exp(rT)`.
pub fn digital_price(
    option_type: OptionType,
    spot: Real,
    strike: Real,
    rate: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Price {
    let phi = option_type.sign();

    if maturity <= 0.0 {
        return heaviside(phi * (spot - strike));
    }

    let discount = (-rate * maturity).exp();
    let std_dev = volatility * maturity.sqrt();
    if std_dev < 1e-15 {
        let forward = spot * (rate * maturity).exp();
        return discount * heaviside(phi * (forward - strike));
    }

    let d2 =
        ((spot / strike).ln() + (rate - 0.5 * volatility * volatility) * maturity) / std_dev;
    discount * normal_cdf(phi * d2)
}

/// Closed-form digital call price `exp(−rT)·N(d₂)`.
pub fn digital_call_price(
    spot: Real,
    strike: Real,
    rate: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Price {
    digital_price(OptionType::Call, spot, strike, rate, volatility, maturity)
}

/// Closed-form digital put price `exp(−rT)·N(−d₂)`.
pub fn digital_put_price(
    spot: Real,
    strike: Real,
    rate: Rate,
    volatility: Volatility,
    maturity: Time,
) -> Price {
    digital_price(OptionType::Put, spot, strike, rate, volatility, maturity)
}
