//! # dmc-engines
//!
//! Pricing engines for European digital (cash-or-nothing) options under
//! the Black-Scholes lognormal model: a Monte Carlo engine simulating
//! terminal prices one normal draw per trial, and the closed-form engine
//! used to cross-check it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Digital option payoffs.
pub mod payoff;

/// Pricing-call inputs and their validation.
pub mod params;

/// Monte Carlo digital option engine.
pub mod mc_digital_engine;

/// Closed-form digital option engine.
pub mod analytic_digital_engine;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use analytic_digital_engine::{digital_call_price, digital_price, digital_put_price};
pub use mc_digital_engine::{mc_digital_call_price, mc_digital_put_price, McDigitalEngine};
pub use params::SimulationParameters;
pub use payoff::{heaviside, DigitalPayoff, OptionType};
