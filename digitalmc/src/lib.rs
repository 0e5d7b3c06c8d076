//! # digitalmc
//!
//! Monte Carlo pricing of European digital (cash-or-nothing) options
//! under the Black-Scholes lognormal model.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dmc-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! digitalmc = "0.1"
//! ```
//!
//! ```rust
//! use digitalmc::engines::{mc_digital_call_price, SimulationParameters};
//!
//! let params = SimulationParameters::new(10_000, 100.0, 100.0, 0.05, 0.2, 1.0);
//! let price = mc_digital_call_price(&params, 42).unwrap();
//! assert!(price > 0.0 && price < 1.0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use dmc_core as core;

/// Normal distribution functions, random number generators, and sample
/// statistics.
pub use dmc_math as math;

/// Monte Carlo and closed-form digital option pricing engines.
pub use dmc_engines as engines;
