//! # dmc-math
//!
//! Mathematical support for the pricing engines: standard-normal
//! distribution functions, uniform and Gaussian random number
//! generation, and a running-moment statistics accumulator.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Probability distributions.
pub mod distributions;

/// Random number generators.
pub mod random_numbers;

/// Statistics accumulators.
pub mod statistics;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use distributions::{normal_cdf, normal_cdf_inverse, normal_pdf};
pub use random_numbers::{
    CachedPolarGaussianRng, GaussianRng, InverseCumulativeGaussianRng,
    MersenneTwisterUniformRng, PolarGaussianRng, UniformRng, ZigguratGaussianRng,
};
pub use statistics::SampleStatistics;
