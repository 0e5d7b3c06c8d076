//! Probability distributions.
//!
//! Only the standard normal is needed by the digital pricers: the density,
//! the cumulative distribution, and its inverse.

pub mod normal;

pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};
