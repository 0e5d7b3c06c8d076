//! Error types for digitalmc-rs.
//!
//! A pricing call either fully succeeds or fails outright: invalid inputs
//! surface before any trial runs, and numeric degeneracies inside the
//! normal sampler surface as faults instead of letting NaN or infinity
//! leak into a price.

use thiserror::Error;

/// The top-level error type used throughout digitalmc-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A pricing input failed validation (raised by `ensure!`).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A sampler could not produce a usable draw (raised by `fail!`).
    #[error("degenerate sample: {0}")]
    DegenerateSample(String),
}

/// Shorthand `Result` type used throughout digitalmc-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a pricing input.
///
/// Returns `Err(Error::InvalidParameter(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dmc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> dmc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidParameter(
                format!($($msg)*)
            ));
        }
    };
}

/// Abort a computation whose sample source has gone degenerate.
///
/// Returns `Err(Error::DegenerateSample(...))` immediately.
///
/// # Example
/// ```
/// use dmc_core::{fail, errors::Error};
/// fn always_err() -> dmc_core::errors::Result<f64> {
///     fail!("uniform source is defective");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::DegenerateSample(format!($($msg)*)))
    };
}
