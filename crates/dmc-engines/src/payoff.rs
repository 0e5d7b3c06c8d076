//! Digital option payoffs.
//!
//! A digital (cash-or-nothing) option pays one unit of cash when the
//! terminal price satisfies the strike condition and nothing otherwise.

use dmc_core::{Price, Real};
use std::fmt;

/// Option type (call or put).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A call option (pays when the terminal price is at or above strike).
    Call,
    /// A put option (pays when the terminal price is at or below strike).
    Put,
}

impl OptionType {
    /// +1 for Call, −1 for Put.
    pub fn sign(self) -> Real {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// The Heaviside step function: 1 for `x ≥ 0`, else 0.
///
/// Both digital legs use the `≥` convention, so a terminal price exactly
/// at the strike pays the call and the put alike. The event has
/// probability zero under the lognormal model.
#[inline]
pub fn heaviside(x: Real) -> Real {
    if x >= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Cash-or-nothing payoff paying one unit of cash.
///
/// `payoff = H(φ(S − K))` where `φ = +1` for Call, `−1` for Put.
#[derive(Debug, Clone, Copy)]
pub struct DigitalPayoff {
    /// Option type.
    pub option_type: OptionType,
    /// Strike price.
    pub strike: Real,
}

impl DigitalPayoff {
    /// Create a new digital payoff.
    pub fn new(option_type: OptionType, strike: Real) -> Self {
        Self {
            option_type,
            strike,
        }
    }

    /// Payoff indicator for a terminal price.
    pub fn value(&self, terminal_price: Real) -> Price {
        heaviside(self.option_type.sign() * (terminal_price - self.strike))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digital_call() {
        let p = DigitalPayoff::new(OptionType::Call, 100.0);
        assert_eq!(p.value(110.0), 1.0);
        assert_eq!(p.value(90.0), 0.0);
    }

    #[test]
    fn digital_put() {
        let p = DigitalPayoff::new(OptionType::Put, 100.0);
        assert_eq!(p.value(90.0), 1.0);
        assert_eq!(p.value(110.0), 0.0);
    }

    #[test]
    fn both_legs_pay_at_the_strike() {
        let call = DigitalPayoff::new(OptionType::Call, 100.0);
        let put = DigitalPayoff::new(OptionType::Put, 100.0);
        assert_eq!(call.value(100.0), 1.0);
        assert_eq!(put.value(100.0), 1.0);
    }

    #[test]
    fn heaviside_boundary() {
        assert_eq!(heaviside(0.0), 1.0);
        assert_eq!(heaviside(1e-300), 1.0);
        assert_eq!(heaviside(-1e-300), 0.0);
    }

    #[test]
    fn option_type_sign_and_display() {
        assert_eq!(OptionType::Call.sign(), 1.0);
        assert_eq!(OptionType::Put.sign(), -1.0);
        assert_eq!(OptionType::Call.to_string(), "Call");
        assert_eq!(OptionType::Put.to_string(), "Put");
    }
}
