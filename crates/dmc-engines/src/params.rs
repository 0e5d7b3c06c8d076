//! Pricing-call inputs and their validation.

use dmc_core::{ensure, errors::Result, DiscountFactor, Rate, Real, Size, Time, Volatility};

/// The immutable inputs to one Monte Carlo pricing call.
///
/// A parameter set is frozen at the call boundary: the pricer validates it,
/// runs every trial against the same values, and never writes back. Field
/// order follows the pricing operations' argument list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Number of independent simulation trials (≥ 1).
    pub num_simulations: Size,
    /// Spot price of the underlying (> 0).
    pub spot: Real,
    /// Strike price (> 0).
    pub strike: Real,
    /// Continuously compounded risk-free rate (finite).
    pub rate: Rate,
    /// Volatility of the underlying (≥ 0).
    pub volatility: Volatility,
    /// Time to maturity in years (≥ 0).
    pub maturity: Time,
}

impl SimulationParameters {
    /// Create a parameter set.
    pub fn new(
        num_simulations: Size,
        spot: Real,
        strike: Real,
        rate: Rate,
        volatility: Volatility,
        maturity: Time,
    ) -> Self {
        Self {
            num_simulations,
            spot,
            strike,
            rate,
            volatility,
            maturity,
        }
    }

    /// Check every precondition, failing on the first violation.
    ///
    /// The ordered comparisons also reject NaN in `spot`, `strike`,
    /// `volatility`, and `maturity`; `rate` enters the discount factor
    /// unbounded and is required to be finite explicitly.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.num_simulations >= 1,
            "num_simulations must be at least 1, got {}",
            self.num_simulations
        );
        ensure!(self.spot > 0.0, "spot must be positive, got {}", self.spot);
        ensure!(
            self.strike > 0.0,
            "strike must be positive, got {}",
            self.strike
        );
        ensure!(self.rate.is_finite(), "rate must be finite, got {}", self.rate);
        ensure!(
            self.volatility >= 0.0,
            "volatility must be non-negative, got {}",
            self.volatility
        );
        ensure!(
            self.maturity >= 0.0,
            "maturity must be non-negative, got {}",
            self.maturity
        );
        Ok(())
    }

    /// The discount factor `exp(−r·T)` implied by the rate and maturity.
    pub fn discount_factor(&self) -> DiscountFactor {
        (-self.rate * self.maturity).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dmc_core::Error;

    fn valid() -> SimulationParameters {
        SimulationParameters::new(10_000, 100.0, 100.0, 0.05, 0.2, 1.0)
    }

    #[test]
    fn valid_parameters_pass() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn zero_simulations_rejected() {
        let mut p = valid();
        p.num_simulations = 0;
        assert!(matches!(p.validate(), Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn non_positive_spot_rejected() {
        let mut p = valid();
        p.spot = 0.0;
        assert!(p.validate().is_err());
        p.spot = -100.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn non_positive_strike_rejected() {
        let mut p = valid();
        p.strike = 0.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn non_finite_rate_rejected() {
        let mut p = valid();
        p.rate = f64::INFINITY;
        assert!(p.validate().is_err());
        p.rate = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn negative_volatility_rejected() {
        let mut p = valid();
        p.volatility = -0.2;
        assert!(p.validate().is_err());
    }

    #[test]
    fn negative_maturity_rejected() {
        let mut p = valid();
        p.maturity = -1.0;
        assert!(p.validate().is_err());
    }

    #[test]
    fn nan_inputs_rejected() {
        for field in 0..4 {
            let mut p = valid();
            match field {
                0 => p.spot = f64::NAN,
                1 => p.strike = f64::NAN,
                2 => p.volatility = f64::NAN,
                _ => p.maturity = f64::NAN,
            }
            assert!(p.validate().is_err(), "NaN field {field} slipped through");
        }
    }

    #[test]
    fn degenerate_maturity_and_volatility_allowed() {
        let mut p = valid();
        p.maturity = 0.0;
        assert!(p.validate().is_ok());
        p.maturity = 1.0;
        p.volatility = 0.0;
        assert!(p.validate().is_ok());
    }

    #[test]
    fn discount_factor_value() {
        let p = valid();
        assert!((p.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
        let mut zero_t = p;
        zero_t.maturity = 0.0;
        assert_eq!(zero_t.discount_factor(), 1.0);
    }
}
