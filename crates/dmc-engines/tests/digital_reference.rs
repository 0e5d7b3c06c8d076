//! Monte Carlo digital prices checked against the closed form.
//!
//! The closed-form engine prices `exp(−rT)·N(±d₂)` without touching a
//! random stream, so it is the reference every simulated estimate must
//! approach. The payoff is Bernoulli, which makes the standard error of
//! an estimate `exp(−rT)·√(p(1−p)/N)`; tolerances below sit at five or
//! more standard errors, and every run is seeded, so these tests are
//! deterministic.

use dmc_engines::{
    digital_call_price, digital_put_price, mc_digital_call_price, mc_digital_put_price,
    McDigitalEngine, SimulationParameters,
};
use dmc_math::random_numbers::{
    CachedPolarGaussianRng, GaussianRng, InverseCumulativeGaussianRng, PolarGaussianRng,
    ZigguratGaussianRng,
};
use dmc_math::SampleStatistics;
use proptest::prelude::*;

/// The scenario from the original digital pricer: S=100, K=100, r=5%,
/// σ=20%, T=1. Closed form: d₂ = 0.15, call ≈ 0.532325, put ≈ 0.418905.
fn atm(num_simulations: usize) -> SimulationParameters {
    SimulationParameters::new(num_simulations, 100.0, 100.0, 0.05, 0.2, 1.0)
}

// ─── Monte Carlo vs closed form ───────────────────────────────────────────────

#[test]
fn mc_call_matches_the_closed_form_atm() {
    let p = atm(400_000);
    let reference = digital_call_price(p.spot, p.strike, p.rate, p.volatility, p.maturity);
    let estimate = mc_digital_call_price(&p, 42).unwrap();
    // standard error ≈ 7.5e-4 at this N
    assert!(
        (estimate - reference).abs() < 0.005,
        "MC call {estimate:.6} vs closed form {reference:.6}"
    );
}

#[test]
fn mc_put_matches_the_closed_form_atm() {
    let p = atm(400_000);
    let reference = digital_put_price(p.spot, p.strike, p.rate, p.volatility, p.maturity);
    let estimate = mc_digital_put_price(&p, 42).unwrap();
    assert!(
        (estimate - reference).abs() < 0.005,
        "MC put {estimate:.6} vs closed form {reference:.6}"
    );
}

#[test]
fn mc_matches_the_closed_form_away_from_the_money() {
    for spot in [90.0, 110.0] {
        let mut p = atm(400_000);
        p.spot = spot;
        let call_ref = digital_call_price(p.spot, p.strike, p.rate, p.volatility, p.maturity);
        let put_ref = digital_put_price(p.spot, p.strike, p.rate, p.volatility, p.maturity);
        let call = mc_digital_call_price(&p, 42).unwrap();
        let put = mc_digital_put_price(&p, 43).unwrap();
        assert!(
            (call - call_ref).abs() < 0.005,
            "S={spot}: MC call {call:.6} vs {call_ref:.6}"
        );
        assert!(
            (put - put_ref).abs() < 0.005,
            "S={spot}: MC put {put:.6} vs {put_ref:.6}"
        );
    }
}

// ─── Digital parity ───────────────────────────────────────────────────────────

#[test]
fn independently_seeded_call_and_put_satisfy_parity_within_noise() {
    // Call and put payoffs sum to 1 on every off-boundary draw, so the
    // prices must sum to exp(−rT) up to two independent sampling errors
    // (combined standard error ≈ 1.1e-3 at this N).
    let p = atm(400_000);
    let call = mc_digital_call_price(&p, 42).unwrap();
    let put = mc_digital_put_price(&p, 43).unwrap();
    let df = p.discount_factor();
    assert!(
        (call + put - df).abs() < 0.006,
        "call {call:.6} + put {put:.6} = {:.6}, expected {df:.6}",
        call + put
    );
}

#[test]
fn common_seed_makes_call_and_put_exactly_complementary() {
    // One seed means one draw sequence for both legs: each trial pays
    // exactly one of the two, so the estimates sum to exp(−rT) to float
    // rounding, not merely within Monte Carlo noise.
    let p = atm(100_000);
    let call = mc_digital_call_price(&p, 777).unwrap();
    let put = mc_digital_put_price(&p, 777).unwrap();
    let df = p.discount_factor();
    assert!(
        (call + put - df).abs() < 1e-12,
        "call {call} + put {put} differs from {df}"
    );
}

// ─── Sampler cross-checks ─────────────────────────────────────────────────────

fn call_estimate<G: GaussianRng>(rng: G, params: &SimulationParameters) -> f64 {
    McDigitalEngine::new(rng).call_price(params).unwrap()
}

#[test]
fn all_samplers_agree_with_the_closed_form() {
    let p = atm(200_000);
    let reference = digital_call_price(p.spot, p.strike, p.rate, p.volatility, p.maturity);
    let estimates = [
        ("polar", call_estimate(PolarGaussianRng::from_seed(42), &p)),
        (
            "cached polar",
            call_estimate(CachedPolarGaussianRng::from_seed(42), &p),
        ),
        (
            "inverse cumulative",
            call_estimate(InverseCumulativeGaussianRng::from_seed(42), &p),
        ),
        ("ziggurat", call_estimate(ZigguratGaussianRng::from_seed(42), &p)),
    ];
    for (name, estimate) in estimates {
        assert!(
            (estimate - reference).abs() < 0.006,
            "{name}: {estimate:.6} vs closed form {reference:.6}"
        );
    }
}

// ─── Convergence in the trial count ───────────────────────────────────────────

#[test]
fn estimator_spread_shrinks_with_the_trial_count() {
    // Standard error scales as 1/√N: forty times the trials cuts the
    // spread of repeated estimates by a factor ≈ 6.3. Assert a factor 2
    // to leave room for the spread estimates' own noise.
    let spread = |num_simulations: usize, seed_base: u64| {
        let p = atm(num_simulations);
        let mut stats = SampleStatistics::new();
        for i in 0..20 {
            stats.add(mc_digital_call_price(&p, seed_base + i).unwrap());
        }
        stats.std_dev().unwrap()
    };

    let coarse = spread(2_000, 1_000);
    let fine = spread(80_000, 2_000);
    assert!(
        fine < coarse / 2.0,
        "spread at 80k trials ({fine:.6}) should be well below half the \
         spread at 2k trials ({coarse:.6})"
    );
}

// ─── Property tests ───────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Estimates are finite and bounded by the discount factor over a box
    /// of valid parameters, for any seed.
    #[test]
    fn estimates_respect_the_payoff_bounds(
        seed in any::<u64>(),
        spot in 1.0..200.0f64,
        strike in 1.0..200.0f64,
        rate in -0.05..0.15f64,
        volatility in 0.0..0.8f64,
        maturity in 0.0..3.0f64,
    ) {
        let p = SimulationParameters::new(500, spot, strike, rate, volatility, maturity);
        let df = p.discount_factor();
        let call = mc_digital_call_price(&p, seed).unwrap();
        let put = mc_digital_put_price(&p, seed.wrapping_add(1)).unwrap();
        prop_assert!(call.is_finite() && put.is_finite());
        prop_assert!((0.0..=df).contains(&call), "call {} escapes [0, {}]", call, df);
        prop_assert!((0.0..=df).contains(&put), "put {} escapes [0, {}]", put, df);
    }
}
