//! Monte Carlo digital option pricing demonstration.
//!
//! Prices the classic at-the-money scenario — ten million paths, S=100,
//! K=100, r=5%, σ=20%, one year to expiry — and prints the inputs and
//! both prices. Call and put run on independently seeded engines, so
//! the two estimates carry independent Monte Carlo noise.

use digitalmc::core::errors::Result;
use digitalmc::engines::{mc_digital_call_price, mc_digital_put_price, SimulationParameters};

const CALL_SEED: u64 = 42;
const PUT_SEED: u64 = 43;

fn main() -> Result<()> {
    let params = SimulationParameters::new(10_000_000, 100.0, 100.0, 0.05, 0.2, 1.0);

    let call = mc_digital_call_price(&params, CALL_SEED)?;
    let put = mc_digital_put_price(&params, PUT_SEED)?;

    println!("Number of Paths: {}", params.num_simulations);
    println!("Underlying:      {}", params.spot);
    println!("Strike:          {}", params.strike);
    println!("Risk-Free Rate:  {}", params.rate);
    println!("Volatility:      {}", params.volatility);
    println!("Maturity:        {}", params.maturity);
    println!("Call Price:      {call}");
    println!("Put Price:       {put}");

    Ok(())
}
