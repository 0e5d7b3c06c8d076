//! Random number generators.
//!
//! Provides the uniform-source seam consumed by the Gaussian samplers, a
//! Mersenne Twister uniform generator (via the `rand_mt` crate), and four
//! interchangeable standard-normal samplers: the polar rejection method,
//! a spare-caching variant of it, an inverse-CDF transform, and a
//! ziggurat sampler backed by `rand_distr`.
//!
//! Every generator owns its stream state and is seeded explicitly, so
//! simulations are reproducible and independent streams never share
//! draws.

use dmc_core::{errors::Result, fail, Real};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use rand_mt::Mt19937GenRand64;

/// Attempts a rejection sampler makes before declaring its uniform source
/// defective.
///
/// Each polar attempt is accepted with probability π/4, so a healthy
/// source rejecting this many pairs in a row has probability below
/// 10⁻⁶⁰.
pub const MAX_REJECTION_ATTEMPTS: usize = 100;

// ── Uniform sources ───────────────────────────────────────────────────────────

/// A source of uniform deviates on `[0, 1)`.
///
/// The Gaussian samplers see their uniform source only through this one
/// operation, so any generator of adequate statistical quality can stand
/// in, including deterministic stubs in tests.
pub trait UniformRng {
    /// Generate the next uniform deviate in `[0, 1)`.
    fn next_real(&mut self) -> Real;
}

/// A uniform pseudo-random number generator based on the Mersenne Twister
/// MT19937-64 algorithm.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }
}

impl UniformRng for MersenneTwisterUniformRng {
    fn next_real(&mut self) -> Real {
        // Map u64 to [0.0, 1.0)
        let u: u64 = self.rng.next_u64();
        u as f64 / (u64::MAX as f64 + 1.0)
    }
}

// ── Gaussian samplers ─────────────────────────────────────────────────────────

/// A source of independent standard-normal deviates.
pub trait GaussianRng {
    /// Draw the next standard-normal deviate.
    ///
    /// Fails with [`DegenerateSample`](dmc_core::Error::DegenerateSample)
    /// when the underlying uniform source cannot produce a usable draw;
    /// NaN or infinity is never returned.
    fn draw(&mut self) -> Result<Real>;
}

/// Standard-normal sampler using the polar (Box–Muller/Marsaglia)
/// rejection method.
///
/// Draws pairs `(x, y)` uniform on `(−1, 1)` until `s = x² + y²` lands
/// strictly inside the unit circle, then returns `x·√(−2·ln s / s)`. The
/// matching second deviate `y·√(−2·ln s / s)` is discarded; see
/// [`CachedPolarGaussianRng`] for the variant that keeps it.
///
/// Acceptance requires `0 < s < 1`: the zero-measure `s == 0` case would
/// put a zero under the logarithm and is rejected like any point outside
/// the circle.
pub struct PolarGaussianRng<U: UniformRng> {
    uniform: U,
}

impl PolarGaussianRng<MersenneTwisterUniformRng> {
    /// Create a sampler backed by a Mersenne Twister with the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(MersenneTwisterUniformRng::new(seed))
    }
}

impl<U: UniformRng> PolarGaussianRng<U> {
    /// Create a sampler over an explicit uniform source.
    pub fn new(uniform: U) -> Self {
        Self { uniform }
    }

    /// Draw one accepted polar pair, returning both deviates.
    fn draw_pair(&mut self) -> Result<(Real, Real)> {
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let x = 2.0 * self.uniform.next_real() - 1.0;
            let y = 2.0 * self.uniform.next_real() - 1.0;
            let s = x * x + y * y;
            if s > 0.0 && s < 1.0 {
                let factor = (-2.0 * s.ln() / s).sqrt();
                return Ok((x * factor, y * factor));
            }
        }
        fail!(
            "polar method rejected {MAX_REJECTION_ATTEMPTS} pairs in a row; \
             the uniform source looks defective"
        );
    }
}

impl<U: UniformRng> GaussianRng for PolarGaussianRng<U> {
    fn draw(&mut self) -> Result<Real> {
        let (z, _discarded) = self.draw_pair()?;
        Ok(z)
    }
}

/// Spare-caching variant of [`PolarGaussianRng`].
///
/// Each accepted polar pair yields two independent deviates; this sampler
/// hands out the second one on the following call instead of discarding
/// it, halving the number of rejection loops. Its value stream differs
/// from [`PolarGaussianRng`]'s after the first draw, so estimates built
/// on it differ draw-for-draw (not in distribution).
pub struct CachedPolarGaussianRng<U: UniformRng> {
    inner: PolarGaussianRng<U>,
    spare: Option<Real>,
}

impl CachedPolarGaussianRng<MersenneTwisterUniformRng> {
    /// Create a sampler backed by a Mersenne Twister with the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(MersenneTwisterUniformRng::new(seed))
    }
}

impl<U: UniformRng> CachedPolarGaussianRng<U> {
    /// Create a sampler over an explicit uniform source.
    pub fn new(uniform: U) -> Self {
        Self {
            inner: PolarGaussianRng::new(uniform),
            spare: None,
        }
    }
}

impl<U: UniformRng> GaussianRng for CachedPolarGaussianRng<U> {
    fn draw(&mut self) -> Result<Real> {
        if let Some(z) = self.spare.take() {
            return Ok(z);
        }
        let (z, spare) = self.inner.draw_pair()?;
        self.spare = Some(spare);
        Ok(z)
    }
}

/// Standard-normal sampler transforming uniforms through the inverse
/// normal CDF.
///
/// Uniform deviates of exactly 0 or 1 would map to ±∞ and are skipped,
/// with the same attempt bound as the polar loop.
pub struct InverseCumulativeGaussianRng<U: UniformRng> {
    uniform: U,
}

impl InverseCumulativeGaussianRng<MersenneTwisterUniformRng> {
    /// Create a sampler backed by a Mersenne Twister with the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(MersenneTwisterUniformRng::new(seed))
    }
}

impl<U: UniformRng> InverseCumulativeGaussianRng<U> {
    /// Create a sampler over an explicit uniform source.
    pub fn new(uniform: U) -> Self {
        Self { uniform }
    }
}

impl<U: UniformRng> GaussianRng for InverseCumulativeGaussianRng<U> {
    fn draw(&mut self) -> Result<Real> {
        for _ in 0..MAX_REJECTION_ATTEMPTS {
            let u = self.uniform.next_real();
            if u > 0.0 && u < 1.0 {
                return Ok(crate::distributions::normal_cdf_inverse(u));
            }
        }
        fail!(
            "uniform source produced {MAX_REJECTION_ATTEMPTS} inadmissible \
             deviates in a row"
        );
    }
}

/// Standard-normal sampler backed by `rand_distr`'s ziggurat tables over
/// `StdRng`.
///
/// Infallible by construction; serves as an independent cross-check on
/// the polar samplers and as a throughput baseline.
pub struct ZigguratGaussianRng {
    rng: StdRng,
}

impl ZigguratGaussianRng {
    /// Create a sampler with the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl GaussianRng for ZigguratGaussianRng {
    fn draw(&mut self) -> Result<Real> {
        Ok(self.rng.sample(StandardNormal))
    }
}
