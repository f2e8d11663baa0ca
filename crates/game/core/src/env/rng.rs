//! RNG oracle for reproducible random draws.
//!
//! Every draw of a resolution is derived from `(session seed, nonce, item,
//! context)`, so replaying the same request against the same session seed
//! yields the same drops.

/// Seeded random number source.
///
/// Implementations must be deterministic: the same seed always produces the
/// same value.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform value in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / 4_294_967_296.0
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR variant: 32-bit output from 64-bit state.
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one draw.
///
/// # Arguments
///
/// * `session_seed` - Base seed chosen when the session starts
/// * `nonce` - Resolution sequence number (increments per request)
/// * `item` - Catalog index of the item being deconstructed
/// * `context` - Index of the draw within the resolution
pub fn compute_seed(session_seed: u64, nonce: u64, item: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = session_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(item).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Sequence of independent draws for a single resolution.
///
/// Each call to [`RollStream::unit`] advances the context counter, giving the
/// next draw its own seed.
pub struct RollStream<'a> {
    rng: &'a dyn RngOracle,
    session_seed: u64,
    nonce: u64,
    item: u32,
    context: u32,
}

impl<'a> RollStream<'a> {
    pub fn new(rng: &'a dyn RngOracle, session_seed: u64, nonce: u64, item: u32) -> Self {
        Self {
            rng,
            session_seed,
            nonce,
            item,
            context: 0,
        }
    }

    /// Next uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        let seed = compute_seed(self.session_seed, self.nonce, self.item, self.context);
        self.context = self.context.wrapping_add(1);
        self.rng.unit(seed)
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> u32 {
        self.context
    }
}
