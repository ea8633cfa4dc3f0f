//! A simple pseudorandom number generator.
//!
//! Specifically, the minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy [RngCore] and [SeedableRng].[^note]
//!
//! PCG(32) was chosen as the default source of (pseudo)random numbers as it is simple, fast, and has some nice supporting documentation.
//!
//! Each [context](crate::context) stores a source of rng, used only to choose the literal of a case split.
//! The context is parameterised to anything which satisfies [Rng](rand::Rng) and [SeedableRng], though the [Context](crate::context::Context) alias fixes the source as [MinimalPCG32].
//!
//! [^note]: At the time of writing, the C implementation is at the top of the [download page](https://www.pcg-random.org/download.html).

use rand_core::{impls, RngCore, SeedableRng};

/// The multiplier of the underlying linear congruential generator.
const MULTIPLIER: u64 = 6364136223846793005;

/// The stream used when seeding, as in the PCG demonstration programs.
const STREAM: u64 = 54;

/// State and increment.
///
/// The increment is always odd.
#[derive(Clone, Debug)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    /// A generator seeded with `initial_state` on the given stream, following `pcg32_srandom_r`.
    pub fn with_stream(initial_state: u64, stream: u64) -> Self {
        let mut generator = Self {
            state: 0,
            inc: (stream << 1) | 1,
        };
        generator.step();
        generator.state = generator.state.wrapping_add(initial_state);
        generator.step();
        generator
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(self.inc);
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;
        self.step();

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::with_stream(u64::from_le_bytes(seed), STREAM)
    }
}
