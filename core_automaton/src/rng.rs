use bevy::prelude::Resource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform integer draws consumed by the rule tables and the engine.
///
/// Every probabilistic decision in a generation is a single `roll`, taken in
/// row-major, phase-ordered sequence, so a seeded source reproduces runs
/// exactly.
pub trait RollSource {
    /// Uniform draw in `[0, upper)`. `upper` is never zero.
    fn roll(&mut self, upper: u32) -> u32;
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    #[inline]
    fn roll(&mut self, upper: u32) -> u32 {
        (**self).roll(upper)
    }
}

/// Seedable generator backing production runs.
///
/// ChaCha8 keeps the stream identical across platforms.
#[derive(Resource, Debug, Clone)]
pub struct SimRng {
    inner: ChaCha8Rng,
}

impl SimRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seed of `0` means "pick one from the OS".
    pub fn from_config_seed(seed: u64) -> Self {
        if seed == 0 {
            Self::from_entropy()
        } else {
            Self::seed_from_u64(seed)
        }
    }
}

impl RollSource for SimRng {
    #[inline]
    fn roll(&mut self, upper: u32) -> u32 {
        debug_assert!(upper > 0);
        self.inner.gen_range(0..upper)
    }
}
