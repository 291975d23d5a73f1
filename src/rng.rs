use rand::{SeedableRng, rngs::SmallRng};

/// Small random generator with an optional fixed seed.
///
/// Seeded instances reproduce the same stream on every run; unseeded ones
/// draw their state from OS entropy. Each strategy and each environment owns
/// its own instance, so independent runs never share a randomness stream.
#[derive(Clone, Debug)]
pub struct MaybeSeededRng {
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { rng }
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
