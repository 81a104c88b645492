use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by one game session. Random opponents draw from it, so
/// a whole game can be replayed by starting a new session with [`seed`].
///
/// [`seed`]: SessionRng::seed
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Draws a fresh seed from the thread RNG. The seed is kept so the
    /// session can still be reported and replayed.
    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform pick from `moves`; `None` when there is nothing to pick.
    pub fn choose<'a, T>(&mut self, moves: &'a [T]) -> Option<&'a T> {
        moves.choose(&mut self.rng)
    }
}
