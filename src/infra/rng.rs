use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::trace;

use crate::engine::RandomSource;

fn shuffle_with<G: Rng + ?Sized, T>(rng: &mut G, slice: &mut [T]) {
    slice.shuffle(rng);
}

/// Перемешивание на потоковом генераторе, засеянном ОС.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        shuffle_with(&mut thread_rng(), slice);
    }
}

/// Засеянный генератор для тестов и повторов: одно зерно раздаёт одни и те
/// же раунды.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    seed: u64,
    shuffles: u64,
    rng: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            shuffles: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Зерно, с которого начат генератор.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Сколько перемешиваний уже сделано.
    pub fn shuffles(&self) -> u64 {
        self.shuffles
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        self.shuffles += 1;
        trace!(seed = self.seed, shuffle = self.shuffles, len = slice.len(), "перемешивание");
        shuffle_with(&mut self.rng, slice);
    }
}
