use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Source of uniformly distributed indices used by the shuffle
pub trait RandomSource {
    /// Return an index in range [0, n). `n` is never zero.
    fn next_index(&mut self, n: usize) -> usize;
}

/// Seeded random number generator for reproducible decks
#[derive(Clone)]
pub struct DeckRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DeckRng {
    /// Create a new DeckRng with an optional seed
    /// If seed is None, generates a random seed
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            use rand::thread_rng;
            thread_rng().gen()
        });

        let rng = ChaCha8Rng::seed_from_u64(seed);
        DeckRng { rng, seed }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DeckRng {
    fn next_index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
