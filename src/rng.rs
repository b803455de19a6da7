//! Seedable random source for word selection.
//!
//! A session draws every secret word through [`GameRng`], so a fixed seed
//! replays the same sequence of words.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a deterministic RNG from `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a seed drawn from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed the sequence was built from. `GameRng::new(seed)` replays it.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        let seq_a: Vec<usize> = (0..20).map(|_| a.index(100)).collect();
        let seq_b: Vec<usize> = (0..20).map(|_| b.index(100)).collect();

        assert_eq!(seq_a, seq_b);
    }

    #[test]
    fn index_stays_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            assert!(rng.index(5) < 5);
        }
    }

    #[test]
    fn index_of_one_is_zero() {
        let mut rng = GameRng::from_entropy();
        assert_eq!(rng.index(1), 0);
    }

    #[test]
    fn seed_is_remembered() {
        assert_eq!(GameRng::new(3).seed(), 3);
    }

    #[test]
    fn entropy_seed_replays_the_same_sequence() {
        let mut rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());

        let seq: Vec<usize> = (0..20).map(|_| rng.index(1000)).collect();
        let replayed: Vec<usize> = (0..20).map(|_| replay.index(1000)).collect();

        assert_eq!(seq, replayed);
    }
}
