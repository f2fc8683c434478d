//! Deterministic random number generation for board building.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Entropy-seedable**: Production play seeds from the OS
//! - **Serializable**: O(1) state capture and restore for replays
//!
//! Board generation is the only randomness in the game, and tests need it
//! reproducible, so everything routes through this wrapper rather than
//! `rand::thread_rng`.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG behind board shuffling and sampling.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.next_u64();
        Self::seeded(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in the given range.
    pub fn gen_index(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Draw `amount` distinct elements uniformly, without replacement.
    ///
    /// Returns clones of the chosen elements. The caller is responsible for
    /// checking that `slice` holds at least `amount` elements; fewer in means
    /// fewer out, per `choose_multiple`.
    #[must_use]
    pub fn sample_distinct<T: Clone>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        slice
            .choose_multiple(&mut self.inner, amount)
            .cloned()
            .collect()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for replay checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::seeded(42);
        let mut rng2 = GameRng::seeded(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(0..1000), rng2.gen_index(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::seeded(1);
        let mut rng2 = GameRng::seeded(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::seeded(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = GameRng::seeded(42);
        let items: Vec<i32> = (0..50).collect();

        let sample = rng.sample_distinct(&items, 10);

        assert_eq!(sample.len(), 10);
        for value in &sample {
            assert!(items.contains(value));
        }

        let mut deduped = sample.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 10);
    }

    #[test]
    fn test_sample_distinct_deterministic() {
        let items: Vec<i32> = (0..50).collect();

        let mut rng1 = GameRng::seeded(7);
        let mut rng2 = GameRng::seeded(7);

        assert_eq!(
            rng1.sample_distinct(&items, 10),
            rng2.sample_distinct(&items, 10)
        );
    }

    #[test]
    fn test_sample_distinct_short_slice() {
        let mut rng = GameRng::seeded(42);
        let items = vec![1, 2, 3];

        let sample = rng.sample_distinct(&items, 10);
        assert_eq!(sample.len(), 3);
    }

    #[test]
    fn test_from_entropy_varies() {
        let rng1 = GameRng::from_entropy();
        let rng2 = GameRng::from_entropy();

        // Astronomically unlikely to collide.
        assert_ne!(rng1.seed(), rng2.seed());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::seeded(42);

        for _ in 0..100 {
            rng.gen_index(0..1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_index(0..1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_index(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
