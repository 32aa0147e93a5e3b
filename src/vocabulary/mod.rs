pub mod tier;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

pub use tier::{ParseTierError, Tier};

const WORDS_EASY: &str = include_str!("../../assets/vocabulary/easy.txt");
const WORDS_MEDIUM: &str = include_str!("../../assets/vocabulary/medium.txt");
const WORDS_HARD: &str = include_str!("../../assets/vocabulary/hard.txt");

/// The fixed word list for a tier, in bundled order.
pub fn words(tier: Tier) -> Vec<&'static str> {
    let raw = match tier {
        Tier::Easy => WORDS_EASY,
        Tier::Medium => WORDS_MEDIUM,
        Tier::Hard => WORDS_HARD,
    };
    raw.lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Hands out shuffled word queues. Owns its RNG so sessions and tests
/// never share random state.
pub struct VocabularyProvider {
    rng: SmallRng,
}

impl VocabularyProvider {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// A fresh uniform permutation of the tier's full list.
    pub fn load_queue(&mut self, tier: Tier) -> Vec<String> {
        let mut queue: Vec<String> = words(tier).into_iter().map(str::to_string).collect();
        // Fisher-Yates
        queue.shuffle(&mut self.rng);
        queue
    }
}

impl Default for VocabularyProvider {
    fn default() -> Self {
        Self::new()
    }
}
