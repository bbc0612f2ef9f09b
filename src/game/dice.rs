/// Seedable randomness for board generation and die rolls
use rand::seq::{SliceRandom, index};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Faces shown while the die is "rolling", ⚀ through ⚅.
pub const DICE_FACES: [char; 6] = ['\u{2680}', '\u{2681}', '\u{2682}', '\u{2683}', '\u{2684}', '\u{2685}'];

pub const DIE_SIDES: u8 = 6;

/// Glyph for animation frame `frame` (1-based, wraps around the six faces).
pub fn face_for_frame(frame: usize) -> char {
    DICE_FACES[frame % DICE_FACES.len()]
}

/// Source of die rolls for the turn engine.
pub trait Roll {
    /// Uniform value in `1..=6`.
    fn roll_die(&mut self) -> u8;
}

/// Deterministic game RNG: a ChaCha8 stream keyed by a `u64` seed. The seed
/// is always known, so any game can be replayed with `--seed`.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Fresh RNG with a seed taken from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `amount` distinct values from `low..=high`, without replacement.
    ///
    /// Panics if `amount` exceeds the size of the range.
    pub fn sample_distinct(&mut self, low: u8, high: u8, amount: usize) -> Vec<u8> {
        let span = usize::from(high - low) + 1;
        index::sample(&mut self.inner, span, amount)
            .into_iter()
            .map(|i| low + i as u8)
            .collect()
    }

    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl Roll for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.random_range(1..=DIE_SIDES)
    }
}
