use super::moves::Move333;
use super::Cube;
use crate::moves::MoveSequence;

/// Settings for producing random scrambles.
///
/// ```rust
/// use sticker_cube::cube333::{scramble::Scrambler, Cube};
///
/// let mut a = Cube::new();
/// let mut b = Cube::new();
/// let scrambler = Scrambler::default().with_length(25).with_seed(42);
/// assert_eq!(scrambler.scramble(&mut a), scrambler.scramble(&mut b));
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scrambler {
    /// How many random quarter turns make up a scramble.
    pub length: usize,
    /// Seed for the random moves. Without one, every scramble is different.
    pub seed: Option<u64>,
}

impl Default for Scrambler {
    fn default() -> Self {
        Scrambler {
            length: Self::DEFAULT_LENGTH,
            seed: None,
        }
    }
}

impl Scrambler {
    /// The scramble length used when none is given.
    pub const DEFAULT_LENGTH: usize = 20;

    /// Use a scramble of `length` moves.
    pub fn with_length(self, length: usize) -> Self {
        Scrambler { length, ..self }
    }

    /// Make scrambles reproducible.
    pub fn with_seed(self, seed: u64) -> Self {
        Scrambler {
            seed: Some(seed),
            ..self
        }
    }

    /// A fresh random source for this configuration.
    pub fn rng(&self) -> fastrand::Rng {
        match self.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        }
    }

    /// Shuffle `cube` and return the moves that were used. The cube's history is empty
    /// afterwards.
    pub fn scramble(&self, cube: &mut Cube) -> MoveSequence<Move333> {
        cube.shuffle(self.length, &mut self.rng())
    }
}
