use crate::cipher::alphabet::{ALPHABET, ALPHABET_LEN};
use rand::seq::SliceRandom;
use rand::Rng;

/// A rearrangement of [`ALPHABET`]; may still have fixed points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterPermutation(pub [u8; ALPHABET_LEN]);

impl LetterPermutation {
    pub fn identity() -> Self {
        LetterPermutation(ALPHABET)
    }

    /// Uniform over all 26! orderings.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut letters = ALPHABET;
        letters.shuffle(rng);
        LetterPermutation(letters)
    }

    /// Indices where the permutation leaves a letter in place.
    pub fn fixed_points(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .zip(ALPHABET.iter())
            .enumerate()
            .filter(|(_, (letter, original))| letter == original)
            .map(|(idx, _)| idx)
    }

    pub fn has_fixed_point(&self) -> bool {
        self.fixed_points().next().is_some()
    }
}
