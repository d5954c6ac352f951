use crate::cipher::alphabet::{alphabet_index, ALPHABET, ALPHABET_LEN};
use crate::cipher::permutation::LetterPermutation;
use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_KEY_COUNT: usize = 20;

/// Reasons a string is not a usable cipher key. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error("key is not exactly 26 characters: {0}")]
    Length(usize),
    #[error("key has non-uppercase character '{character}' at position {position}")]
    NotUppercase { character: char, position: usize },
    #[error("key has '{letter}' in its original position {position}")]
    FixedPoint { letter: char, position: usize },
    #[error("key repeats the letter '{0}'")]
    Repeated(char),
}

/// A substitution key with no letter mapped to itself.
///
/// `key[i]` is the cipher letter for `ALPHABET[i]`. The only ways to obtain one are
/// [`generate_derangement`] and parsing, so every value upholds the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Derangement([u8; ALPHABET_LEN]);

impl Derangement {
    pub fn from_permutation(permutation: LetterPermutation) -> Option<Self> {
        if permutation.has_fixed_point() {
            None
        } else {
            Some(Derangement(permutation.0))
        }
    }

    pub fn letters(&self) -> &[u8; ALPHABET_LEN] {
        &self.0
    }

    pub fn cipher_letter(&self, plain: u8) -> Option<u8> {
        alphabet_index(plain).map(|idx| self.0[idx])
    }

    /// The key that undoes this one. A permutation and its inverse share fixed points,
    /// so the inverse is a derangement too.
    pub fn inverse(&self) -> Derangement {
        let mut inverse = [0u8; ALPHABET_LEN];
        for (idx, &letter) in self.0.iter().enumerate() {
            inverse[usize::from(letter - b'A')] = ALPHABET[idx];
        }
        Derangement(inverse)
    }

    /// Substitutes ASCII letters, keeping case. Everything else passes through.
    pub fn encipher(&self, plaintext: &str) -> String {
        plaintext.chars().map(|ch| self.substitute(ch)).collect()
    }

    pub fn decipher(&self, ciphertext: &str) -> String {
        self.inverse().encipher(ciphertext)
    }

    fn substitute(&self, ch: char) -> char {
        if !ch.is_ascii_alphabetic() {
            return ch;
        }
        let upper = ch.to_ascii_uppercase() as u8;
        let mapped = self.0[usize::from(upper - b'A')] as char;
        if ch.is_ascii_lowercase() {
            mapped.to_ascii_lowercase()
        } else {
            mapped
        }
    }
}

impl fmt::Display for Derangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &letter in &self.0 {
            f.write_char(letter as char)?;
        }
        Ok(())
    }
}

impl FromStr for Derangement {
    type Err = KeyError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let length = raw.chars().count();
        if length != ALPHABET_LEN {
            return Err(KeyError::Length(length));
        }

        if let Some((idx, character)) = raw
            .chars()
            .enumerate()
            .find(|(_, ch)| !ch.is_ascii_uppercase())
        {
            return Err(KeyError::NotUppercase {
                character,
                position: idx + 1,
            });
        }

        let mut letters = [0u8; ALPHABET_LEN];
        letters.copy_from_slice(raw.as_bytes());
        let permutation = LetterPermutation(letters);

        if let Some(idx) = permutation.fixed_points().next() {
            return Err(KeyError::FixedPoint {
                letter: letters[idx] as char,
                position: idx + 1,
            });
        }

        let mut seen = [false; ALPHABET_LEN];
        for &letter in &letters {
            let slot = &mut seen[usize::from(letter - b'A')];
            if *slot {
                return Err(KeyError::Repeated(letter as char));
            }
            *slot = true;
        }

        Ok(Derangement(letters))
    }
}

impl Serialize for Derangement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Rejection sampling: shuffle a fresh copy of the alphabet until no letter stays put.
/// Each trial succeeds with probability close to 1/e.
pub fn generate_derangement<R: Rng + ?Sized>(rng: &mut R) -> Derangement {
    generate_derangement_with_stats(rng).0
}

/// Same as [`generate_derangement`], also returning how many shuffles were rejected.
pub fn generate_derangement_with_stats<R: Rng + ?Sized>(rng: &mut R) -> (Derangement, u32) {
    let mut rejected = 0u32;
    loop {
        let candidate = LetterPermutation::generate(rng);
        if let Some(derangement) = Derangement::from_permutation(candidate) {
            return (derangement, rejected);
        }
        rejected += 1;
    }
}

/// Independent keys; repeats across the batch are not filtered.
pub fn generate_keys<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Derangement> {
    (0..count).map(|_| generate_derangement(rng)).collect()
}

pub fn write_keys<W: Write>(out: &mut W, keys: &[Derangement]) -> io::Result<()> {
    for key in keys {
        writeln!(out, "{key}")?;
    }
    out.flush()
}
