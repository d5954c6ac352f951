pub const ALPHABET_LEN: usize = 26;

/// The plaintext alphabet every key is a rearrangement of.
pub const ALPHABET: [u8; ALPHABET_LEN] = *b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Position of an uppercase ASCII letter in [`ALPHABET`].
pub fn alphabet_index(letter: u8) -> Option<usize> {
    letter
        .is_ascii_uppercase()
        .then(|| usize::from(letter - b'A'))
}
