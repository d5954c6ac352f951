pub mod alphabet;
pub mod derangement;
pub mod permutation;

pub use alphabet::{alphabet_index, ALPHABET, ALPHABET_LEN};
pub use derangement::{
	generate_derangement,
	generate_derangement_with_stats,
	generate_keys,
	write_keys,
	Derangement,
	KeyError,
	DEFAULT_KEY_COUNT,
};
pub use permutation::LetterPermutation;
