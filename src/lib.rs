pub mod cipher;
pub mod content;

pub use cipher::{
	generate_derangement,
	generate_keys,
	Derangement,
	KeyError,
	ALPHABET,
};
pub use content::{
	load_document,
	validate_games,
	ContentError,
	DateRange,
	PromptValidator,
	Rules,
	ValidationReport,
};
