pub mod dates;
pub mod document;
pub mod error;
pub mod games;
pub mod prompts;
pub mod report;
pub mod rules;
pub mod text;

pub use dates::{parse_date, DateError, DateRange, DATE_FORMAT};
pub use document::{load_document, parse_document, DEFAULT_DOCUMENT};
pub use error::ContentError;
pub use games::validate_games;
pub use prompts::PromptValidator;
pub use report::{Diagnostic, Severity, ValidationReport};
pub use rules::{GameRules, PromptPatterns, PromptRules, Rules};
