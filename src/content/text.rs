use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern compiles"));

/// Length in Unicode scalar values, not bytes.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// First `\w+` run longer than `max` characters.
pub fn first_word_longer_than(text: &str, max: usize) -> Option<&str> {
    WORD.find_iter(text)
        .map(|word| word.as_str())
        .find(|word| char_len(word) > max)
}

/// Catches both a doubled quote left after JSON unescaping (`""`) and a literal
/// escaped pair that survived it (`\"\"`).
pub fn has_consecutive_escaped_quotes(text: &str) -> bool {
    text.contains("\"\"") || text.contains("\\\"\\\"")
}
