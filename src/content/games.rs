use crate::cipher::{Derangement, KeyError, ALPHABET_LEN};
use crate::content::dates::DateRange;
use crate::content::report::ValidationReport;
use crate::content::rules::GameRules;
use crate::content::text::{char_len, first_word_longer_than, has_consecutive_escaped_quotes};
use serde_json::Value;
use std::collections::HashSet;

/// Solutions and targets accepted so far; both must be unique across the schedule.
#[derive(Debug, Default)]
pub struct SeenContent {
    pub solutions: HashSet<String>,
    pub targets: HashSet<String>,
}

/// Walks every day of `range` and checks the lingo and scryptogram entries under
/// `games`. A document without a `games` object yields a single error.
pub fn validate_games(document: &Value, range: DateRange, rules: &GameRules) -> ValidationReport {
    let mut report = ValidationReport::new(range);
    let Some(games) = document.get("games").and_then(Value::as_object) else {
        report.error("", "JSON file does not contain a 'games' object.");
        return report;
    };

    let mut seen = SeenContent::default();
    for date in range.days() {
        let key = date.to_string();
        report.checked_days += 1;

        let Some(entry) = games.get(&key) else {
            report.error(&key, format!("Missing game for date {key}"));
            continue;
        };

        let elements = entry.as_array().map(Vec::as_slice).unwrap_or_default();
        if elements.len() < 2 {
            report.error(
                &key,
                format!("Game for {key} doesn't have at least 2 elements"),
            );
            continue;
        }

        check_lingo_game(&mut report, &key, &elements[0], rules, &mut seen);
        check_scryptogram_game(&mut report, &key, &elements[1], rules, &mut seen);
    }

    report
}

fn check_lingo_game(
    report: &mut ValidationReport,
    date: &str,
    game: &Value,
    rules: &GameRules,
    seen: &mut SeenContent,
) {
    if game_type(game) != Some(rules.lingo_type.as_str()) {
        report.error(
            date,
            format!(
                "First game for {date} is not of type '{}'",
                rules.lingo_type
            ),
        );
        return;
    }

    let Some(solution) = config_str(game, "solution") else {
        report.error(
            date,
            format!("Lingo game for {date} is missing config or solution"),
        );
        return;
    };

    match check_lingo_solution(solution, &seen.solutions, rules) {
        Ok(()) => {
            seen.solutions.insert(solution.to_string());
        }
        Err(message) => report.error(date, message),
    }
}

fn check_scryptogram_game(
    report: &mut ValidationReport,
    date: &str,
    game: &Value,
    rules: &GameRules,
    seen: &mut SeenContent,
) {
    if game_type(game) != Some(rules.scryptogram_type.as_str()) {
        report.error(
            date,
            format!(
                "Second game for {date} is not of type '{}'",
                rules.scryptogram_type
            ),
        );
        return;
    }

    let (Some(target), Some(hint), Some(cipher)) = (
        config_str(game, "target"),
        config_str(game, "hint"),
        config_str(game, "cipher"),
    ) else {
        report.error(
            date,
            format!("Scryptogram game for {date} is missing config, target, hint, or cipher"),
        );
        return;
    };

    match check_scryptogram_target(target, &seen.targets, rules) {
        Ok(()) => {
            seen.targets.insert(target.to_string());
        }
        Err(message) => report.error(date, message),
    }

    if let Err(message) = check_scryptogram_hint(hint, rules) {
        report.error(date, message);
    }

    if let Err(message) = check_scryptogram_cipher(cipher) {
        report.error(date, message);
    }
}

fn game_type(game: &Value) -> Option<&str> {
    game.get("type").and_then(Value::as_str)
}

fn config_str<'a>(game: &'a Value, key: &str) -> Option<&'a str> {
    game.get("config")
        .and_then(|config| config.get(key))
        .and_then(Value::as_str)
}

/// Exactly `lingo_length` ASCII letters, not used on an earlier day.
pub fn check_lingo_solution(
    solution: &str,
    seen: &HashSet<String>,
    rules: &GameRules,
) -> Result<(), String> {
    if char_len(solution) != rules.lingo_length {
        return Err(format!(
            "Lingo solution '{solution}' is not exactly {} characters.",
            rules.lingo_length
        ));
    }

    if !solution.chars().all(|ch| ch.is_ascii_alphabetic()) {
        return Err(format!(
            "Lingo solution '{solution}' contains invalid characters (only letters allowed)."
        ));
    }

    if seen.contains(solution) {
        return Err(format!("Lingo solution '{solution}' is not unique."));
    }

    Ok(())
}

/// Quotes: a decoded `""` is rejected as well as a literal `\"\"`.
pub fn check_scryptogram_target(
    target: &str,
    seen: &HashSet<String>,
    rules: &GameRules,
) -> Result<(), String> {
    let length = char_len(target);
    if length <= rules.target_min_length {
        return Err(format!(
            "Scryptogram target is too short: {length} characters (must be > {}).",
            rules.target_min_length
        ));
    }

    if let Some(word) = first_word_longer_than(target, rules.max_word_length) {
        return Err(format!(
            "Scryptogram target contains a word longer than {} characters: '{word}'.",
            rules.max_word_length
        ));
    }

    if seen.contains(target) {
        return Err("Scryptogram target is not unique.".to_string());
    }

    if has_consecutive_escaped_quotes(target) {
        return Err("Scryptogram target contains consecutive escaped quotes.".to_string());
    }

    Ok(())
}

pub fn check_scryptogram_hint(hint: &str, rules: &GameRules) -> Result<(), String> {
    let length = char_len(hint);
    if length <= rules.hint_min_length {
        return Err(format!(
            "Scryptogram hint is too short: {length} characters (must be > {}).",
            rules.hint_min_length
        ));
    }

    if !hint.contains(rules.hint_separator) {
        return Err(format!(
            "Scryptogram hint does not contain a '{}' character.",
            rules.hint_separator
        ));
    }

    Ok(())
}

/// The cipher must be a usable key: a derangement of the alphabet.
pub fn check_scryptogram_cipher(cipher: &str) -> Result<Derangement, String> {
    cipher.parse::<Derangement>().map_err(|err| match err {
        KeyError::Length(length) => format!(
            "Scryptogram cipher is not exactly {ALPHABET_LEN} characters: {length}."
        ),
        KeyError::NotUppercase { .. } => {
            format!("Scryptogram cipher is not all uppercase: '{cipher}'.")
        }
        KeyError::FixedPoint { letter, position } => format!(
            "Scryptogram cipher has '{letter}' in its original position {position}."
        ),
        KeyError::Repeated(letter) => {
            format!("Scryptogram cipher repeats the letter '{letter}'.")
        }
    })
}
