use chrono::NaiveDate;
use daily_puzzles::content::{
    load_document, parse_date, ContentError, DateError, PromptRules, PromptValidator, Rules,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn scratch_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn defaults_match_historic_thresholds() {
    let rules = Rules::default();
    assert_eq!(rules.games.start_date, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
    assert_eq!(rules.prompts.start_date, NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
    assert_eq!(rules.games.lingo_length, 5);
    assert_eq!(rules.games.target_min_length, 25);
    assert_eq!(rules.games.max_word_length, 12);
    assert_eq!(rules.games.hint_min_length, 6);
    assert_eq!(rules.games.hint_separator, ':');
    assert_eq!(rules.prompts.required_fields.len(), 8);
}

#[test]
fn partial_toml_overrides_only_named_keys() {
    let rules = Rules::from_toml_str(
        r#"
        [games]
        start_date = "2025-04-01"
        max_word_length = 10

        [prompts]
        required_fields = ["Prompt", "PromptLink"]
        "#,
    )
    .expect("rules parse");

    assert_eq!(rules.games.start_date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
    assert_eq!(rules.games.max_word_length, 10);
    assert_eq!(rules.games.lingo_length, 5);
    assert_eq!(rules.prompts.required_fields, vec!["Prompt", "PromptLink"]);
    assert_eq!(rules.prompts.link_patterns, PromptRules::default().link_patterns);
}

#[test]
fn empty_toml_is_the_default() {
    assert_eq!(Rules::from_toml_str("").expect("empty rules"), Rules::default());
}

#[test]
fn rules_load_from_file() {
    let file = scratch_file("[games]\nlingo_length = 6\n");
    let rules = Rules::load(file.path()).expect("load rules");
    assert_eq!(rules.games.lingo_length, 6);
}

#[test]
fn malformed_rules_file_is_a_rules_error() {
    let file = scratch_file("[games]\nlingo_length = \"five\"\n");
    let err = Rules::load(file.path()).unwrap_err();
    assert!(matches!(err, ContentError::Rules { .. }), "{err}");
}

#[test]
fn invalid_link_pattern_is_rejected() {
    let rules = PromptRules {
        link_patterns: vec!["https://(unclosed".to_string()],
        ..PromptRules::default()
    };
    match PromptValidator::new(rules) {
        Err(ContentError::Pattern { pattern, .. }) => assert_eq!(pattern, "https://(unclosed"),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("unclosed group should not compile"),
    }
}

#[test]
fn missing_document_is_not_found() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = load_document(dir.path().join("prompts.json")).unwrap_err();
    assert!(matches!(err, ContentError::NotFound { .. }));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn unparsable_document_is_a_json_error() {
    let file = scratch_file("{ \"games\": ");
    let err = load_document(file.path()).unwrap_err();
    assert!(matches!(err, ContentError::Json { .. }));
    assert!(err.to_string().contains("is not a valid JSON file"));
}

#[test]
fn document_loads_as_json_value() {
    let file = scratch_file(r#"{ "games": {}, "prompts": [] }"#);
    let document = load_document(file.path()).expect("load document");
    assert!(document["games"].is_object());
    assert!(document["prompts"].is_array());
}

#[test]
fn dates_with_surrounding_whitespace_are_rejected() {
    assert_eq!(parse_date("2025-03-03").ok(), NaiveDate::from_ymd_opt(2025, 3, 3));
    assert!(matches!(
        parse_date(" 2025-03-03"),
        Err(DateError::Whitespace(_))
    ));
    assert!(parse_date("2025-03-03\n").is_err());
}

#[test]
fn strict_flag_reads_from_toml() {
    assert!(!Rules::default().prompts.strict);
    let rules = Rules::from_toml_str("[prompts]\nstrict = true\n").expect("rules parse");
    assert!(rules.prompts.strict);
}
