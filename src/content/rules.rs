use crate::content::error::ContentError;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Every content threshold the validators apply. Omitted TOML keys keep their
/// defaults, so a rules file only needs the values it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub games: GameRules,
    pub prompts: PromptRules,
}

impl Rules {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let raw =
            fs::read_to_string(path).map_err(|err| ContentError::from_io(path.into(), err))?;
        Self::from_toml_str(&raw).map_err(|source| ContentError::Rules {
            path: path.into(),
            source,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub start_date: NaiveDate,
    pub lingo_type: String,
    pub scryptogram_type: String,
    pub lingo_length: usize,
    /// Targets must be strictly longer than this.
    pub target_min_length: usize,
    pub max_word_length: usize,
    /// Hints must be strictly longer than this.
    pub hint_min_length: usize,
    pub hint_separator: char,
}

impl Default for GameRules {
    fn default() -> Self {
        GameRules {
            start_date: ymd(2025, 3, 5),
            lingo_type: "lingo".to_string(),
            scryptogram_type: "scryptogram".to_string(),
            lingo_length: 5,
            target_min_length: 25,
            max_word_length: 12,
            hint_min_length: 6,
            hint_separator: ':',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptRules {
    pub start_date: NaiveDate,
    pub required_fields: Vec<String>,
    /// Auto-generated filler text that must never ship.
    pub placeholder_pattern: String,
    pub link_patterns: Vec<String>,
    /// Fail the run on format, link and quote problems, not only on missing dates.
    pub strict: bool,
}

impl Default for PromptRules {
    fn default() -> Self {
        PromptRules {
            start_date: ymd(2025, 3, 3),
            required_fields: [
                "Lesson",
                "WeekDay",
                "WeekNum",
                "WeekLabel",
                "Month",
                "Link",
                "Prompt",
                "PromptLink",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            placeholder_pattern: r"^Prompt for \d{4}-\d{2}-\d{2}$".to_string(),
            link_patterns: vec![
                r"https?://(?:www\.)?youtube\.com/".to_string(),
                r"https?://(?:www\.)?youtu\.be/".to_string(),
            ],
            strict: false,
        }
    }
}

impl PromptRules {
    pub fn compile(&self) -> Result<PromptPatterns, ContentError> {
        let placeholder = compile_pattern(&self.placeholder_pattern)?;
        let links = self
            .link_patterns
            .iter()
            .map(|pattern| compile_pattern(pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PromptPatterns { placeholder, links })
    }
}

#[derive(Debug, Clone)]
pub struct PromptPatterns {
    placeholder: Regex,
    links: Vec<Regex>,
}

impl PromptPatterns {
    pub fn is_placeholder(&self, prompt: &str) -> bool {
        self.placeholder.is_match(prompt)
    }

    pub fn is_video_link(&self, link: &str) -> bool {
        self.links.iter().any(|pattern| pattern.is_match(link))
    }
}

fn compile_pattern(pattern: &str) -> Result<Regex, ContentError> {
    Regex::new(pattern).map_err(|source| ContentError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid default date")
}
