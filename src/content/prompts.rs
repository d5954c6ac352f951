use crate::content::dates::{parse_date, DateRange};
use crate::content::error::ContentError;
use crate::content::report::{Severity, ValidationReport};
use crate::content::rules::{PromptPatterns, PromptRules};
use crate::content::text::has_consecutive_escaped_quotes;
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

pub struct PromptValidator {
    rules: PromptRules,
    patterns: PromptPatterns,
}

impl PromptValidator {
    pub fn new(rules: PromptRules) -> Result<Self, ContentError> {
        let patterns = rules.compile()?;
        Ok(PromptValidator { rules, patterns })
    }

    pub fn rules(&self) -> &PromptRules {
        &self.rules
    }

    /// Checks every dated prompt inside `range`, then that each day of `range` has one.
    pub fn validate(&self, document: &Value, range: DateRange) -> ValidationReport {
        let mut report = ValidationReport::new(range);
        let Some(prompts) = document.get("prompts").and_then(Value::as_array) else {
            report.error("", "JSON file does not contain a 'prompts' array.");
            return report;
        };

        let mut present: BTreeSet<NaiveDate> = BTreeSet::new();
        for (index, prompt) in prompts.iter().enumerate() {
            let Some(object) = prompt.as_object() else {
                report.warning(format!("prompts[{index}]"), "entry is not an object");
                continue;
            };
            let Some(raw_date) = object.get("Date").and_then(Value::as_str) else {
                continue;
            };
            let date = match parse_date(raw_date) {
                Ok(date) => date,
                Err(err) => {
                    report.warning(
                        format!("prompts[{index}]"),
                        format!("skipping prompt with invalid Date '{raw_date}': {err}"),
                    );
                    continue;
                }
            };

            if !present.insert(date) {
                report.warning(date.to_string(), "more than one prompt for this date");
            }
            if range.contains(date) {
                self.check_prompt(&mut report, &date.to_string(), object);
            }
        }

        report.checked_days = range.len();
        for date in range.days().filter(|date| !present.contains(date)) {
            report.error(date.to_string(), format!("Missing prompt for date {date}"));
        }

        report
    }

    /// Per-prompt content problems are printed either way; they only fail the run
    /// when `strict` is set.
    fn flag(&self, report: &mut ValidationReport, date: &str, message: String) {
        let severity = if self.rules.strict {
            Severity::Error
        } else {
            Severity::Warning
        };
        report.push(severity, date, message);
    }

    fn check_prompt(&self, report: &mut ValidationReport, date: &str, prompt: &Map<String, Value>) {
        let text = prompt.get("Prompt").and_then(Value::as_str);

        if let Some(text) = text {
            if self.patterns.is_placeholder(text) {
                self.flag(report, date, format!("Invalid prompt format: '{text}'"));
            }
        }

        for field in &self.rules.required_fields {
            if !prompt.contains_key(field) {
                self.flag(report, date, format!("is missing a {field}"));
            }
        }

        if let Some(link) = prompt.get("PromptLink") {
            match link.as_str() {
                Some(link) if self.patterns.is_video_link(link) => {}
                Some(link) => self.flag(
                    report,
                    date,
                    format!("has PromptLink but it's not a YouTube link: '{link}'"),
                ),
                None => self.flag(report, date, format!("PromptLink is not a string: {link}")),
            }
        }

        if text.is_some_and(has_consecutive_escaped_quotes) {
            self.flag(
                report,
                date,
                "Prompt contains consecutive escaped double quotes".to_string(),
            );
        }
    }
}
