use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("date '{0}' has surrounding whitespace")]
    Whitespace(String),
    #[error(transparent)]
    Format(#[from] chrono::ParseError),
}

/// chrono skips leading whitespace before numeric fields, so it is rejected here.
pub fn parse_date(raw: &str) -> Result<NaiveDate, DateError> {
    if raw.trim() != raw {
        return Err(DateError::Whitespace(raw.to_string()));
    }
    Ok(NaiveDate::parse_from_str(raw, DATE_FORMAT)?)
}

/// Inclusive on both ends. Empty when `end` precedes `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.len())
    }
}
