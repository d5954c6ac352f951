use crate::content::dates::DateRange;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One finding. `context` is the date being checked, an entry index, or empty for
/// document-level problems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub context: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.context.is_empty() {
            write!(f, "{}: {}", self.severity.label(), self.message)
        } else {
            write!(f, "{} [{}]: {}", self.severity.label(), self.context, self.message)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub range: DateRange,
    pub checked_days: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    pub fn new(range: DateRange) -> Self {
        ValidationReport {
            range,
            checked_days: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn push(
        &mut self,
        severity: Severity,
        context: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.diagnostics.push(Diagnostic {
            severity,
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn error(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, context, message);
    }

    pub fn warning(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, context, message);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diag| diag.severity == Severity::Error)
    }

    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|diag| diag.severity == severity)
            .count()
    }

    pub fn messages_for<'a>(&'a self, context: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.diagnostics
            .iter()
            .filter(move |diag| diag.context == context)
            .map(|diag| diag.message.as_str())
    }
}
