//! Diagnostic collection for parse-time reporting
//!
//! Parsing never fails as a whole: problems are reported as structured
//! diagnostics while the tree keeps being built. The entry point applies a
//! retention policy on top: only diagnostics at the severe tier survive
//! into the parse result, everything below is discarded. Post-parse
//! consumers that want finer reporting belong to the base grammar, not to
//! this front end.

use std::fmt;

/// Diagnostic severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Information,
    Hint,
}

impl Severity {
    /// Whether a diagnostic at this level survives the entry point's
    /// retention policy.
    pub fn is_severe(self) -> bool {
        matches!(self, Severity::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Information => write!(f, "info"),
            Severity::Hint => write!(f, "hint"),
        }
    }
}

/// A single reported issue, attributed to a line of the parsed document
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub line: usize,
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            line,
            severity,
            message: message.into(),
        }
    }

    pub fn error(line: usize, message: impl Into<String>) -> Self {
        Self::new(line, Severity::Error, message)
    }

    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Self::new(line, Severity::Warning, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_errors_are_severe() {
        assert!(Severity::Error.is_severe());
        assert!(!Severity::Warning.is_severe());
        assert!(!Severity::Information.is_severe());
        assert!(!Severity::Hint.is_severe());
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::warning(4, "block ends without a blank line");
        assert_eq!(
            diagnostic.to_string(),
            "line 4: warning: block ends without a blank line"
        );
    }
}
