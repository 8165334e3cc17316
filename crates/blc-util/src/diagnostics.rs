//! Diagnostic collection.
//!
//! Semantic problems found during code generation do not abort emission:
//! they are recorded here and surfaced by the driver once the walk is
//! complete. Lex and parse failures never reach this type; they are fatal
//! `Result` errors in their own crates.

use std::fmt;

/// How serious a collected diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single collected message, optionally tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub line: Option<u32>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line: None,
        }
    }

    pub fn error_at(message: impl Into<String>, line: u32) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line: Some(line),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{} (line {})", self.message, line),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Accumulates diagnostics emitted during a compilation phase.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_handler_has_no_errors() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_emit_and_count() {
        let mut handler = Handler::new();
        handler.emit(Diagnostic::error("unknown variable x"));
        handler.emit(Diagnostic::error_at("break outside of loop", 7));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics().len(), 2);
    }

    #[test]
    fn test_display_with_line() {
        let d = Diagnostic::error_at("unexpected token", 3);
        assert_eq!(d.to_string(), "unexpected token (line 3)");
    }

    #[test]
    fn test_display_without_line() {
        let d = Diagnostic::error("no main function defined");
        assert_eq!(d.to_string(), "no main function defined");
    }
}
