//! Diagnostic module - error and warning reporting infrastructure.
//!
//! The semantic pass never returns a `Result`; instead it streams
//! diagnostics to a [`Handler`] as it walks the tree and returns a
//! single success flag at the end (see `ravenc-sem::check`).

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
    Note,
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
            Level::Note => write!(f, "note"),
            Level::Help => write!(f, "help"),
        }
    }
}

/// A diagnostic message with severity and location.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
}

impl Diagnostic {
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

/// Builder for fluently constructing a [`Diagnostic`] before emitting it
/// to a [`Handler`].
pub struct DiagnosticBuilder {
    diag: Diagnostic,
}

impl DiagnosticBuilder {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            diag: Diagnostic::new(Level::Error, message, Span::DUMMY),
        }
    }

    pub fn span(mut self, span: Span) -> Self {
        self.diag.span = span;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.diag.notes.push(note.into());
        self
    }

    pub fn build(self) -> Diagnostic {
        self.diag
    }

    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}

/// Collects diagnostics emitted while walking the AST.
///
/// The order diagnostics are pushed in is the order the pass visits the
/// tree (declarations before bodies, statement order, left-before-right
/// in assignments/expressions).
#[derive(Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Report a plain error string at `span`, prefixed the way
    /// `err_header` formats it.
    pub fn error(&self, span: Span, message: impl Into<String>) {
        self.emit_diagnostic(Diagnostic::error(message, span));
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Render every collected diagnostic as `err_header(line): message`
    /// lines, the line-oriented textual stream format §6 specifies.
    pub fn render(&self) -> String {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| format!("{}{}", err_header(d.span.line), d.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Formats the line-number prefix every diagnostic line carries.
pub fn err_header(line: u32) -> String {
    format!("Line {}: ", line)
}
