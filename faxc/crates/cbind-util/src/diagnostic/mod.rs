//! Diagnostic reporting infrastructure.
//!
//! This module provides types for creating, formatting, and reporting
//! diagnostics (errors, warnings, and notes), addressed by a stable string
//! identifier rather than a sequential numeric code — see [`codes`].
//!
//! # Examples
//!
//! ## Using the simple API
//!
//! ```
//! use cbind_util::diagnostic::{Handler, Span};
//!
//! let handler = Handler::new();
//! handler.error("unexpected token", Span::DUMMY);
//!
//! if handler.has_errors() {
//!     eprintln!("binding failed");
//! }
//! ```
//!
//! ## Using the fluent builder API
//!
//! ```
//! use cbind_util::diagnostic::{DiagnosticBuilder, Span, codes::USELESS_DECLARATION};
//!
//! let diag = DiagnosticBuilder::error("declaration does not declare anything")
//!     .code(USELESS_DECLARATION)
//!     .span(Span::DUMMY)
//!     .help("add a declarator, or remove the declaration")
//!     .build();
//! ```

mod builder;
pub mod codes;
mod level;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::{Category, DiagnosticCode};
pub use level::{ColorConfig, LabelStyle, Level};

pub use crate::Span;
use std::cell::RefCell;

/// A diagnostic message with severity, location, and an optional stable code.
///
/// # Examples
///
/// ```
/// use cbind_util::diagnostic::{Diagnostic, Level, Span};
///
/// let diag = Diagnostic::error("something went wrong", Span::DUMMY);
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level.
    pub level: Level,
    /// Main diagnostic message.
    pub message: String,
    /// Source location of the offending token.
    pub span: Span,
    /// Stable diagnostic code, if this diagnostic has one assigned.
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context.
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue.
    pub helps: Vec<String>,
    /// Source code snippets for display.
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Creates an error diagnostic.
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Sets the diagnostic code.
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// This diagnostic's category, if it carries a code.
    pub fn category(&self) -> Option<Category> {
        self.code.map(|c| c.category())
    }

    /// Adds a note to the diagnostic.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Adds a help suggestion.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Adds a source snippet.
    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

/// Collects diagnostics emitted while binding a translation unit.
///
/// # Examples
///
/// ```
/// use cbind_util::diagnostic::Handler;
///
/// let mut handler = Handler::new();
/// handler.error("unexpected token", cbind_util::Span::DUMMY);
///
/// if handler.has_errors() {
///     eprintln!("binding failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
    panic_on_error: RefCell<bool>,
}

impl Handler {
    /// Creates a new handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: RefCell::new(false),
        }
    }

    /// Creates a handler that panics as soon as an error is emitted (for tests).
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            panic_on_error: RefCell::new(true),
        }
    }

    /// Reports an error.
    ///
    /// This is the legacy API. For more control, use [`DiagnosticBuilder`].
    pub fn error(&self, message: impl Into<String>, span: Span) {
        let diag = Diagnostic::error(message, span);
        self.emit(diag);
    }

    /// Reports a warning.
    ///
    /// This is the legacy API. For more control, use [`DiagnosticBuilder`].
    pub fn warning(&self, message: impl Into<String>, span: Span) {
        let diag = Diagnostic::warning(message, span);
        self.emit(diag);
    }

    fn emit(&self, diagnostic: Diagnostic) {
        if *self.panic_on_error.borrow() && diagnostic.level == Level::Error {
            panic!("diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Emits a pre-built diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    /// Creates a builder for an error at `span`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cbind_util::diagnostic::{Handler, Span, codes::USELESS_DECLARATION};
    ///
    /// let handler = Handler::new();
    /// handler.build_error(Span::DUMMY, "declaration does not declare anything")
    ///     .code(USELESS_DECLARATION)
    ///     .emit(&handler);
    /// ```
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    /// Creates a builder for a warning at `span`.
    pub fn build_warning(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message).span(span)
    }

    /// Returns true if any errors have been reported.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of errors reported so far.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Number of warnings reported so far.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Warning)
            .count()
    }

    /// All diagnostics reported so far, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clears all diagnostics.
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
