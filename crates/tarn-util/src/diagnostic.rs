//! Diagnostic module - error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting, and querying
//! interpreter diagnostics (errors, warnings, notes, and help messages).
//!
//! # Examples
//!
//! ```
//! use tarn_util::diagnostic::Handler;
//!
//! let handler = Handler::new();
//! handler.error("expected next token to be ), got ; instead");
//!
//! if handler.has_errors() {
//!     eprintln!("parsing failed with {} errors", handler.error_count());
//! }
//! ```

use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use tarn_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// An error that prevents evaluation
    Error,
    /// A warning that doesn't prevent evaluation
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
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

/// A diagnostic message with severity
///
/// # Examples
///
/// ```
/// use tarn_util::diagnostic::{Diagnostic, Level};
///
/// let diag = Diagnostic::error("no prefix parse function for } found");
/// assert_eq!(diag.level, Level::Error);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.level, self.message)
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The `Handler` collects diagnostics behind a `RefCell` so that phases
/// holding shared references can still report. It provides methods for
/// querying counts and draining the accumulated messages.
///
/// # Examples
///
/// ```
/// use tarn_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// handler.error("expected next token to be =, got 5 instead");
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a diagnostic
    pub fn emit(&self, diag: Diagnostic) {
        self.diagnostics.borrow_mut().push(diag);
    }

    /// Record an error
    pub fn error(&self, message: impl Into<String>) {
        self.emit(Diagnostic::error(message));
    }

    /// Record a warning
    pub fn warning(&self, message: impl Into<String>) {
        self.emit(Diagnostic::warning(message));
    }

    /// Returns true if any error-level diagnostic was recorded
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Number of error-level diagnostics recorded
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Messages of all error-level diagnostics, in the order recorded
    pub fn error_messages(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .map(|d| d.message.clone())
            .collect()
    }

    /// All recorded diagnostics, in the order recorded
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Remove and return all recorded diagnostics
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.diagnostics.borrow_mut())
    }
}
