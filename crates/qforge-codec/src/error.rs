//! Error and diagnostic types for the dialect codecs.

use std::fmt;

use thiserror::Error;

use qforge_ir::Dialect;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The register declaration was missing or too garbled to recover a
    /// qubit count, so no circuit can be built at all.
    #[error(
        "No usable register declaration found in {dialect} source \
         (expected e.g. `{hint}`)"
    )]
    MissingRegister {
        /// The dialect that was being parsed.
        dialect: Dialect,
        /// The declaration shape the parser was looking for.
        hint: &'static str,
    },

    /// The declared register was itself invalid (e.g. zero qubits).
    #[error("Circuit error: {0}")]
    Circuit(#[from] qforge_ir::CircuitError),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// A line the lenient parser skipped, kept for caller-visible warnings
/// instead of vanishing silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based source line number.
    pub line: usize,
    /// The trimmed line text.
    pub text: String,
    /// Why the line was skipped.
    pub note: &'static str,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line, self.note, self.text)
    }
}
