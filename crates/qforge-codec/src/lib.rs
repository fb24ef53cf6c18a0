//! Dialect Codecs for QForge
//!
//! Bidirectional translation between the circuit IR and five textual
//! dialects: OpenQASM 2.0, Qiskit, Cirq, Q#, and Quil. Generation is
//! deterministic; parsing is lenient and anchors each dialect on its
//! register declaration, skipping lines it does not understand and
//! reporting them as [`Diagnostic`]s.
//!
//! # Example
//!
//! ```rust
//! use qforge_codec::{generate, parse, Dialect};
//! use qforge_ir::Circuit;
//!
//! let bell = Circuit::bell().unwrap();
//! let qasm = generate(Dialect::Qasm, &bell);
//! let parsed = parse(Dialect::Qasm, &qasm).unwrap();
//! assert_eq!(parsed.circuit, bell);
//! ```

pub mod cirq;
pub mod error;
pub mod qasm;
pub mod qiskit;
pub mod qsharp;
pub mod quil;

mod emit;
mod lexer;
mod scan;

pub use error::{Diagnostic, ParseError, ParseResult};
pub use qforge_ir::Dialect;

use qforge_ir::Circuit;

/// The outcome of a lenient parse: the recovered circuit plus the
/// lines that were skipped along the way.
#[derive(Debug)]
pub struct Parsed {
    /// The recovered circuit.
    pub circuit: Circuit,
    /// Skipped lines, in source order.
    pub ignored: Vec<Diagnostic>,
}

/// Render a circuit in the given dialect.
pub fn generate(dialect: Dialect, circuit: &Circuit) -> String {
    match dialect {
        Dialect::Qasm => qasm::generate(circuit),
        Dialect::Qiskit => qiskit::generate(circuit),
        Dialect::Cirq => cirq::generate(circuit),
        Dialect::QSharp => qsharp::generate(circuit),
        Dialect::Quil => quil::generate(circuit),
    }
}

/// Parse source text in the given dialect back into a circuit.
pub fn parse(dialect: Dialect, source: &str) -> ParseResult<Parsed> {
    match dialect {
        Dialect::Qasm => qasm::parse(source),
        Dialect::Qiskit => qiskit::parse(source),
        Dialect::Cirq => cirq::parse(source),
        Dialect::QSharp => qsharp::parse(source),
        Dialect::Quil => quil::parse(source),
    }
}
