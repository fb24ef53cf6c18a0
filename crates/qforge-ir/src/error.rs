//! Error types for the IR crate.

use thiserror::Error;

/// Errors that can occur when constructing or mutating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CircuitError {
    /// Gate placed on a qubit outside the register.
    #[error("Qubit index {qubit} out of range for {num_qubits}-qubit circuit")]
    QubitOutOfRange {
        /// The offending qubit index.
        qubit: usize,
        /// The circuit's register size.
        num_qubits: usize,
    },

    /// Two-qubit gate placed too close to the register boundary.
    #[error("Gate '{gate}' acts on qubits {qubit} and {}, but the circuit has only {num_qubits} qubits", .qubit + 1)]
    PairOutOfRange {
        /// Name of the gate.
        gate: &'static str,
        /// The first (control) qubit index.
        qubit: usize,
        /// The circuit's register size.
        num_qubits: usize,
    },

    /// A circuit must have at least one qubit.
    #[error("Invalid qubit count: {0} (a circuit needs at least one qubit)")]
    InvalidQubitCount(usize),

    /// Gate name not in the catalog.
    #[error("Unknown gate kind: '{0}'")]
    UnknownGate(String),

    /// Dialect name not recognized.
    #[error("Unknown dialect: '{0}'")]
    UnknownDialect(String),
}

/// Result type for IR operations.
pub type CircuitResult<T> = Result<T, CircuitError>;
