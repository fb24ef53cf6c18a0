//! Error types for the simulator crate.

use thiserror::Error;

/// Errors that can occur during simulation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Circuit exceeds the exact-simulation qubit limit.
    ///
    /// This is expected and recoverable: the caller can shrink the
    /// register and retry. State size is `2^n`, so the cap is small.
    #[error("Circuit has {num_qubits} qubits; exact simulation is limited to {max_qubits}")]
    UnsupportedScale {
        /// Qubit count of the offending circuit.
        num_qubits: usize,
        /// The simulator's configured limit.
        max_qubits: usize,
    },
}

/// Result type for simulation operations.
pub type SimResult<T> = Result<T, SimError>;
