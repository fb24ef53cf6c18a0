//! Exact Statevector Simulator for QForge
//!
//! Consumes a `qforge_ir::Circuit` and produces the exact complex
//! amplitude vector, plus the derived read-outs the editor displays: the
//! per-basis-state probability table and the Bloch-sphere projection of
//! qubit 0.
//!
//! Simulation is synchronous and pure; the only failure mode is the
//! qubit cap ([`SimError::UnsupportedScale`]), since state size grows as
//! `2^n`. Measurement gates are no-ops here: probabilities are read out
//! of the final state rather than sampled.
//!
//! # Example
//!
//! ```rust
//! use qforge_ir::Circuit;
//! use qforge_sim::simulate;
//!
//! let sv = simulate(&Circuit::bell().unwrap()).unwrap();
//! let probs = sv.probabilities();
//! assert!((probs["00"] - 0.5).abs() < 1e-9);
//! assert!((probs["11"] - 0.5).abs() < 1e-9);
//! ```

pub mod error;
pub mod simulator;
pub mod statevector;

pub use error::{SimError, SimResult};
pub use simulator::{simulate, Simulator, DEFAULT_MAX_QUBITS};
pub use statevector::{BlochVector, Statevector};
