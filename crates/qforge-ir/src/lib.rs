//! QForge Circuit Intermediate Representation
//!
//! This crate provides the core data structures for representing the small
//! quantum circuits built in the QForge editor. It is the foundation the
//! simulator (`qforge-sim`) and the dialect codecs (`qforge-codec`) are
//! built on.
//!
//! # Overview
//!
//! A [`Circuit`] is a register size plus a collection of placed [`Gate`]s,
//! each sitting on a `(qubit, column)` grid position. Two-qubit gates act
//! on the fixed adjacent pair `(qubit, qubit + 1)` — a deliberate builder
//! simplification, encoded once in [`Operands`].
//!
//! The [`catalog`] module is the single source of truth shared by the
//! simulator and every codec: the 2×2 unitary of each single-qubit kind
//! and the literal token each kind uses in each of the five dialects.
//!
//! # Example: Building a Bell State
//!
//! ```rust
//! use qforge_ir::{Circuit, GateKind, GateParams};
//!
//! let mut circuit = Circuit::new(2).unwrap();
//! circuit.add_gate(GateKind::H, 0, 0, GateParams::default()).unwrap();
//! circuit.add_gate(GateKind::Cx, 0, 1, GateParams::default()).unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.gate_count(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard gate |
//! | `X`, `Y`, `Z` | 1 | Pauli gates |
//! | `S`, `T` | 1 | Phase gates |
//! | `Rx`, `Ry`, `Rz` | 1 | Parametric rotations |
//! | `Cx`, `Cz` | 2 | Controlled gates on `(q, q+1)` |
//! | `Swap` | 2 | SWAP of `(q, q+1)` |
//! | `Measure` | 1 | Measurement marker |

pub mod catalog;
pub mod circuit;
pub mod error;
pub mod gate;

pub use catalog::{Dialect, DialectTokens};
pub use circuit::Circuit;
pub use error::{CircuitError, CircuitResult};
pub use gate::{Gate, GateKind, GateParams, Operands};
