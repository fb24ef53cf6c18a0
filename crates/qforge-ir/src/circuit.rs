//! The circuit value type and its validated mutations.

use serde::{Deserialize, Serialize};

use crate::error::{CircuitError, CircuitResult};
use crate::gate::{Gate, GateKind, GateParams, Operands};

/// A quantum circuit: a register size and a collection of placed gates.
///
/// The circuit is a plain owned value. Every mutation validates its
/// arguments and returns a [`CircuitResult`]; there is no global or shared
/// state. Ordering for simulation and code emission is by column, with
/// ties broken by insertion order (the order gates were added), which is
/// the committed tie-break rule for the whole crate family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Number of qubits in the register.
    num_qubits: usize,
    /// Placed gates, in insertion order.
    gates: Vec<Gate>,
}

impl Circuit {
    /// Create an empty circuit with the given register size.
    pub fn new(num_qubits: usize) -> CircuitResult<Self> {
        if num_qubits == 0 {
            return Err(CircuitError::InvalidQubitCount(num_qubits));
        }
        Ok(Self {
            num_qubits,
            gates: vec![],
        })
    }

    /// Number of qubits in the register.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Placed gates in insertion order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of placed gates.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }

    /// Check whether the circuit has no gates.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Gates ordered for execution: by column ascending, insertion order
    /// breaking ties.
    pub fn ordered_gates(&self) -> Vec<&Gate> {
        let mut ordered: Vec<&Gate> = self.gates.iter().collect();
        // Stable sort, so same-column gates keep their insertion order.
        ordered.sort_by_key(|g| g.column);
        ordered
    }

    /// Place a gate, validating it against the register.
    ///
    /// An existing gate at the same `(qubit, column)` position is replaced
    /// (last write wins).
    pub fn add_gate(
        &mut self,
        kind: GateKind,
        qubit: usize,
        column: usize,
        params: GateParams,
    ) -> CircuitResult<()> {
        let gate = Gate::new(kind, qubit, column).with_params(params);
        self.validate(&gate)?;
        self.gates
            .retain(|g| !(g.qubit == qubit && g.column == column));
        self.gates.push(gate);
        Ok(())
    }

    /// Remove the gate at `(qubit, column)`. Returns whether one existed.
    pub fn remove_gate(&mut self, qubit: usize, column: usize) -> bool {
        let before = self.gates.len();
        self.gates
            .retain(|g| !(g.qubit == qubit && g.column == column));
        self.gates.len() != before
    }

    /// Resize the register. Shrinking drops gates that no longer fit,
    /// including two-qubit gates whose second operand falls off the end.
    pub fn set_num_qubits(&mut self, num_qubits: usize) -> CircuitResult<()> {
        if num_qubits == 0 {
            return Err(CircuitError::InvalidQubitCount(num_qubits));
        }
        self.num_qubits = num_qubits;
        self.gates.retain(|g| match g.operands() {
            Operands::Single(q) => q < num_qubits,
            Operands::Pair { target, .. } => target < num_qubits,
        });
        Ok(())
    }

    /// Remove all gates, keeping the register size.
    pub fn clear(&mut self) {
        self.gates.clear();
    }

    fn validate(&self, gate: &Gate) -> CircuitResult<()> {
        match gate.operands() {
            Operands::Single(q) if q >= self.num_qubits => Err(CircuitError::QubitOutOfRange {
                qubit: q,
                num_qubits: self.num_qubits,
            }),
            Operands::Pair { control, target } if target >= self.num_qubits => {
                Err(CircuitError::PairOutOfRange {
                    gate: gate.kind.name(),
                    qubit: control,
                    num_qubits: self.num_qubits,
                })
            }
            _ => Ok(()),
        }
    }

    // =========================================================================
    // Pre-built circuits
    // =========================================================================

    /// The two-qubit Bell pair: H on qubit 0, then CNOT.
    pub fn bell() -> CircuitResult<Self> {
        let mut circuit = Self::new(2)?;
        circuit.add_gate(GateKind::H, 0, 0, GateParams::default())?;
        circuit.add_gate(GateKind::Cx, 0, 1, GateParams::default())?;
        Ok(circuit)
    }

    /// An n-qubit GHZ state: H on qubit 0 followed by a CNOT chain.
    pub fn ghz(n: usize) -> CircuitResult<Self> {
        let mut circuit = Self::new(n)?;
        circuit.add_gate(GateKind::H, 0, 0, GateParams::default())?;
        for i in 0..n.saturating_sub(1) {
            circuit.add_gate(GateKind::Cx, i, i + 1, GateParams::default())?;
        }
        Ok(circuit)
    }
}
