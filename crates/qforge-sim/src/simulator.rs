//! Circuit execution with the scale guard.

use tracing::debug;

use qforge_ir::Circuit;

use crate::error::{SimError, SimResult};
use crate::statevector::Statevector;

/// Default qubit cap for exact simulation.
pub const DEFAULT_MAX_QUBITS: usize = 4;

/// Exact statevector simulator.
///
/// Memory is `O(2^n)` complex amplitudes, so the simulator refuses
/// circuits above its qubit cap instead of degrading.
pub struct Simulator {
    /// Maximum number of qubits accepted.
    max_qubits: usize,
}

impl Simulator {
    /// Create a simulator with the default qubit cap.
    pub fn new() -> Self {
        Self {
            max_qubits: DEFAULT_MAX_QUBITS,
        }
    }

    /// Create a simulator with a custom qubit cap.
    pub fn with_max_qubits(max_qubits: usize) -> Self {
        Self { max_qubits }
    }

    /// The configured qubit cap.
    pub fn max_qubits(&self) -> usize {
        self.max_qubits
    }

    /// Run a circuit from |0…0⟩ and return the final statevector.
    ///
    /// Gates execute in column order, ties broken by insertion order.
    /// The only failure is the scale guard: invalid circuits cannot be
    /// constructed in the first place.
    pub fn run(&self, circuit: &Circuit) -> SimResult<Statevector> {
        let num_qubits = circuit.num_qubits();
        if num_qubits > self.max_qubits {
            return Err(SimError::UnsupportedScale {
                num_qubits,
                max_qubits: self.max_qubits,
            });
        }

        debug!(
            num_qubits,
            gates = circuit.gate_count(),
            "starting statevector simulation"
        );

        let mut sv = Statevector::new(num_qubits);
        for gate in circuit.ordered_gates() {
            sv.apply(gate);
        }

        debug!(norm_sqr = sv.norm_sqr(), "simulation finished");
        Ok(sv)
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulate a circuit with the default qubit cap.
pub fn simulate(circuit: &Circuit) -> SimResult<Statevector> {
    Simulator::new().run(circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use qforge_ir::{GateKind, GateParams};

    #[test]
    fn test_scale_guard() {
        let circuit = Circuit::new(5).unwrap();
        assert!(matches!(
            simulate(&circuit),
            Err(SimError::UnsupportedScale {
                num_qubits: 5,
                max_qubits: DEFAULT_MAX_QUBITS,
            })
        ));

        assert!(Simulator::with_max_qubits(6).run(&circuit).is_ok());
    }

    #[test]
    fn test_bell_scenario() {
        let sv = simulate(&Circuit::bell().unwrap()).unwrap();
        let probs = sv.probabilities();

        assert!((probs["00"] - 0.5).abs() < 1e-9);
        assert!((probs["11"] - 0.5).abs() < 1e-9);
        assert!(probs["01"].abs() < 1e-9);
        assert!(probs["10"].abs() < 1e-9);
    }

    #[test]
    fn test_pauli_x_scenario() {
        let mut circuit = Circuit::new(1).unwrap();
        circuit
            .add_gate(GateKind::X, 0, 0, GateParams::default())
            .unwrap();

        let probs = simulate(&circuit).unwrap().probabilities();
        assert!(probs["0"].abs() < 1e-9);
        assert!((probs["1"] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_circuit_stays_in_ground_state() {
        let sv = simulate(&Circuit::new(3).unwrap()).unwrap();
        assert!((sv.amplitudes()[0].re - 1.0).abs() < 1e-12);
    }

    /// Strategy: an arbitrary valid circuit within the simulation cap.
    fn arb_circuit() -> impl Strategy<Value = Circuit> {
        (1usize..=4)
            .prop_flat_map(|n| {
                let gate = (
                    0usize..GateKind::ALL.len(),
                    0usize..n,
                    0usize..8,
                    -std::f64::consts::PI..std::f64::consts::PI,
                );
                (Just(n), proptest::collection::vec(gate, 0..12))
            })
            .prop_map(|(n, raw_gates)| {
                let mut circuit = Circuit::new(n).unwrap();
                for (kind_idx, qubit, column, angle) in raw_gates {
                    let mut kind = GateKind::ALL[kind_idx];
                    // Two-qubit gates need a neighbor below them.
                    if kind.num_qubits() == 2 && qubit + 1 >= n {
                        kind = GateKind::X;
                    }
                    let params = if kind.is_rotation() {
                        GateParams::angle(angle)
                    } else {
                        GateParams::default()
                    };
                    circuit.add_gate(kind, qubit, column, params).unwrap();
                }
                circuit
            })
    }

    proptest! {
        /// Total probability stays 1 through any gate sequence.
        #[test]
        fn prop_simulation_preserves_unitarity(circuit in arb_circuit()) {
            let sv = simulate(&circuit).unwrap();
            prop_assert!((sv.norm_sqr() - 1.0).abs() < 1e-9);
        }
    }
}
