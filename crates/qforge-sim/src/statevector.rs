//! Statevector representation and gate application.

use std::collections::BTreeMap;

use num_complex::Complex64;

use qforge_ir::catalog;
use qforge_ir::{Gate, GateKind, Operands};

/// A statevector over `2^n` basis states.
///
/// Basis index `i` encodes qubit `q` in bit `(n - 1 - q)`: qubit 0 is the
/// most significant bit, so the label of index `i` is just `i` written as
/// an n-bit binary string read left to right.
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

/// A point on (or inside) the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlochVector {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Statevector {
    /// Create a new statevector initialized to |0…0⟩.
    pub fn new(num_qubits: usize) -> Self {
        let size = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The raw amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Total probability; 1.0 within floating tolerance for any state
    /// reached through unitary gates.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// The mask selecting qubit `q`'s bit in a basis index.
    #[inline]
    fn mask(&self, qubit: usize) -> usize {
        1 << (self.num_qubits - 1 - qubit)
    }

    /// Apply one placed gate.
    pub fn apply(&mut self, gate: &Gate) {
        match gate.operands() {
            Operands::Single(qubit) => {
                // Measure has no matrix and leaves the state untouched;
                // probabilities are read out, not sampled.
                if let Some(matrix) = catalog::unitary(gate.kind, gate.angle()) {
                    self.apply_single(qubit, &matrix);
                }
            }
            Operands::Pair { control, target } => match gate.kind {
                GateKind::Cx => self.apply_cx(control, target),
                GateKind::Cz => self.apply_cz(control, target),
                GateKind::Swap => self.apply_swap(control, target),
                _ => unreachable!("single-qubit kind with pair operands"),
            },
        }
    }

    /// Apply a 2×2 unitary to one qubit.
    ///
    /// Writes into a fresh buffer so paired updates never read amplitudes
    /// already rewritten in the same pass.
    fn apply_single(&mut self, qubit: usize, matrix: &[Complex64; 4]) {
        let mask = self.mask(qubit);
        let mut next = vec![Complex64::new(0.0, 0.0); self.amplitudes.len()];

        for i in 0..self.amplitudes.len() {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                next[i] = matrix[0] * a + matrix[1] * b;
                next[j] = matrix[2] * a + matrix[3] * b;
            }
        }

        self.amplitudes = next;
    }

    /// Flip the target bit wherever the control bit is set.
    fn apply_cx(&mut self, control: usize, target: usize) {
        let cmask = self.mask(control);
        let tmask = self.mask(target);
        for i in 0..self.amplitudes.len() {
            if (i & cmask != 0) && (i & tmask == 0) {
                let j = i | tmask;
                self.amplitudes.swap(i, j);
            }
        }
    }

    /// Negate amplitudes where both bits are set.
    fn apply_cz(&mut self, control: usize, target: usize) {
        let cmask = self.mask(control);
        let tmask = self.mask(target);
        for i in 0..self.amplitudes.len() {
            if (i & cmask != 0) && (i & tmask != 0) {
                self.amplitudes[i] = -self.amplitudes[i];
            }
        }
    }

    /// Exchange amplitudes between indices that differ only in the two
    /// qubits' bit values.
    fn apply_swap(&mut self, q1: usize, q2: usize) {
        let mask1 = self.mask(q1);
        let mask2 = self.mask(q2);
        for i in 0..self.amplitudes.len() {
            if (i & mask1 != 0) && (i & mask2 == 0) {
                let j = (i & !mask1) | mask2;
                self.amplitudes.swap(i, j);
            }
        }
    }

    // =========================================================================
    // Derived queries
    // =========================================================================

    /// Probability of each basis state, keyed by its binary label.
    ///
    /// Labels read qubit 0 leftmost. A `BTreeMap` keeps iteration order
    /// deterministic for display.
    pub fn probabilities(&self) -> BTreeMap<String, f64> {
        self.amplitudes
            .iter()
            .enumerate()
            .map(|(i, amp)| (self.basis_label(i), amp.norm_sqr()))
            .collect()
    }

    /// The n-bit binary label of basis state `i`.
    pub fn basis_label(&self, index: usize) -> String {
        format!("{index:0width$b}", width = self.num_qubits)
    }

    /// Sum of all amplitudes whose `qubit` bit equals `one`.
    ///
    /// This is a projection for the Bloch-sphere view, not a partial
    /// trace; it only approximates the single-qubit state when `qubit`
    /// is unentangled from the rest of the register.
    pub fn reduced_amplitude(&self, qubit: usize, one: bool) -> Complex64 {
        let mask = self.mask(qubit);
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| (i & mask != 0) == one)
            .map(|(_, amp)| *amp)
            .sum()
    }

    /// Bloch-sphere projection of qubit 0.
    ///
    /// Renormalizes the two reduced amplitudes (α, β) and returns
    /// `x = 2·Re(α·β̄)`, `y = 2·Im(ᾱ·β)`, `z = |α|² − |β|²`; `None` when
    /// both reduced amplitudes cancel to zero. Same caveat as
    /// [`reduced_amplitude`](Self::reduced_amplitude): exact only for an
    /// unentangled qubit 0.
    pub fn bloch_projection(&self) -> Option<BlochVector> {
        let alpha = self.reduced_amplitude(0, false);
        let beta = self.reduced_amplitude(0, true);

        let norm = (alpha.norm_sqr() + beta.norm_sqr()).sqrt();
        if norm == 0.0 {
            return None;
        }
        let a = alpha / norm;
        let b = beta / norm;

        Some(BlochVector {
            x: 2.0 * (a * b.conj()).re,
            y: 2.0 * (a.conj() * b).im,
            z: a.norm_sqr() - b.norm_sqr(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qforge_ir::GateParams;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    fn approx_eq(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-10
    }

    fn gate(kind: GateKind, qubit: usize) -> Gate {
        Gate::new(kind, qubit, 0)
    }

    #[test]
    fn test_initial_state() {
        let sv = Statevector::new(2);
        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(1.0, 0.0)));
        for i in 1..4 {
            assert!(approx_eq(sv.amplitudes()[i], Complex64::new(0.0, 0.0)));
        }
    }

    #[test]
    fn test_hadamard() {
        let mut sv = Statevector::new(1);
        sv.apply(&gate(GateKind::H, 0));

        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_x_gate() {
        let mut sv = Statevector::new(1);
        sv.apply(&gate(GateKind::X, 0));

        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_bell_state() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::H, 0));
        sv.apply(&gate(GateKind::Cx, 0));

        assert!(approx_eq(sv.amplitudes()[0], Complex64::new(FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[2], Complex64::new(0.0, 0.0)));
        assert!(approx_eq(sv.amplitudes()[3], Complex64::new(FRAC_1_SQRT_2, 0.0)));
    }

    #[test]
    fn test_qubit_zero_is_most_significant() {
        // X on qubit 0 of a 2-qubit register lands in |10⟩ = index 2.
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::X, 0));
        assert!(approx_eq(sv.amplitudes()[2], Complex64::new(1.0, 0.0)));
    }

    #[test]
    fn test_cz_phase() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::X, 0));
        sv.apply(&gate(GateKind::X, 1));
        sv.apply(&gate(GateKind::Cz, 0));

        assert!(approx_eq(sv.amplitudes()[3], Complex64::new(-1.0, 0.0)));
    }

    #[test]
    fn test_swap() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::X, 0)); // |10⟩
        sv.apply(&gate(GateKind::Swap, 0));

        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(1.0, 0.0))); // |01⟩
        assert!(approx_eq(sv.amplitudes()[2], Complex64::new(0.0, 0.0)));
    }

    #[test]
    fn test_rx_pi_is_x_up_to_phase() {
        let mut sv = Statevector::new(1);
        sv.apply(&Gate::new(GateKind::Rx, 0, 0).with_params(GateParams::angle(PI)));

        assert!(approx_eq(sv.amplitudes()[1], Complex64::new(0.0, -1.0)));
        assert!(sv.amplitudes()[0].norm() < 1e-10);
    }

    #[test]
    fn test_measure_is_a_noop() {
        let mut sv = Statevector::new(1);
        sv.apply(&gate(GateKind::H, 0));
        let before = sv.amplitudes().to_vec();
        sv.apply(&gate(GateKind::Measure, 0));
        assert_eq!(sv.amplitudes(), &before[..]);
    }

    #[test]
    fn test_probabilities_labels() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::H, 0));
        sv.apply(&gate(GateKind::Cx, 0));

        let probs = sv.probabilities();
        assert!((probs["00"] - 0.5).abs() < 1e-9);
        assert!((probs["11"] - 0.5).abs() < 1e-9);
        assert!(probs["01"].abs() < 1e-9);
        assert!(probs["10"].abs() < 1e-9);
    }

    #[test]
    fn test_bloch_plus_state() {
        let mut sv = Statevector::new(1);
        sv.apply(&gate(GateKind::H, 0));

        let bloch = sv.bloch_projection().unwrap();
        assert!((bloch.x - 1.0).abs() < 1e-9);
        assert!(bloch.y.abs() < 1e-9);
        assert!(bloch.z.abs() < 1e-9);
    }

    #[test]
    fn test_bloch_plus_i_state() {
        // H then S gives |+i⟩, which sits at y = +1.
        let mut sv = Statevector::new(1);
        sv.apply(&gate(GateKind::H, 0));
        sv.apply(&gate(GateKind::S, 0));

        let bloch = sv.bloch_projection().unwrap();
        assert!(bloch.x.abs() < 1e-9);
        assert!((bloch.y - 1.0).abs() < 1e-9);
        assert!(bloch.z.abs() < 1e-9);
    }

    #[test]
    fn test_reduced_amplitude_sums() {
        let mut sv = Statevector::new(2);
        sv.apply(&gate(GateKind::H, 1));

        // Qubit 0 is untouched: everything sits in its |0⟩ half.
        let alpha = sv.reduced_amplitude(0, false);
        let beta = sv.reduced_amplitude(0, true);
        assert!(approx_eq(alpha, Complex64::new(2.0 * FRAC_1_SQRT_2, 0.0)));
        assert!(approx_eq(beta, Complex64::new(0.0, 0.0)));
    }
}
