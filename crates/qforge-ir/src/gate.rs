//! Gate kinds and placed gates.

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CircuitError;

/// The closed set of gate kinds supported by the circuit builder.
///
/// Single-qubit: `H`, `X`, `Y`, `Z`, `S`, `T`, the rotations `Rx`/`Ry`/`Rz`,
/// and `Measure`. Two-qubit: `Cx`, `Cz`, `Swap`, always acting on the pair
/// `(qubit, qubit + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateKind {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
    /// Rotation around X axis.
    Rx,
    /// Rotation around Y axis.
    Ry,
    /// Rotation around Z axis.
    Rz,
    /// Controlled-X (CNOT) on `(qubit, qubit + 1)`.
    Cx,
    /// Controlled-Z on `(qubit, qubit + 1)`.
    Cz,
    /// SWAP of `qubit` and `qubit + 1`.
    Swap,
    /// Measurement marker; leaves the statevector untouched in simulation.
    Measure,
}

impl GateKind {
    /// All gate kinds, in catalog order.
    pub const ALL: [GateKind; 13] = [
        GateKind::H,
        GateKind::X,
        GateKind::Y,
        GateKind::Z,
        GateKind::S,
        GateKind::T,
        GateKind::Rx,
        GateKind::Ry,
        GateKind::Rz,
        GateKind::Cx,
        GateKind::Cz,
        GateKind::Swap,
        GateKind::Measure,
    ];

    /// Canonical lowercase name, as stored by the surrounding application.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::H => "h",
            GateKind::X => "x",
            GateKind::Y => "y",
            GateKind::Z => "z",
            GateKind::S => "s",
            GateKind::T => "t",
            GateKind::Rx => "rx",
            GateKind::Ry => "ry",
            GateKind::Rz => "rz",
            GateKind::Cx => "cx",
            GateKind::Cz => "cz",
            GateKind::Swap => "swap",
            GateKind::Measure => "measure",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> usize {
        match self {
            GateKind::H
            | GateKind::X
            | GateKind::Y
            | GateKind::Z
            | GateKind::S
            | GateKind::T
            | GateKind::Rx
            | GateKind::Ry
            | GateKind::Rz
            | GateKind::Measure => 1,

            GateKind::Cx | GateKind::Cz | GateKind::Swap => 2,
        }
    }

    /// Check if this gate takes a rotation angle.
    #[inline]
    pub fn is_rotation(&self) -> bool {
        matches!(self, GateKind::Rx | GateKind::Ry | GateKind::Rz)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateKind {
    type Err = CircuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| CircuitError::UnknownGate(s.to_string()))
    }
}

/// Optional parameters attached to a placed gate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GateParams {
    /// Rotation angle in radians; meaningful only for `Rx`/`Ry`/`Rz`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
}

impl GateParams {
    /// Parameters carrying a rotation angle.
    pub fn angle(angle: f64) -> Self {
        Self { angle: Some(angle) }
    }
}

/// The qubits a placed gate acts on.
///
/// Two-qubit gates always act on the adjacent pair `(qubit, qubit + 1)`.
/// That adjacency rule is a deliberate simplification of the builder, and
/// this type is the only place it is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operands {
    /// A single-qubit gate on the given qubit.
    Single(usize),
    /// A two-qubit gate on `control` and `target = control + 1`.
    Pair {
        /// First operand (control for `Cx`/`Cz`).
        control: usize,
        /// Second operand, always `control + 1`.
        target: usize,
    },
}

/// A gate placed on the circuit grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gate {
    /// The kind of gate.
    pub kind: GateKind,
    /// The qubit row (first operand for two-qubit kinds).
    pub qubit: usize,
    /// The time-step column.
    pub column: usize,
    /// Gate parameters.
    #[serde(default)]
    pub params: GateParams,
}

impl Gate {
    /// Create a placed gate without parameters.
    pub fn new(kind: GateKind, qubit: usize, column: usize) -> Self {
        Self {
            kind,
            qubit,
            column,
            params: GateParams::default(),
        }
    }

    /// Attach parameters.
    #[must_use]
    pub fn with_params(mut self, params: GateParams) -> Self {
        self.params = params;
        self
    }

    /// The qubits this gate acts on.
    pub fn operands(&self) -> Operands {
        match self.kind.num_qubits() {
            1 => Operands::Single(self.qubit),
            _ => Operands::Pair {
                control: self.qubit,
                target: self.qubit + 1,
            },
        }
    }

    /// Rotation angle, defaulting to π/2 when unset.
    pub fn angle(&self) -> f64 {
        self.params.angle.unwrap_or(FRAC_PI_2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_kind_properties() {
        assert_eq!(GateKind::H.num_qubits(), 1);
        assert_eq!(GateKind::Measure.num_qubits(), 1);
        assert_eq!(GateKind::Cx.num_qubits(), 2);
        assert_eq!(GateKind::Swap.num_qubits(), 2);

        assert!(GateKind::Rx.is_rotation());
        assert!(!GateKind::Cz.is_rotation());
    }

    #[test]
    fn test_gate_kind_roundtrip_names() {
        for kind in GateKind::ALL {
            assert_eq!(kind.name().parse::<GateKind>().unwrap(), kind);
        }
        assert!("toffoli".parse::<GateKind>().is_err());
    }

    #[test]
    fn test_operands() {
        let h = Gate::new(GateKind::H, 2, 0);
        assert_eq!(h.operands(), Operands::Single(2));

        let cx = Gate::new(GateKind::Cx, 1, 0);
        assert_eq!(
            cx.operands(),
            Operands::Pair {
                control: 1,
                target: 2
            }
        );
    }

    #[test]
    fn test_default_angle() {
        let bare = Gate::new(GateKind::Rx, 0, 0);
        assert!((bare.angle() - FRAC_PI_2).abs() < 1e-12);

        let set = Gate::new(GateKind::Rx, 0, 0).with_params(GateParams::angle(1.25));
        assert!((set.angle() - 1.25).abs() < 1e-12);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&GateKind::Measure).unwrap();
        assert_eq!(json, "\"measure\"");
        let kind: GateKind = serde_json::from_str("\"cx\"").unwrap();
        assert_eq!(kind, GateKind::Cx);
    }
}
